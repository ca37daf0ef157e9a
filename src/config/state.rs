// src/config/state.rs
use std::path::PathBuf;

use super::consts::{DEFAULT_ACTIVE_LEVEL, DEFAULT_DATA_DIR};
use super::options::SortMode;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tier tab (1..=4)
    pub active_level: u8,
    pub sort: SortMode,

    /// Location filter for the active tier (display only)
    pub location_filter: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 960,
            window_h: 720,
            active_level: DEFAULT_ACTIVE_LEVEL,
            sort: SortMode::Name,
            location_filter: s!(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            gui: GuiState::default(),
        }
    }
}
