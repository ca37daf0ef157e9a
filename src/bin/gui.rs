// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::PathBuf;

use eframe::egui::ViewportBuilder;
use wage_finder::{config::state::AppState, gui};

fn main() {
    // optional first arg: data dir holding manifest.json
    let mut state = AppState::default();
    if let Some(dir) = std::env::args().nth(1) {
        state.data_dir = PathBuf::from(dir);
    }

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
