// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    /// Directory scanned for `<prefix>*.zip` archives
    pub input_dir: PathBuf,
    /// Where `wages-<year>.bin` and the manifest are written
    pub data_dir: PathBuf,
    pub prefix: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            prefix: s!(ARCHIVE_PREFIX),
        }
    }
}

impl BuildOptions {
    pub fn manifest_path(&self) -> PathBuf {
        self.data_dir.join(MANIFEST_FILE)
    }

    pub fn dataset_file_name(year_label: &str) -> String {
        join!(DATASET_PREFIX, year_label, ".", DATASET_EXT)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    #[default]
    Name,
    Wage,
}

impl SortMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "name" | "a-z" | "az" => Some(SortMode::Name),
            "wage" => Some(SortMode::Wage),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self { SortMode::Name => "A-Z", SortMode::Wage => "By Wage" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupOptions {
    pub data_dir: PathBuf,
    /// None → newest year in the manifest
    pub year: Option<String>,
    pub sort: SortMode,
    /// None → print every tier
    pub level: Option<u8>,
    pub filter: String,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            year: None,
            sort: SortMode::Name,
            level: None,
            filter: s!(),
        }
    }
}
