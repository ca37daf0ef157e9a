// src/config/consts.rs

// Builder input
pub const DEFAULT_INPUT_DIR: &str = ".";
pub const ARCHIVE_PREFIX: &str = "OFLC";
pub const ARCHIVE_EXT: &str = "zip";

// Builder output / client input
pub const DEFAULT_DATA_DIR: &str = "public/data";
pub const MANIFEST_FILE: &str = "manifest.json";
pub const DATASET_PREFIX: &str = "wages-";
pub const DATASET_EXT: &str = "bin";

// Wage normalization
pub const HOURS_PER_YEAR: f64 = 2080.0;
pub const HOURLY_CUTOFF: f64 = 500.0; // anything below is an hourly rate

// Lookup
pub const SEARCH_LIMIT: usize = 50;
pub const DEFAULT_ACTIVE_LEVEL: u8 = 2;

// Local state
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
