// src/store.rs
//
// Client-side loading of builder output: manifest + one year at a time.
// A year is read wholesale and replaced wholesale on switch.

use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

use flate2::read::GzDecoder;

use crate::config::consts::MANIFEST_FILE;
use crate::model::{Dataset, Manifest, YearEntry};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to load: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load wage data: not a valid gzip stream ({0})")]
    Decompress(#[source] std::io::Error),

    #[error("Failed to load: malformed JSON ({0})")]
    Json(#[from] serde_json::Error),

    #[error("Unknown fiscal year: {0}")]
    UnknownYear(String),
}

pub fn manifest_path(data_dir: &Path) -> PathBuf {
    data_dir.join(MANIFEST_FILE)
}

pub fn load_manifest(data_dir: &Path) -> Result<Manifest, LoadError> {
    let path = manifest_path(data_dir);
    let text = fs::read_to_string(&path).map_err(|source| LoadError::Io { path, source })?;
    Ok(serde_json::from_str(&text)?)
}

/// gzip bytes → Dataset
pub fn decode_dataset(bytes: &[u8]) -> Result<Dataset, LoadError> {
    let mut json = String::new();
    GzDecoder::new(bytes)
        .read_to_string(&mut json)
        .map_err(LoadError::Decompress)?;
    Ok(serde_json::from_str(&json)?)
}

pub fn load_year(data_dir: &Path, entry: &YearEntry) -> Result<Dataset, LoadError> {
    let path = data_dir.join(&entry.file);
    let bytes = fs::read(&path).map_err(|source| LoadError::Io { path: path.clone(), source })?;
    let ds = decode_dataset(&bytes)?;
    logf!(
        "Store: Loaded {} ← {} (occupations={}, areas={}, wages={})",
        entry.label, path.display(), ds.occupations.len(), ds.areas.len(), ds.wages.len()
    );
    Ok(ds)
}

/// Resolve a label (None → newest) against the manifest and load it.
pub fn load_by_label(
    data_dir: &Path,
    manifest: &Manifest,
    label: Option<&str>,
) -> Result<Dataset, LoadError> {
    let entry = match label {
        Some(l) => manifest.find(l).ok_or_else(|| LoadError::UnknownYear(s!(l)))?,
        None => manifest.latest().ok_or_else(|| LoadError::UnknownYear(s!("(none in manifest)")))?,
    };
    load_year(data_dir, entry)
}
