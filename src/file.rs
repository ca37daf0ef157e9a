// src/file.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use flate2::{write::GzEncoder, Compression};

use crate::config::options::BuildOptions;
use crate::model::{Dataset, Manifest, YearEntry};

/// Size accounting for one written dataset (reported, never acted on).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WriteStats {
    pub json_bytes: usize,
    pub compressed_bytes: usize,
}

impl WriteStats {
    /// Percent saved by compression (`62.5` → 62.5% smaller).
    pub fn saved_pct(&self) -> f64 {
        if self.json_bytes == 0 { return 0.0; }
        (1.0 - self.compressed_bytes as f64 / self.json_bytes as f64) * 100.0
    }

    pub fn compressed_mb(&self) -> f64 {
        self.compressed_bytes as f64 / 1024.0 / 1024.0
    }
}

/// Dataset → JSON → gzip bytes.
pub fn encode_dataset(ds: &Dataset) -> Result<(Vec<u8>, WriteStats), Box<dyn std::error::Error>> {
    let json = serde_json::to_vec(ds)?;
    let mut enc = GzEncoder::new(Vec::with_capacity(json.len() / 4), Compression::default());
    enc.write_all(&json)?;
    let gz = enc.finish()?;
    let stats = WriteStats { json_bytes: json.len(), compressed_bytes: gz.len() };
    Ok((gz, stats))
}

/// Write `wages-<year>.bin` into the data dir (overwrites). Returns the
/// manifest entry to record plus size stats.
pub fn write_dataset(
    opts: &BuildOptions,
    ds: &Dataset,
) -> Result<(YearEntry, PathBuf, WriteStats), Box<dyn std::error::Error>> {
    ensure_directory(&opts.data_dir)?;
    let file = BuildOptions::dataset_file_name(&ds.year);
    let path = opts.data_dir.join(&file);

    let (bytes, stats) = encode_dataset(ds)?;
    fs::write(&path, bytes)?;

    Ok((YearEntry { label: ds.year.clone(), file }, path, stats))
}

/// Pretty JSON, overwrites.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let text = serde_json::to_string_pretty(manifest)?;
    fs::write(path, text)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Archives in `dir` named `<prefix>*.<ext>`, sorted by name.
pub fn list_archives(dir: &Path, prefix: &str, ext: &str) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() { continue; }
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else { continue };
        let ext_ok = path.extension().and_then(|s| s.to_str()) == Some(ext);
        if name.starts_with(prefix) && ext_ok {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

/// Directories in `dir` named `<prefix>*` (already-extracted bundles).
pub fn list_prefixed_dirs(dir: &Path, prefix: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_dir() { continue; }
        if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
            if name.starts_with(prefix) { out.push(s!(name)); }
        }
    }
    out.sort();
    Ok(out)
}
