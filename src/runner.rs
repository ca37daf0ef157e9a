// src/runner.rs
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    config::{consts::ARCHIVE_EXT, options::BuildOptions},
    core::sanitize::year_label,
    file::{list_archives, list_prefixed_dirs, write_dataset, write_manifest},
    ingest::{self, IngestReport},
    model::{Manifest, YearEntry},
    onet::{self, OnetMap},
    progress::Progress,
};

/// One year that made it to disk.
#[derive(Clone, Debug)]
pub struct BuiltYear {
    pub entry: YearEntry,
    pub path: PathBuf,
    pub report: IngestReport,
    pub saved_pct: f64,
}

/// Summary of what was produced.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    pub built: Vec<BuiltYear>,
    /// (archive, reason)
    pub skipped: Vec<(PathBuf, String)>,
    /// None when nothing was found to process
    pub manifest: Option<PathBuf>,
}

/// Year label for an archive: first `DDDD-DD` in the name, else the stem.
pub fn label_for(path: &Path) -> String {
    let name = path.file_name().and_then(|s| s.to_str()).unwrap_or_default();
    year_label(name).unwrap_or_else(|| {
        path.file_stem().and_then(|s| s.to_str()).unwrap_or(name).to_string()
    })
}

/// Top-level builder run.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &BuildOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let archives = list_archives(&opts.input_dir, &opts.prefix, ARCHIVE_EXT)?;

    if archives.is_empty() {
        let folders = list_prefixed_dirs(&opts.input_dir, &opts.prefix)?;
        logf!("Build: no {} zip files in {} (folders: {:?})", opts.prefix, opts.input_dir.display(), folders);
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("No {} zip files found. Looking for extracted folders...", opts.prefix));
            p.log(&format!("Found folders: {:?}", folders));
            p.finish();
        }
        return Ok(RunSummary::default());
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(archives.len());
    }

    // Pass 1: cross-archive O*NET fallback, first-seen title wins
    let fallback = collect_onet_fallback(&archives);

    // Pass 2: one dataset per archive
    let mut manifest = Manifest::default();
    let mut summary = RunSummary::default();

    for path in &archives {
        let label = label_for(path);
        logf!("Build: Processing {} as {label}", path.display());
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Processing {}...", path.display()));
        }

        match build_one(opts, path, &label, &fallback) {
            Ok(Some(built)) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!(
                        "  Written: {} ({} wage rows kept of {}, {:.1}% smaller)",
                        built.entry.file, built.report.wage_rows_kept,
                        built.report.wage_rows_read, built.saved_pct
                    ));
                    p.item_done(&label);
                }
                manifest.upsert(built.entry.clone());
                summary.built.push(built);
            }
            Ok(None) => {
                let reason = s!("could not find wage data file");
                if let Some(p) = progress.as_deref_mut() { p.item_skipped(&label, &reason); }
                summary.skipped.push((path.clone(), reason));
            }
            Err(e) => {
                loge!("Build: {} failed: {e}", path.display());
                let reason = e.to_string();
                if let Some(p) = progress.as_deref_mut() { p.item_skipped(&label, &reason); }
                summary.skipped.push((path.clone(), reason));
            }
        }
    }

    let manifest_path = opts.manifest_path();
    write_manifest(&manifest_path, &manifest)?;
    logf!("Build: Manifest written ({} years) → {}", manifest.years.len(), manifest_path.display());
    summary.manifest = Some(manifest_path);

    if let Some(p) = progress.as_deref_mut() {
        p.log("Manifest written. Done!");
        p.finish();
    }
    Ok(summary)
}

fn build_one(
    opts: &BuildOptions,
    path: &Path,
    label: &str,
    fallback: &OnetMap,
) -> Result<Option<BuiltYear>, Box<dyn Error>> {
    let bytes = fs::read(path)?;
    let fb = (!fallback.is_empty()).then_some(fallback);
    let Some((ds, report)) = ingest::process_archive(bytes, label, fb)? else {
        return Ok(None);
    };

    let (entry, written, stats) = write_dataset(opts, &ds)?;
    logf!(
        "Build: Written {} ({:.1}MB, {:.1}% smaller)",
        entry.file, stats.compressed_mb(), stats.saved_pct()
    );
    Ok(Some(BuiltYear { entry, path: written, report, saved_pct: stats.saved_pct() }))
}

/// Unreadable archives are skipped here; pass 2 reports them.
pub fn collect_onet_fallback(archives: &[PathBuf]) -> OnetMap {
    let mut fallback = OnetMap::new();
    for path in archives {
        let map = fs::read(path)
            .map_err(Box::<dyn Error>::from)
            .and_then(ingest::read_onet_map);
        match map {
            Ok(Some(m)) => onet::extend_fallback(&mut fallback, &m),
            Ok(None) => logd!("Build: {} has no O*NET table", path.display()),
            Err(e) => logd!("Build: O*NET pre-scan skipped {}: {e}", path.display()),
        }
    }
    logf!("Build: O*NET fallback codes={}", fallback.len());
    fallback
}

/// Read one archive's O*NET table (used by the `onet-diff` command).
pub fn onet_map_of(path: &Path) -> Result<OnetMap, Box<dyn Error>> {
    let bytes = fs::read(path)?;
    ingest::read_onet_map(bytes)?
        .ok_or_else(|| format!("{}: no O*NET table", path.display()).into())
}
