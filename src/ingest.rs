// src/ingest.rs
//
// One archive → one `Dataset`.
//
// Lookup tables (geography, SOC titles, O*NET titles) are optional; the
// wage table is not. Unresolved codes fall back to the raw code as label.

use std::collections::{HashMap, HashSet};
use std::error::Error;

use crate::archive::Archive;
use crate::compact::{build_dataset, NamedWage};
use crate::model::{Dataset, Occupation};
use crate::onet::{self, MergeStats, OnetMap};
use crate::specs::{geography, onet_titles, soc_titles, wages};

/// Counters for one archive, reported by the runner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub area_names: usize,
    pub soc_titles: usize,
    pub wage_rows_read: usize,
    pub wage_rows_kept: usize,
    pub csv_records_skipped: usize,
    pub onet: MergeStats,
}

/// Read only the O*NET title table (for the cross-archive fallback).
pub fn read_onet_map(bytes: Vec<u8>) -> Result<Option<OnetMap>, Box<dyn Error>> {
    let mut archive = Archive::from_bytes(bytes)?;
    Ok(archive.load_table(&onet_titles::FILE)?.map(|t| onet_titles::title_map(&t)))
}

/// Process one archive.
///
/// `Ok(None)` means the archive holds no wage table; the caller should log
/// and move on. Errors are reserved for unreadable archives.
pub fn process_archive(
    bytes: Vec<u8>,
    year_label: &str,
    onet_fallback: Option<&OnetMap>,
) -> Result<Option<(Dataset, IngestReport)>, Box<dyn Error>> {
    let mut archive = Archive::from_bytes(bytes)?;
    let mut report = IngestReport::default();

    let Some(wage_table) = archive.load_table(&wages::FILE)? else {
        loge!("Ingest: {year_label}: could not find wage data file (entries={:?})", archive.entries());
        return Ok(None);
    };

    let area_map = archive
        .load_table(&geography::FILE)?
        .map(|t| { report.csv_records_skipped += t.skipped; geography::area_map(&t) })
        .unwrap_or_default();
    let soc_map = archive
        .load_table(&soc_titles::FILE)?
        .map(|t| { report.csv_records_skipped += t.skipped; soc_titles::title_map(&t) })
        .unwrap_or_default();
    let local_onet = archive
        .load_table(&onet_titles::FILE)?
        .map(|t| { report.csv_records_skipped += t.skipped; onet_titles::title_map(&t) });

    report.area_names = area_map.len();
    report.soc_titles = soc_map.len();
    report.csv_records_skipped += wage_table.skipped;
    logf!("Ingest: {year_label}: Areas: {}, Occupations: {}", area_map.len(), soc_map.len());

    let (base, rows) = collect_wages(&wage_table, &area_map, &soc_map, &mut report);

    let merged = onet::merge_maps(local_onet.as_ref(), onet_fallback, &mut report.onet);
    let specialties = onet::attach_specialties(&base, &merged, &mut report.onet);
    logf!(
        "Ingest: {year_label}: O*NET local={} borrowed={} attached={} suppressed={} orphaned={}",
        report.onet.local, report.onet.borrowed, report.onet.attached,
        report.onet.suppressed, report.onet.orphaned
    );

    let mut occupations = base;
    occupations.extend(specialties);

    let ds = build_dataset(year_label, occupations, rows);
    logf!(
        "Ingest: {year_label}: Processed: {} wage records, {} occupations, {} areas",
        ds.wages.len(), ds.occupations.len(), ds.areas.len()
    );
    Ok(Some((ds, report)))
}

/// Apply the row gate and resolve labels. Returns the wage-bearing base
/// occupations (first-seen order) and the named rows.
pub fn collect_wages(
    table: &crate::csv::Table,
    area_map: &HashMap<String, String>,
    soc_map: &HashMap<String, String>,
    report: &mut IngestReport,
) -> (Vec<Occupation>, Vec<NamedWage>) {
    let cols = wages::Columns::resolve(table);

    let mut base: Vec<Occupation> = Vec::new();
    let mut seen_soc: HashSet<String> = HashSet::new();
    let mut rows = Vec::with_capacity(table.len());

    for rec in &table.records {
        report.wage_rows_read += 1;
        let Some(row) = cols.row(rec) else { continue };

        let area_name = area_map.get(&row.area_code).cloned().unwrap_or(row.area_code);
        if seen_soc.insert(row.soc_code.clone()) {
            let title = soc_map.get(&row.soc_code).map(String::as_str).unwrap_or(row.soc_code.as_str());
            base.push(Occupation::base(&row.soc_code, title));
        }
        rows.push(NamedWage { soc_code: row.soc_code, area_name, levels: row.levels });
    }

    report.wage_rows_kept = rows.len();
    (base, rows)
}
