// tests/dataset_roundtrip.rs
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use flate2::{write::GzEncoder, Compression};
use wage_finder::compact::{build_dataset, order_occupations, NamedWage};
use wage_finder::config::options::BuildOptions;
use wage_finder::file::{encode_dataset, write_dataset, write_manifest};
use wage_finder::model::{Manifest, Occupation};
use wage_finder::store::{self, LoadError};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("wage_finder_rt_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn row(soc: &str, area: &str, l2: u32) -> NamedWage {
    NamedWage { soc_code: soc.into(), area_name: area.into(), levels: [l2 - 10_000, l2, l2 + 10_000, l2 + 20_000] }
}

fn sample() -> wage_finder::model::Dataset {
    let rows = vec![
        row("15-1252", "Zanesville, OH", 90_000),
        row("15-1252", "Akron, OH", 95_000),
        row("15-1243", "Zanesville, OH", 100_000),
        row("15-1243", "Columbus, OH", 105_000),
        row("15-1243", "Akron, OH", 110_000),
    ];
    let occs = vec![
        Occupation::base("15-1252", "Software Developers"),
        Occupation::base("15-1243", "Database Architects"),
        Occupation::specialty("15-1243", "Data Warehousing Specialists", "15-1243.01"),
    ];
    build_dataset("2025-26", occs, rows)
}

#[test]
fn areas_are_interned_sorted_and_unique() {
    let ds = sample();
    assert_eq!(ds.areas, vec!["Akron, OH", "Columbus, OH", "Zanesville, OH"]);
    assert_eq!(ds.wages.len(), 5);
    // source order of wage rows is kept
    assert_eq!(ds.area_name(ds.wages[0].area_index), Some("Zanesville, OH"));
    assert_eq!(ds.area_name(ds.wages[1].area_index), Some("Akron, OH"));
}

#[test]
fn occupations_ordered_by_title() {
    let titles: Vec<String> = sample().occupations.into_iter().map(|o| o.title).collect();
    assert_eq!(titles, vec!["Data Warehousing Specialists", "Database Architects", "Software Developers"]);
}

#[test]
fn duplicate_keys_collapse_to_one() {
    let occs = vec![
        Occupation::specialty("15-1243", "Zeta Title", "15-1243.01"),
        Occupation::base("15-1243", "Database Architects"),
        Occupation::specialty("15-1243", "Alpha Title", "15-1243.01"),
        Occupation::base("15-1243", "Database Architects"),
    ];
    let out = order_occupations(occs);
    assert_eq!(out.len(), 2);
    // last in title order wins for the shared O*NET key
    let spec = out.iter().find(|o| o.onet_code.is_some()).unwrap();
    assert_eq!(spec.title, "Zeta Title");
    // and the list stays sorted
    assert_eq!(out[0].title, "Database Architects");
    assert_eq!(out[1].title, "Zeta Title");
}

#[test]
fn gzip_blob_decodes_to_the_same_dataset() {
    let ds = sample();
    let (bytes, stats) = encode_dataset(&ds).unwrap();
    assert_eq!(stats.compressed_bytes, bytes.len());
    assert!(stats.json_bytes > 0);
    assert_eq!(&bytes[..2], &[0x1f, 0x8b]);

    let back = store::decode_dataset(&bytes).unwrap();
    assert_eq!(back, ds);
}

#[test]
fn wire_format_uses_short_keys() {
    let (bytes, _) = encode_dataset(&sample()).unwrap();
    let mut json = String::new();
    std::io::Read::read_to_string(&mut flate2::read::GzDecoder::new(&bytes[..]), &mut json).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(v["year"], "2025-26");
    assert_eq!(v["occupations"][0]["o"], "15-1243.01");
    assert!(v["occupations"][1].get("o").is_none());
    assert!(v["wages"][0]["a"].is_u64());
    assert!(v["wages"][0]["s"].is_string());
    assert!(v["wages"][0]["l4"].is_u64());
}

#[test]
fn written_year_loads_back_through_the_manifest() {
    let dir = tmp_dir("write_load");
    let opts = BuildOptions { data_dir: dir.clone(), ..BuildOptions::default() };
    let ds = sample();

    let (entry, path, _) = write_dataset(&opts, &ds).unwrap();
    assert_eq!(entry.file, "wages-2025-26.bin");
    assert!(path.exists());

    let mut manifest = Manifest::default();
    manifest.upsert(entry);
    write_manifest(&opts.manifest_path(), &manifest).unwrap();

    let m = store::load_manifest(&dir).unwrap();
    assert_eq!(m, manifest);
    let loaded = store::load_by_label(&dir, &m, None).unwrap();
    assert_eq!(loaded, ds);
}

#[test]
fn load_failures_are_typed() {
    let dir = tmp_dir("failures");

    assert!(matches!(store::load_manifest(&dir), Err(LoadError::Io { .. })));
    assert!(matches!(store::decode_dataset(b"plain text"), Err(LoadError::Decompress(_))));

    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(b"{not json").unwrap();
    let gz = enc.finish().unwrap();
    assert!(matches!(store::decode_dataset(&gz), Err(LoadError::Json(_))));

    let m = Manifest::default();
    assert!(matches!(store::load_by_label(&dir, &m, Some("1999-00")), Err(LoadError::UnknownYear(_))));
    assert!(matches!(store::load_by_label(&dir, &m, None), Err(LoadError::UnknownYear(_))));
}
