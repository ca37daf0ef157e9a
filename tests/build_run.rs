// tests/build_run.rs
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use wage_finder::cli::{parse_args, Command};
use wage_finder::config::options::{BuildOptions, SortMode};
use wage_finder::progress::NullProgress;
use wage_finder::runner::{self, label_for};
use wage_finder::store;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("wage_finder_build_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn write_zip(path: &Path, files: &[(&str, &str)]) {
    let mut w = ZipWriter::new(Cursor::new(Vec::new()));
    let opts = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, body) in files {
        w.start_file(*name, opts).unwrap();
        w.write_all(body.as_bytes()).unwrap();
    }
    fs::write(path, w.finish().unwrap().into_inner()).unwrap();
}

const WAGES: &str = "Area,SocCode,Level1,Level2,Level3,Level4\n\
12345,15-1243,45.00,55.00,65.00,75.00\n";
const GEOGRAPHY: &str = "Area,AreaName\n12345,Springfield MSA\n";
const ONET: &str = "OnetCode,OnetTitle\n15-1243.01,Data Warehousing Specialists\n";

fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn labels_come_from_the_archive_name() {
    assert_eq!(label_for(Path::new("in/OFLC_Wages_2025-26.zip")), "2025-26");
    assert_eq!(label_for(Path::new("in/OFLC_Wages_FY2024-25_v2.zip")), "2024-25");
    assert_eq!(label_for(Path::new("in/OFLC_misc.zip")), "OFLC_misc");
}

#[test]
fn builds_every_archive_and_writes_the_manifest() {
    let dir = tmp_dir("full");
    write_zip(
        &dir.join("OFLC_Wages_2024-25.zip"),
        &[("Geography.csv", GEOGRAPHY), ("ONET_occs.csv", ONET), ("ALC_Export.csv", WAGES)],
    );
    // newer year ships without its own O*NET table
    write_zip(&dir.join("OFLC_Wages_2025-26.zip"), &[("Geography.csv", GEOGRAPHY), ("ALC_Export.csv", WAGES)]);
    write_zip(&dir.join("OFLC_docs_2023-24.zip"), &[("readme.csv", "a,b\n")]);
    write_zip(&dir.join("other_2022-23.zip"), &[("ALC_Export.csv", WAGES)]);

    let opts = BuildOptions {
        input_dir: dir.clone(),
        data_dir: dir.join("public/data"),
        ..BuildOptions::default()
    };
    let summary = runner::run(&opts, None).unwrap();

    assert_eq!(summary.built.len(), 2);
    assert_eq!(summary.skipped.len(), 1);
    assert!(summary.skipped[0].0.ends_with("OFLC_docs_2023-24.zip"));
    assert_eq!(summary.manifest.as_deref(), Some(opts.manifest_path().as_path()));

    let manifest = store::load_manifest(&opts.data_dir).unwrap();
    let labels: Vec<&str> = manifest.sorted_desc().iter().map(|y| y.label.as_str()).collect();
    assert_eq!(labels, vec!["2025-26", "2024-25"]);
    assert!(opts.data_dir.join("wages-2025-26.bin").exists());

    // newest year borrowed the specialty from the older archive
    let ds = store::load_by_label(&opts.data_dir, &manifest, None).unwrap();
    assert_eq!(ds.year, "2025-26");
    assert!(ds.occupations.iter().any(|o| o.onet_code.as_deref() == Some("15-1243.01")));
    assert_eq!(ds.wages[0].l1, 93_600);
}

#[test]
fn first_archive_wins_a_conflicting_onet_title() {
    let dir = tmp_dir("onet_precedence");
    write_zip(
        &dir.join("OFLC_Wages_2023-24.zip"),
        &[("ONET_occs.csv", "OnetCode,OnetTitle\n15-1243.01,First Title\n"), ("ALC_Export.csv", WAGES)],
    );
    write_zip(
        &dir.join("OFLC_Wages_2024-25.zip"),
        &[("ONET_occs.csv", "OnetCode,OnetTitle\n15-1243.01,Second Title\n"), ("ALC_Export.csv", WAGES)],
    );
    write_zip(&dir.join("OFLC_Wages_2025-26.zip"), &[("ALC_Export.csv", WAGES)]);

    let opts = BuildOptions { input_dir: dir.clone(), data_dir: dir.join("out"), ..BuildOptions::default() };
    runner::run(&opts, None).unwrap();
    let manifest = store::load_manifest(&opts.data_dir).unwrap();

    let title_in = |year: &str| {
        let ds = store::load_by_label(&opts.data_dir, &manifest, Some(year)).unwrap();
        ds.occupations
            .into_iter()
            .find(|o| o.onet_code.as_deref() == Some("15-1243.01"))
            .map(|o| o.title)
            .unwrap()
    };
    // no own table: borrows from the first archive in name order
    assert_eq!(title_in("2025-26"), "First Title");
    // own table always wins
    assert_eq!(title_in("2024-25"), "Second Title");
    assert_eq!(title_in("2023-24"), "First Title");

    let archives = vec![dir.join("OFLC_Wages_2023-24.zip"), dir.join("OFLC_Wages_2024-25.zip")];
    let fallback = runner::collect_onet_fallback(&archives);
    assert_eq!(fallback.get("15-1243.01").map(String::as_str), Some("First Title"));
}

#[test]
fn rerun_overwrites_the_manifest() {
    let dir = tmp_dir("rerun");
    write_zip(&dir.join("OFLC_Wages_2025-26.zip"), &[("ALC_Export.csv", WAGES)]);
    let opts = BuildOptions { input_dir: dir.clone(), data_dir: dir.join("out"), ..BuildOptions::default() };

    runner::run(&opts, None).unwrap();
    runner::run(&opts, Some(&mut NullProgress)).unwrap();
    let manifest = store::load_manifest(&opts.data_dir).unwrap();
    assert_eq!(manifest.years.len(), 1);
}

#[test]
fn no_archives_writes_nothing() {
    let dir = tmp_dir("empty");
    fs::create_dir_all(dir.join("OFLC_extracted")).unwrap();
    let opts = BuildOptions { input_dir: dir.clone(), data_dir: dir.join("out"), ..BuildOptions::default() };

    let summary = runner::run(&opts, None).unwrap();
    assert!(summary.built.is_empty());
    assert!(summary.manifest.is_none());
    assert!(!opts.manifest_path().exists());
}

#[test]
fn cli_parses_commands_and_flags() {
    assert_eq!(parse_args(args(&[])).unwrap(), Command::Help);

    match parse_args(args(&["build", "--input", "raw", "--out", "site/data"])).unwrap() {
        Command::Build(o) => {
            assert_eq!(o.input_dir, PathBuf::from("raw"));
            assert_eq!(o.data_dir, PathBuf::from("site/data"));
            assert_eq!(o.prefix, "OFLC");
        }
        other => panic!("unexpected {other:?}"),
    }

    match parse_args(args(&["lookup", "15-1243", "120,000", "--year", "2024-25", "--sort", "wage", "--level", "2"])).unwrap() {
        Command::Lookup { opts, code, salary } => {
            assert_eq!(code, "15-1243");
            assert_eq!(salary, "120,000");
            assert_eq!(opts.year.as_deref(), Some("2024-25"));
            assert_eq!(opts.sort, SortMode::Wage);
            assert_eq!(opts.level, Some(2));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn cli_rejects_bad_input() {
    assert!(parse_args(args(&["lookup", "15-1243"])).is_err());
    assert!(parse_args(args(&["search", "--bogus"])).is_err());
    assert!(parse_args(args(&["lookup", "a", "1", "--level", "5"])).is_err());
    assert!(parse_args(args(&["search", "--data"])).is_err());
    assert!(parse_args(args(&["frobnicate"])).is_err());
}
