// tests/gui_load.rs
use std::fs;
use std::path::PathBuf;
use std::{thread, time::Duration};

use eframe::egui;
use wage_finder::config::options::BuildOptions;
use wage_finder::config::state::AppState;
use wage_finder::file::{write_dataset, write_manifest};
use wage_finder::gui::{actions, app::App};
use wage_finder::model::{Dataset, Manifest, Occupation, YearEntry};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("wage_finder_gui_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn wait_loaded(app: &mut App) {
    for _ in 0..500 {
        actions::poll_load(app);
        if !app.is_loading() { return; }
        thread::sleep(Duration::from_millis(10));
    }
    panic!("year load never finished");
}

fn app_for(dir: &PathBuf) -> App {
    let state = AppState { data_dir: dir.clone(), ..AppState::default() };
    App::new(state, &egui::Context::default())
}

#[test]
fn year_is_kept_even_when_the_file_labels_itself_differently() {
    let dir = tmp_dir("label_mismatch");
    let opts = BuildOptions { data_dir: dir.clone(), ..BuildOptions::default() };
    let ds = Dataset {
        year: "FY2025".into(),
        occupations: vec![Occupation::base("15-1243", "Database Architects")],
        areas: vec!["Springfield MSA".into()],
        wages: Vec::new(),
    };
    let (written, _, _) = write_dataset(&opts, &ds).unwrap();
    let manifest = Manifest { years: vec![YearEntry { label: "2025-26".into(), file: written.file }] };
    write_manifest(&opts.manifest_path(), &manifest).unwrap();

    let mut app = app_for(&dir);
    assert_eq!(app.selected_year, "2025-26");
    wait_loaded(&mut app);

    assert!(app.error.is_none());
    assert_eq!(app.dataset.as_ref().map(|d| d.occupations.len()), Some(1));
}

#[test]
fn unreadable_year_shows_the_banner() {
    let dir = tmp_dir("missing_file");
    let manifest = Manifest {
        years: vec![YearEntry { label: "2025-26".into(), file: "wages-2025-26.bin".into() }],
    };
    write_manifest(&dir.join("manifest.json"), &manifest).unwrap();

    let mut app = app_for(&dir);
    wait_loaded(&mut app);

    assert!(app.dataset.is_none());
    assert!(app.error.as_deref().is_some_and(|e| e.starts_with("Failed to load")));
}
