// src/gui/actions/load.rs
use std::{
    sync::{Arc, Mutex},
    thread,
};

use eframe::egui;

use crate::{
    gui::{app::App, progress::GuiProgress},
    model::YearEntry,
    progress::Progress,
    store,
};

/// Read the manifest and pick the newest year. Failure → banner, no retry.
pub fn load_manifest(app: &mut App) {
    match store::load_manifest(&app.state.data_dir) {
        Ok(m) => {
            logf!("Manifest: {} year(s)", m.years.len());
            app.selected_year = m.latest().map(|y| y.label.clone()).unwrap_or_default();
            if m.years.is_empty() {
                app.status("No fiscal years in manifest");
            }
            app.manifest = Some(m);
        }
        Err(e) => {
            loge!("Manifest: {e}");
            app.error = Some(e.to_string());
            app.status("Manifest unavailable");
        }
    }
}

/// Drop the current year and load `app.selected_year` on a worker thread.
pub fn switch_year(app: &mut App, ctx: &egui::Context) {
    let Some(entry) = current_entry(app) else {
        loge!("Year: {:?} not in manifest", app.selected_year);
        app.error = Some(format!("Unknown fiscal year: {}", app.selected_year));
        return;
    };

    logf!("Year: switch → {}", entry.label);
    app.dataset = None;
    app.clear_selection();

    let slot = Arc::new(Mutex::new(None));
    let slot_worker = slot.clone();
    let data_dir = app.state.data_dir.clone();
    let ctx2 = ctx.clone();
    let mut prog = GuiProgress::new(app.status.clone());

    thread::spawn(move || {
        prog.begin(1);
        prog.log(&format!("Loading FY {} data...", entry.label));
        let res = store::load_year(&data_dir, &entry).map_err(|e| e.to_string());
        match &res {
            Ok(_) => prog.item_done(&entry.label),
            Err(e) => prog.item_skipped(&entry.label, e),
        }
        prog.finish();
        if let Ok(mut g) = slot_worker.lock() {
            *g = Some(res);
        }
        ctx2.request_repaint();
    });

    app.loading = Some(slot);
}

/// Take the worker result if it has arrived.
pub fn poll_load(app: &mut App) {
    let Some(slot) = &app.loading else { return };
    let done = match slot.lock() {
        Ok(mut g) => g.take(),
        Err(_) => Some(Err(s!("Failed to load wage data: loader thread panicked"))),
    };
    let Some(res) = done else { return };

    app.loading = None;
    match res {
        // switch_year replaces the slot, so this is always the selected year
        Ok(ds) => app.dataset = Some(ds),
        Err(e) => {
            loge!("Year: {e}");
            app.error = Some(e);
        }
    }
}

fn current_entry(app: &App) -> Option<YearEntry> {
    app.manifest.as_ref()?.find(&app.selected_year).cloned()
}
