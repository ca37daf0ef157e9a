// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    lookup::LookupResult,
    model::{Dataset, Manifest, Occupation},
};

use super::{actions, components};

/// Worker → UI handoff for one year load.
pub type LoadSlot = Arc<Mutex<Option<Result<Dataset, String>>>>;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Prevailing Wage Finder",
        options,
        Box::new(|cc| Ok(Box::new(App::new(state, &cc.egui_ctx)))),
    )?;
    Ok(())
}

pub struct App {
    // session state (UI thread only)
    pub state: AppState,

    // data
    pub manifest: Option<Manifest>,
    pub selected_year: String,
    pub dataset: Option<Dataset>,

    // year load in flight (worker writes the slot)
    pub loading: Option<LoadSlot>,

    // single error banner
    pub error: Option<String>,

    // status line (workers write here)
    pub status: Arc<Mutex<String>>,

    // search form
    pub query: String,
    pub selected: Option<Occupation>,
    pub salary_text: String,
    pub show_dropdown: bool,

    // results
    pub results: Option<LookupResult>,

    // deferred bucketing: salary waiting for its frame, and whether
    // the "Searching..." frame has been painted yet
    pub pending_salary: Option<f64>,
    pub pending_painted: bool,
}

impl App {
    pub fn new(state: AppState, ctx: &egui::Context) -> Self {
        let mut app = Self {
            state,
            manifest: None,
            selected_year: s!(),
            dataset: None,
            loading: None,
            error: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            query: s!(),
            selected: None,
            salary_text: s!(),
            show_dropdown: false,
            results: None,
            pending_salary: None,
            pending_painted: false,
        };

        actions::load_manifest(&mut app);
        if !app.selected_year.is_empty() {
            actions::switch_year(&mut app, ctx);
        }
        logf!("Init: data_dir={} year={:?}", app.state.data_dir.display(), app.selected_year);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut g) = self.status.lock() {
            *g = msg.into();
        }
    }

    #[inline]
    pub fn is_loading(&self) -> bool { self.loading.is_some() }

    #[inline]
    pub fn is_searching(&self) -> bool { self.pending_salary.is_some() }

    #[inline]
    pub fn can_search(&self) -> bool {
        self.selected.is_some()
            && !self.salary_text.is_empty()
            && self.dataset.is_some()
            && !self.is_loading()
            && !self.is_searching()
    }

    /// Forget the current pick and anything derived from it.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.query.clear();
        self.results = None;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_load(self);
        actions::run_pending(self);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Prevailing Wage Finder");
            ui.label("Find where your salary qualifies as each DOL wage level");
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let text = self.status.lock().map(|g| g.clone()).unwrap_or_default();
            ui.label(text);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::banner::draw(ui, self);

            if self.manifest.is_none() {
                return;
            }

            components::search_bar::draw(ui, self, ctx);
            ui.separator();

            if self.is_loading() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(format!("Loading FY {} data...", self.selected_year));
                });
            } else if self.results.is_some() {
                components::results::draw(ui, self);
            } else if self.dataset.is_some() {
                components::info_panel::draw(ui, self);
            }
        });

        // Paint "Searching..." for one frame before doing the work.
        if self.is_searching() {
            self.pending_painted = true;
            ctx.request_repaint();
        }
    }
}
