// src/gui/components/info_panel.rs
//
// Wage level guide, shown while a year is loaded but no search has run.

use eframe::egui::{self, RichText};

use crate::{gui::app::App, lookup::WAGE_LEVELS};
use super::level_color;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.heading("Wage Level Guide");
    ui.add_space(6.0);

    ui.horizontal_wrapped(|ui| {
        for w in &WAGE_LEVELS {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_min_width(160.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(w.label).strong().color(level_color(w.level)));
                    ui.label(format!("{} percentile", w.percentile));
                    ui.label(RichText::new(w.desc).weak());
                });
            });
        }
    });

    if let Some(ds) = &app.dataset {
        ui.add_space(10.0);
        ui.label(format!(
            "FY {} data: {} occupations across {} areas",
            ds.year, ds.occupations.len(), ds.areas.len()
        ));
    }
}
