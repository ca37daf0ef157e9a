// src/gui/components/results.rs
//
// Summary + level tabs + the active tier's location table.
// Filter and sort only change what is shown, never the tier a location is in.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::options::SortMode,
    gui::app::App,
    lookup::{wage_level, TierView},
};
use super::level_color;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(result) = &app.results else { return };
    let gui = &mut app.state.gui;

    ui.heading(&result.occupation.title);
    ui.label(result.summary_line());
    ui.add_space(6.0);

    // Level tabs
    let counts = result.counts();
    ui.horizontal(|ui| {
        for level in 1..=4u8 {
            let label = wage_level(level).map(|w| w.label).unwrap_or_default();
            let text = RichText::new(format!("{}  {label}", counts[level as usize]))
                .color(level_color(level));
            if ui.selectable_label(gui.active_level == level, text).clicked() {
                logd!("UI: tier tab {} → {}", gui.active_level, level);
                gui.active_level = level;
            }
        }
    });
    ui.separator();

    let tier = gui.active_level;
    let view = TierView::new(result, tier, &gui.location_filter, gui.sort);

    // Toolbar
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut gui.location_filter)
                .hint_text("Filter locations...")
                .desired_width(220.0),
        );
        for mode in [SortMode::Name, SortMode::Wage] {
            ui.selectable_value(&mut gui.sort, mode, mode.label());
        }
        ui.label(format!("{} of {}", view.len(), view.tier_len()));
    });
    ui.add_space(4.0);

    if view.is_empty() {
        ui.label(RichText::new(view.empty_message()).weak());
    } else {
        let avail_h = (ui.available_height() - 28.0).max(120.0);
        TableBuilder::new(ui)
            .striped(true)
            .min_scrolled_height(0.0)
            .max_scroll_height(avail_h)
            .column(Column::remainder().clip(true))
            .column(Column::auto().at_least(160.0))
            .header(20.0, |mut header| {
                header.col(|ui| { ui.strong("Location"); });
                header.col(|ui| { ui.strong("Wage range"); });
            })
            .body(|body| {
                body.rows(18.0, view.len(), |mut row| {
                    let Some(loc) = view.row(row.index()) else { return };
                    row.col(|ui| { ui.label(&loc.area); });
                    row.col(|ui| { ui.label(loc.range_label(tier)); });
                });
            });
    }

    if let Some(line) = result.below_threshold_line() {
        ui.add_space(6.0);
        ui.label(RichText::new(line).weak());
    }
}
