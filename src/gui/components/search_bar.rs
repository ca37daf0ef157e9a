// src/gui/components/search_bar.rs
//
// Year selector, occupation search (with dropdown), salary input and the
// Search button. Year changes reload the dataset and clear the pick.

use eframe::egui::{self, Key, RichText, TextEdit};

use crate::{
    core::sanitize::format_salary_input,
    gui::{actions, app::App},
    lookup,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App, ctx: &egui::Context) {
    let busy = app.is_loading();

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 10.0;
        year_selector(ui, app, ctx);

        ui.add_enabled_ui(!busy, |ui| {
            ui.vertical(|ui| {
                ui.label("Occupation");
                occupation_field(ui, app);
            });

            ui.vertical(|ui| {
                ui.label("Annual Salary");
                salary_field(ui, app);
            });
        });

        let text = if app.is_searching() { "Searching..." } else { "Search" };
        ui.vertical(|ui| {
            ui.label("");
            if ui.add_enabled(app.can_search(), egui::Button::new(text)).clicked() {
                actions::request_search(app);
            }
        });
    });

    if app.show_dropdown && !busy {
        dropdown(ui, app);
    }
}

fn year_selector(ui: &mut egui::Ui, app: &mut App, ctx: &egui::Context) {
    let Some(manifest) = &app.manifest else { return };
    let labels: Vec<String> = manifest.sorted_desc().iter().map(|y| y.label.clone()).collect();

    let before = app.selected_year.clone();
    ui.vertical(|ui| {
        ui.label("Fiscal Year");
        egui::ComboBox::from_id_salt("fiscal_year")
            .selected_text(format!("FY {}", app.selected_year))
            .show_ui(ui, |ui| {
                for l in &labels {
                    ui.selectable_value(&mut app.selected_year, l.clone(), format!("FY {l}"));
                }
            });
    });

    if app.selected_year != before {
        actions::switch_year(app, ctx);
    }
}

fn occupation_field(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let resp = ui.add(
            TextEdit::singleline(&mut app.query)
                .hint_text("Search by title or SOC code...")
                .desired_width(320.0),
        );
        if resp.changed() {
            app.show_dropdown = true;
            if app.query.is_empty() { app.selected = None; }
        }
        if resp.gained_focus() {
            app.show_dropdown = true;
        }
        if resp.has_focus() && ui.input(|i| i.key_pressed(Key::Escape)) {
            app.show_dropdown = false;
        }

        if app.selected.is_some() && ui.small_button("×").on_hover_text("Clear").clicked() {
            app.clear_selection();
        }
    });
}

fn salary_field(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("$");
        let resp = ui.add(
            TextEdit::singleline(&mut app.salary_text)
                .hint_text("120,000")
                .desired_width(120.0),
        );
        if resp.changed() {
            app.salary_text = format_salary_input(&app.salary_text);
        }
        if resp.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            actions::request_search(app);
        }
    });
}

fn dropdown(ui: &mut egui::Ui, app: &mut App) {
    let Some(ds) = &app.dataset else { return };
    let hits = lookup::search(ds, &app.query);
    if hits.is_empty() { return; }

    let mut picked = None;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        egui::ScrollArea::vertical()
            .id_salt("occupation_dropdown")
            .max_height(240.0)
            .show(ui, |ui| {
                for occ in hits {
                    let text = RichText::new(format!("{}    {}", occ.title, occ.display_code()));
                    if ui.selectable_label(false, text).clicked() {
                        picked = Some(occ.clone());
                    }
                }
            });
    });

    if let Some(occ) = picked {
        logd!("UI: picked {} ({})", occ.title, occ.display_code());
        app.query = occ.title.clone();
        app.selected = Some(occ);
        app.show_dropdown = false;
    }
}
