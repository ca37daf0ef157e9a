// src/gui/components/banner.rs
//
// The single error banner. Dismissing it only clears the message.

use eframe::egui::{self, Color32, RichText};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(msg) = app.error.clone() else { return };

    egui::Frame::group(ui.style())
        .fill(Color32::from_rgb(0x7f, 0x1d, 0x1d))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(msg).color(Color32::WHITE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("×").clicked() {
                        app.error = None;
                    }
                });
            });
        });
    ui.add_space(6.0);
}
