// src/gui/components/mod.rs
pub mod banner;
pub mod info_panel;
pub mod results;
pub mod search_bar;

use eframe::egui::Color32;

use crate::lookup::wage_level;

/// Accent colour for a wage level tab/card; grey for "below level 1".
pub fn level_color(level: u8) -> Color32 {
    wage_level(level)
        .map(|w| Color32::from_rgb(w.color[0], w.color[1], w.color[2]))
        .unwrap_or(Color32::GRAY)
}
