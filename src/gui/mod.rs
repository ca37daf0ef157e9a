// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod progress;
pub mod actions;

pub use app::run;
