// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod archive;
pub mod compact;
pub mod csv;
pub mod file;
pub mod gui;
pub mod ingest;
pub mod lookup;
pub mod model;
pub mod onet;
pub mod progress;
pub mod runner;
pub mod store;
