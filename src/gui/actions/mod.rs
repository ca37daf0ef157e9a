// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see the re-exports below.

mod calculate; // src/gui/actions/calculate.rs
mod load;      // src/gui/actions/load.rs

pub use calculate::{request_search, run_pending};
pub use load::{load_manifest, poll_load, switch_year};
