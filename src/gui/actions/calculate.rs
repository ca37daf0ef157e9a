// src/gui/actions/calculate.rs
use crate::{
    config::consts::DEFAULT_ACTIVE_LEVEL,
    gui::app::App,
    lookup,
};

/// Validate the salary and queue the bucketing pass for the next frame.
pub fn request_search(app: &mut App) {
    if !app.can_search() { return; }

    match lookup::parse_salary(&app.salary_text) {
        Ok(salary) => {
            app.pending_salary = Some(salary);
            app.pending_painted = false;
        }
        Err(e) => {
            logd!("Search: rejected salary {:?}", app.salary_text);
            app.error = Some(e.to_string());
        }
    }
}

/// Run a queued search once the "Searching..." state has been shown.
pub fn run_pending(app: &mut App) {
    if !app.pending_painted { return; }
    let Some(salary) = app.pending_salary.take() else { return };
    app.pending_painted = false;

    let (Some(ds), Some(occ)) = (&app.dataset, &app.selected) else { return };
    let result = lookup::bucket(ds, occ, salary);
    app.status(format!("FY {}: {}", ds.year, result.summary_line()));
    app.results = Some(result);

    app.state.gui.active_level = DEFAULT_ACTIVE_LEVEL;
    app.state.gui.location_filter.clear();
    app.error = None;
}
