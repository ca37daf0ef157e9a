// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

/// Progress sink that writes into the status line shown by the app.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut g) = self.status.lock() {
            *g = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        self.set_status(format!("Loaded FY {label}"));
    }
    fn item_skipped(&mut self, label: &str, reason: &str) {
        self.set_status(format!("FY {label} unavailable: {reason}"));
    }
    fn finish(&mut self) {
        if self.total > 1 {
            self.set_status(format!("Done ({}/{})", self.done, self.total));
        }
    }
}
