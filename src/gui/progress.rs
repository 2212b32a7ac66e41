// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

/// Pushes status lines into the shared status string the UI thread draws.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status }
    }

    fn set(&self, msg: String) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg;
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.set(format!("Loading assessment data (0/{total})…"));
    }
    fn log(&mut self, msg: &str) {
        self.set(s!(msg));
    }
    fn item_done(&mut self, sheet: &str) {
        self.set(format!("Loaded {}", sheet));
    }
    fn finish(&mut self) {
        self.set(s!("Ready"));
    }
}
