// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, mpsc},
    thread,
    time::Duration,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    data::{FilterView, RawData},
    filter,
    record::AssessmentRecord,
    sheets,
};

use super::{components, progress::GuiProgress};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "BTEC External Assessment Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // canonical record set + current filtered view
    pub raw_data: RawData,
    pub view: FilterView,

    // sector dropdown values, derived once per load
    pub sectors: Vec<String>,

    // status/progress (load worker writes here)
    pub status: Arc<Mutex<String>>,
    pub loading: bool,
    load_rx: Option<mpsc::Receiver<Vec<AssessmentRecord>>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let status = Arc::new(Mutex::new(s!("Loading assessment data…")));

        // One load per session: fetch on a worker so the UI can draw the
        // loading state, deliver over a channel. The adapter never fails,
        // so the worker always sends exactly one record set.
        let (tx, rx) = mpsc::channel();
        let config = state.sheets.clone();
        let worker_status = status.clone();
        thread::spawn(move || {
            let mut prog = GuiProgress::new(worker_status);
            let records = sheets::fetch_assessment_data(&config, Some(&mut prog));
            let _ = tx.send(records);
        });

        logf!("Init: load started");

        Self {
            state,
            raw_data: RawData::default(),
            view: FilterView::default(),
            sectors: Vec::new(),
            status,
            loading: true,
            load_rx: Some(rx),
        }
    }

    /* ---------- tiny helpers ---------- */

    pub fn status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    /// Recompute the filtered view from the raw set + current filters.
    pub fn rebuild_view(&mut self) {
        self.view = FilterView::from_raw(&self.raw_data, &self.state.gui.filters);
    }

    pub fn selected_record(&self) -> Option<&AssessmentRecord> {
        self.state.gui.selected.and_then(|ix| self.raw_data.records().get(ix))
    }

    fn poll_load(&mut self) {
        let Some(rx) = &self.load_rx else { return };
        match rx.try_recv() {
            Ok(records) => {
                logf!("Load: {} records", records.len());
                self.raw_data.replace_from_load(records);
                self.sectors = filter::sector_values(self.raw_data.records());
                self.rebuild_view();
                self.loading = false;
                self.load_rx = None;
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                // Worker died without sending. The adapter contract makes
                // this unreachable; don't spin on a dead channel.
                loge!("Load: worker channel disconnected");
                self.loading = false;
                self.load_rx = None;
                self.status("Load failed");
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        if self.loading {
            // keep polling while the worker runs
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("BTEC External Assessment Viewer");
            ui.label("Find information about external assessments for BTEC qualifications");
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let msg = self.status.lock().map(|s| s.clone()).unwrap_or_default();
            ui.label(msg);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.4);
                    ui.spinner();
                    ui.label("Loading assessment data…");
                });
                return;
            }

            components::filter_bar::draw(ui, self);
            ui.separator();
            components::card_grid::draw(ui, self);
        });

        components::detail::draw(ctx, self);
    }
}
