// src/gui/components/card_grid.rs
//
// Scrollable grid of summary cards, one per filtered record.
// Clicking a card opens the detail window.

use eframe::egui::{self, Color32, CursorIcon, RichText, Sense};

use crate::config::consts::CARD_MIN_WIDTH;
use crate::core::sanitize::normalize_ws;
use crate::gui::app::App;
use crate::record::AssessmentRecord;

/// Badge color per qualification family.
pub fn qualification_color(qualification: &str) -> Color32 {
    match qualification {
        "RQF BTEC National" => Color32::from_rgb(59, 130, 246),     // blue
        "NQF BTEC First" => Color32::from_rgb(34, 197, 94),         // green
        "BTEC Technical" => Color32::from_rgb(168, 85, 247),        // purple
        "BTEC Tech Award 2022" => Color32::from_rgb(249, 115, 22),  // orange
        _ => Color32::from_rgb(107, 114, 128),                      // gray
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.view.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No assessments found").strong());
            ui.label("Try adjusting your filters or search terms");
        });
        return;
    }

    let cols = (ui.available_width() / CARD_MIN_WIDTH).floor().max(1.0) as usize;

    let mut clicked: Option<usize> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for chunk in app.view.row_ix.chunks(cols) {
                ui.columns(cols, |columns| {
                    for (col, &raw_ix) in columns.iter_mut().zip(chunk) {
                        let rec = &app.raw_data.records()[raw_ix];
                        let hit = col.push_id(raw_ix, |ui| card(ui, rec)).inner;
                        if hit {
                            clicked = Some(raw_ix);
                        }
                    }
                });
                ui.add_space(6.0);
            }
        });

    if let Some(ix) = clicked {
        logd!("UI: open detail ix={}", ix);
        app.state.gui.selected = Some(ix);
    }
}

/// One summary card; true when clicked.
fn card(ui: &mut egui::Ui, rec: &AssessmentRecord) -> bool {
    let resp = egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                let color = qualification_color(&rec.qualification);
                ui.label(RichText::new(&rec.qualification).color(color).small().strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(&rec.exam_type).small());
                });
            });

            let name = if rec.component_name.is_empty() {
                s!("(untitled)")
            } else {
                normalize_ws(&rec.component_name)
            };
            ui.label(RichText::new(name).strong());
            ui.label(format!("Code: {}", rec.component_code));
            if !rec.sector.is_empty() {
                ui.label(RichText::new(&rec.sector).small());
            }
            if !rec.duration.is_empty() {
                ui.label(RichText::new(format!("Duration: {}", rec.duration)).small());
            }
        });

    resp.response
        .interact(Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand)
        .clicked()
}
