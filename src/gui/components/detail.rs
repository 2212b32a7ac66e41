// src/gui/components/detail.rs
//
// Modal-style detail window for the selected record. Every field is
// shown; closing the window clears the selection.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;
use crate::record::FIELDS;

use super::card_grid::qualification_color;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(rec) = app.selected_record().cloned() else { return };

    let mut open = true;
    let title = if rec.component_name.is_empty() {
        s!("Assessment details")
    } else {
        rec.component_name.clone()
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(true)
        .default_width(520.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let color = qualification_color(&rec.qualification);
                ui.label(RichText::new(&rec.qualification).color(color).strong());
                ui.label("·");
                ui.label(&rec.exam_type);
            });
            ui.separator();

            TableBuilder::new(ui)
                .striped(true)
                .column(Column::exact(170.0))
                .column(Column::remainder())
                .body(|mut body| {
                    for field in FIELDS {
                        body.row(20.0, |mut row| {
                            row.col(|ui| {
                                ui.label(RichText::new(field.label()).strong());
                            });
                            row.col(|ui| {
                                ui.label(rec.get(field));
                            });
                        });
                    }
                });

            ui.add_space(8.0);
            ui.small("Always refer to the official qualification specification for definitive information.");
        });

    if !open {
        app.state.gui.selected = None;
    }
}
