// src/gui/components/filter_bar.rs
//
// Search box + the three filter dropdowns + results count.
// Any change rebuilds the filtered view immediately; there is no
// apply-button round trip and no network involved.

use eframe::egui;

use crate::filter::{EXAM_TYPES, QUALIFICATIONS};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut changed = false;

    ui.horizontal_wrapped(|ui| {
        // Search
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.filters.search)
                .hint_text("Search by component name or code…")
                .desired_width(240.0),
        );
        changed |= resp.changed();

        changed |= combo(
            ui,
            "qualification_filter",
            "Qualification",
            &mut app.state.gui.filters.qualification,
            QUALIFICATIONS.iter().map(|s| s.to_string()),
        );

        changed |= combo(
            ui,
            "exam_type_filter",
            "Type",
            &mut app.state.gui.filters.exam_type,
            EXAM_TYPES.iter().map(|s| s.to_string()),
        );

        // Sector values come from the loaded data
        let sectors = app.sectors.clone();
        changed |= combo(
            ui,
            "sector_filter",
            "Sector",
            &mut app.state.gui.filters.sector,
            sectors.into_iter(),
        );
    });

    ui.add_space(2.0);
    ui.label(format!(
        "Showing {} of {} assessments",
        app.view.len(),
        app.raw_data.len()
    ));

    if changed {
        logd!("UI: filters changed {:?}", app.state.gui.filters);
        app.rebuild_view();
    }
}

/// "All" + the given values; writes back None for "All".
fn combo(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    slot: &mut Option<String>,
    values: impl Iterator<Item = String>,
) -> bool {
    let mut changed = false;

    ui.label(label);
    let selected_text = slot.clone().unwrap_or_else(|| s!("All"));
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            if ui.selectable_label(slot.is_none(), "All").clicked() {
                *slot = None;
                changed = true;
            }
            for v in values {
                let selected = slot.as_deref() == Some(v.as_str());
                if ui.selectable_label(selected, &v).clicked() {
                    *slot = Some(v);
                    changed = true;
                }
            }
        });

    changed
}
