// src/sheets/normalize.rs
//
// Header-driven column resolution + row shaping. This is the whole point
// of the adapter: four tabs, four header layouts, one record shape out.

use crate::record::{AssessmentRecord, FIELDS, Field};

use super::schema::Sheet;

/// Resolved column position per logical field; None = not on this tab.
#[derive(Debug)]
pub struct ColumnMap {
    cols: [Option<usize>; FIELDS.len()],
}

impl ColumnMap {
    pub fn get(&self, field: Field) -> Option<usize> {
        self.cols[field as usize]
    }
}

/// Match each field's accepted header literals against the header row.
/// An absent header resolves to None, never an error.
pub fn resolve_columns(sheet: Sheet, header_row: &[String]) -> ColumnMap {
    let mut cols = [None; FIELDS.len()];
    for field in FIELDS {
        cols[field as usize] = sheet
            .headers_for(field)
            .iter()
            .find_map(|h| header_row.iter().position(|cell| cell == h));
    }
    ColumnMap { cols }
}

/// Shape one data row. None = the row is skipped.
fn build_record(sheet: Sheet, row: &[String], cols: &ColumnMap) -> Option<AssessmentRecord> {
    // Keep only rows with content in at least one resolved column.
    let has_content = FIELDS.iter().any(|&f| {
        cols.get(f)
            .and_then(|ix| row.get(ix))
            .is_some_and(|cell| !cell.is_empty())
    });
    if !has_content {
        return None;
    }

    let cell = |f: Field| -> String {
        match cols.get(f).and_then(|ix| row.get(ix)) {
            Some(v) if !v.is_empty() => v.clone(),
            _ => s!(f.default_value()),
        }
    };

    let mut rec = AssessmentRecord {
        qualification: cell(Field::Qualification),
        sector: cell(Field::Sector),
        component_code: cell(Field::ComponentCode),
        component_name: cell(Field::ComponentName),
        exam_type: cell(Field::ExamType),
        duration: cell(Field::Duration),
        access: cell(Field::Access),
        level_of_control: cell(Field::LevelOfControl),
        additional_info: cell(Field::AdditionalInfo),
        invigilator: cell(Field::Invigilator),
        qualification_sizes: cell(Field::QualificationSizes),
    };

    if rec.qualification.is_empty() {
        rec.qualification = s!(sheet.default_qualification());
    }
    // Qualification is the one required field; no label at all drops the row.
    if rec.qualification.is_empty() {
        return None;
    }

    Some(rec)
}

/// First row of `values` is the header row; the rest are data rows.
/// Per-tab row order is preserved.
pub fn normalize_sheet(sheet: Sheet, values: &[Vec<String>]) -> Vec<AssessmentRecord> {
    let Some(header_row) = values.first() else {
        return Vec::new();
    };
    let cols = resolve_columns(sheet, header_row);

    let mut out = Vec::new();
    for row in &values[1..] {
        if let Some(rec) = build_record(sheet, row, &cols) {
            out.push(rec);
        }
    }
    logd!("Normalize: {} → {} records", sheet.name(), out.len());
    out
}
