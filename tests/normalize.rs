// tests/normalize.rs
//
// Header-driven normalization: column resolution, per-field defaults,
// row skipping, per-sheet qualification defaulting.

use btec_view::record::Field;
use btec_view::sheets::normalize::{normalize_sheet, resolve_columns};
use btec_view::sheets::schema::Sheet;

fn row(v: &[&str]) -> Vec<String> {
    v.iter().map(|x| x.to_string()).collect()
}

#[test]
fn resolves_columns_by_header_text() {
    let header = row(&["Qualification", "Sector", "Component Code", "Component Name", "Exam/Task"]);
    let cols = resolve_columns(Sheet::Firsts, &header);
    assert_eq!(cols.get(Field::Qualification), Some(0));
    assert_eq!(cols.get(Field::Sector), Some(1));
    assert_eq!(cols.get(Field::ComponentCode), Some(2));
    assert_eq!(cols.get(Field::ExamType), Some(4));
    // Firsts has no such column at all
    assert_eq!(cols.get(Field::QualificationSizes), None);
    // Header simply missing from this range
    assert_eq!(cols.get(Field::Duration), None);
}

#[test]
fn nationals_accepts_crlf_header_variant() {
    let header = row(&["Qualification", "Sector", "Component\r\nCode", "Component Name"]);
    let cols = resolve_columns(Sheet::Nationals, &header);
    assert_eq!(cols.get(Field::ComponentCode), Some(2));

    let plain = row(&["Qualification", "Sector", "Component Code", "Component Name"]);
    let cols = resolve_columns(Sheet::Nationals, &plain);
    assert_eq!(cols.get(Field::ComponentCode), Some(2));
}

#[test]
fn tech_award_uses_its_own_header_names() {
    let header = row(&["Qualification", "Subject", "Examination code", "Title", "Task/Test"]);
    let cols = resolve_columns(Sheet::TechAward2022, &header);
    assert_eq!(cols.get(Field::Sector), Some(1));
    assert_eq!(cols.get(Field::ComponentCode), Some(2));
    assert_eq!(cols.get(Field::ComponentName), Some(3));
    assert_eq!(cols.get(Field::ExamType), Some(4));
    // the Firsts/Nationals spellings must not match here
    let wrong = row(&["Sector", "Component Code", "Component Name", "Exam/Task"]);
    let cols = resolve_columns(Sheet::TechAward2022, &wrong);
    assert_eq!(cols.get(Field::Sector), None);
    assert_eq!(cols.get(Field::ComponentCode), None);
}

#[test]
fn documented_nationals_row() {
    let values = vec![
        row(&["Qualification", "Sector", "Component\r\nCode", "Component Name", "Exam/Task", "Duration"]),
        row(&["RQF BTEC National", "Business", "31619H", "Unit 2: Marketing", "Task", "3 hours"]),
    ];
    let recs = normalize_sheet(Sheet::Nationals, &values);
    assert_eq!(recs.len(), 1);
    let r = &recs[0];
    assert_eq!(r.qualification, "RQF BTEC National");
    assert_eq!(r.sector, "Business");
    assert_eq!(r.component_code, "31619H");
    assert_eq!(r.component_name, "Unit 2: Marketing");
    assert_eq!(r.exam_type, "Task");
    assert_eq!(r.duration, "3 hours");
}

#[test]
fn defaults_when_cells_missing() {
    // Narrow range: most headers never present on this grid.
    let values = vec![
        row(&["Qualification", "Component Name"]),
        row(&["", "Unit 1: The Online World"]),
    ];
    let recs = normalize_sheet(Sheet::Firsts, &values);
    assert_eq!(recs.len(), 1);
    let r = &recs[0];
    assert_eq!(r.qualification, "NQF BTEC First"); // sheet default
    assert_eq!(r.exam_type, "Task");
    assert_eq!(r.access, "Secure Dispatch");
    assert_eq!(r.component_code, ""); // unresolved header, empty, not an error
    assert_eq!(r.sector, "");
    assert_eq!(r.duration, "");
}

#[test]
fn tech_award_always_gets_default_access() {
    // The Tech Award tab has no Access column at all.
    let values = vec![
        row(&["Qualification", "Subject", "Examination code", "Title", "Task/Test", "Duration"]),
        row(&["", "Enterprise", "BEN03", "Component 3: Marketing and Finance", "Test", "2 hours"]),
    ];
    let recs = normalize_sheet(Sheet::TechAward2022, &values);
    assert_eq!(recs.len(), 1);
    let r = &recs[0];
    assert_eq!(r.qualification, "BTEC Tech Award 2022");
    assert_eq!(r.sector, "Enterprise");
    assert_eq!(r.component_code, "BEN03");
    assert_eq!(r.exam_type, "Test");
    assert_eq!(r.access, "Secure Dispatch");
}

#[test]
fn skips_rows_without_content_in_resolved_columns() {
    let values = vec![
        row(&["Qualification", "Sector", "Component Code"]),
        row(&["", "", ""]),              // all resolved cells empty
        row(&[]),                        // no cells at all
        row(&["", "", "", "stray"]),     // content only outside resolved columns
        row(&["", "Business", ""]),      // kept: one resolved cell non-empty
    ];
    let recs = normalize_sheet(Sheet::Technicals, &values);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].sector, "Business");
    assert_eq!(recs[0].qualification, "BTEC Technical");
}

#[test]
fn ragged_rows_are_fine() {
    // Data row shorter than the header row; missing trailing cells default.
    let values = vec![
        row(&["Qualification", "Sector", "Component Code", "Component Name", "Exam/Task"]),
        row(&["NQF BTEC First", "Sport"]),
    ];
    let recs = normalize_sheet(Sheet::Firsts, &values);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].component_code, "");
    assert_eq!(recs[0].exam_type, "Task");
}

#[test]
fn empty_grid_produces_no_records() {
    assert!(normalize_sheet(Sheet::Nationals, &[]).is_empty());
    let only_header = vec![row(&["Qualification"])];
    assert!(normalize_sheet(Sheet::Nationals, &only_header).is_empty());
}

#[test]
fn row_order_is_preserved() {
    let values = vec![
        row(&["Qualification", "Component Code"]),
        row(&["", "A1"]),
        row(&["", "B2"]),
        row(&["", "C3"]),
    ];
    let recs = normalize_sheet(Sheet::Technicals, &values);
    let codes: Vec<&str> = recs.iter().map(|r| r.component_code.as_str()).collect();
    assert_eq!(codes, vec!["A1", "B2", "C3"]);
}
