// tests/fetch_fallback.rs
//
// All-or-nothing fetch policy: any failed range read (or an empty live
// result) resolves to the fallback set, never to a partial merge.

use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;

use btec_view::sheets::fallback;
use btec_view::sheets::fetch::{RangeSource, fetch_with_source};
use btec_view::sheets::schema::Sheet;

struct CannedSource {
    grids: HashMap<&'static str, Vec<Vec<String>>>,
    fail: Option<&'static str>,
    calls: RefCell<Vec<String>>,
}

impl CannedSource {
    fn new() -> Self {
        Self {
            grids: HashMap::new(),
            fail: None,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl RangeSource for CannedSource {
    fn read_range(&self, range: &str) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
        self.calls.borrow_mut().push(range.to_string());
        if self.fail.is_some_and(|f| f == range) {
            return Err("read failed".into());
        }
        Ok(self.grids.get(range).cloned().unwrap_or_default())
    }
}

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

#[test]
fn failed_range_read_returns_fallback_exactly() {
    let mut src = CannedSource::new();
    src.grids.insert(
        Sheet::Nationals.range(),
        grid(&[
            &["Qualification", "Sector"],
            &["RQF BTEC National", "Business"],
        ]),
    );
    src.fail = Some(Sheet::Firsts.range());

    let out = fetch_with_source(&src, None);
    assert_eq!(out, fallback::records());

    // Remaining sheets were never read: abort on first failure.
    let calls = src.calls.borrow();
    assert_eq!(
        calls.as_slice(),
        &[
            Sheet::Nationals.range().to_string(),
            Sheet::Firsts.range().to_string(),
        ]
    );
}

#[test]
fn clean_load_concatenates_in_sheet_order() {
    let mut src = CannedSource::new();
    src.grids.insert(
        Sheet::Nationals.range(),
        grid(&[&["Qualification", "Sector"], &["", "Engineering"]]),
    );
    src.grids.insert(
        Sheet::Firsts.range(),
        grid(&[&["Qualification", "Sector"], &["", "Sport"]]),
    );
    src.grids.insert(
        Sheet::Technicals.range(),
        grid(&[&["Qualification", "Sector"], &["", "Catering"]]),
    );
    src.grids.insert(
        Sheet::TechAward2022.range(),
        grid(&[&["Qualification", "Subject"], &["", "Enterprise"]]),
    );

    let out = fetch_with_source(&src, None);
    assert_eq!(out.len(), 4);
    assert_ne!(out, fallback::records());

    let sectors: Vec<&str> = out.iter().map(|r| r.sector.as_str()).collect();
    assert_eq!(sectors, vec!["Engineering", "Sport", "Catering", "Enterprise"]);

    // Per-sheet qualification defaults landed in order too.
    let quals: Vec<&str> = out.iter().map(|r| r.qualification.as_str()).collect();
    assert_eq!(
        quals,
        vec![
            "RQF BTEC National",
            "NQF BTEC First",
            "BTEC Technical",
            "BTEC Tech Award 2022",
        ]
    );
}

#[test]
fn empty_live_result_returns_fallback() {
    // Every range resolves to an empty grid.
    let src = CannedSource::new();
    let out = fetch_with_source(&src, None);
    assert_eq!(out, fallback::records());
}

#[test]
fn fallback_is_nonempty_and_well_formed() {
    let recs = fallback::records();
    assert!(!recs.is_empty());
    assert!(recs.iter().all(|r| !r.qualification.is_empty()));
    // at least one record per qualification family
    for q in btec_view::filter::QUALIFICATIONS {
        assert!(recs.iter().any(|r| r.qualification == q), "missing {}", q);
    }
}

#[test]
fn value_range_tolerates_missing_values_key() {
    // values.get omits `values` entirely for an empty range
    let vr: btec_view::core::net::ValueRange =
        serde_json::from_str(r#"{"range":"Firsts!A5:K500","majorDimension":"ROWS"}"#).unwrap();
    assert!(vr.values.is_empty());

    let vr: btec_view::core::net::ValueRange = serde_json::from_str(
        r#"{"range":"Firsts!A5:K500","majorDimension":"ROWS","values":[["Qualification"],["NQF BTEC First"]]}"#,
    )
    .unwrap();
    assert_eq!(vr.values.len(), 2);
}
