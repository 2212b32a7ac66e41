// src/filter.rs
//
// Client-side filtering. All predicates AND together; a None selector
// means "all". Search is a case-insensitive substring match over
// component name, component code and sector.

use crate::record::AssessmentRecord;

/// Known qualification labels, in display order.
pub const QUALIFICATIONS: [&str; 4] = [
    "RQF BTEC National",
    "NQF BTEC First",
    "BTEC Technical",
    "BTEC Tech Award 2022",
];

pub const EXAM_TYPES: [&str; 2] = ["Exam", "Task"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Exact qualification label, or None for all.
    pub qualification: Option<String>,
    /// Exact exam type ("Exam"/"Task"), or None for all.
    pub exam_type: Option<String>,
    /// Exact sector label, or None for all.
    pub sector: Option<String>,
    /// Free-text search; empty = no search filter.
    pub search: String,
}

impl FilterState {
    pub fn matches(&self, rec: &AssessmentRecord) -> bool {
        if let Some(q) = &self.qualification {
            if rec.qualification != *q { return false; }
        }
        if let Some(t) = &self.exam_type {
            if rec.exam_type != *t { return false; }
        }
        if let Some(s) = &self.sector {
            if rec.sector != *s { return false; }
        }
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = rec.component_name.to_lowercase().contains(&needle)
                || rec.component_code.to_lowercase().contains(&needle)
                || rec.sector.to_lowercase().contains(&needle);
            if !hit { return false; }
        }
        true
    }
}

/// Unique non-empty sector labels in first-seen order (dropdown source).
pub fn sector_values(records: &[AssessmentRecord]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for r in records {
        if !r.sector.is_empty() && !out.iter().any(|s| s == &r.sector) {
            out.push(r.sector.clone());
        }
    }
    out
}
