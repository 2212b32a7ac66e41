// src/data.rs
//
// Light wrappers around canonical and view-layer record data.
//
// - RawData: read-only holder for the loaded record set. Only the load
//            cycle is allowed to replace it, via an explicit method.
// - FilterView: derived (view) data produced from RawData by applying
//               the active filters for on-screen display.

use crate::filter::FilterState;
use crate::record::AssessmentRecord;

/// Authoritative record set for the session.
/// Produced once per load cycle; replaced wholesale, never edited.
#[derive(Clone, Debug, Default)]
pub struct RawData {
    records: Vec<AssessmentRecord>,
}

impl RawData {
    pub fn new(records: Vec<AssessmentRecord>) -> Self {
        Self { records }
    }

    /// Read-only view of the record set.
    pub fn records(&self) -> &[AssessmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Swap in a freshly loaded record set. This is the *only* mutator;
    /// keeps the rest of the app read-only.
    pub fn replace_from_load(&mut self, new: Vec<AssessmentRecord>) {
        self.records = new;
    }
}

/// Zero-copy filtered view for display.
/// Holds the list of row indexes into RawData that pass the filters.
#[derive(Clone, Debug, Default)]
pub struct FilterView {
    /// Positions of kept records in the raw record set.
    pub row_ix: Vec<usize>,
}

impl FilterView {
    /// Apply all active predicates in conjunction. Recomputed whenever a
    /// filter input or the source set changes; since every predicate is
    /// independent, application order doesn't matter.
    pub fn from_raw(raw: &RawData, filters: &FilterState) -> Self {
        let row_ix = raw
            .records()
            .iter()
            .enumerate()
            .filter(|(_, r)| filters.matches(r))
            .map(|(ix, _)| ix)
            .collect();
        Self { row_ix }
    }

    /// Number of rows in the projection.
    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a single record by projected index (no cloning).
    pub fn record<'a>(&self, raw: &'a RawData, i: usize) -> Option<&'a AssessmentRecord> {
        self.row_ix.get(i).and_then(|&ix| raw.records().get(ix))
    }
}
