// src/sheets/fetch.rs
//
// The adapter's single operation. Live data is all-or-nothing: if any of
// the four range reads fails, the whole load cycle resolves to the
// built-in fallback set. Partial results are never merged with fallback.

use std::error::Error;

use crate::config::options::SheetsConfig;
use crate::core::net::SheetsClient;
use crate::progress::Progress;
use crate::record::AssessmentRecord;

use super::fallback;
use super::normalize::normalize_sheet;
use super::schema::SHEETS;

/// One range read. The seam lets tests feed canned grids through the same
/// pipeline the live client uses.
pub trait RangeSource {
    fn read_range(&self, range: &str) -> Result<Vec<Vec<String>>, Box<dyn Error>>;
}

impl RangeSource for SheetsClient {
    fn read_range(&self, range: &str) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
        self.get_values(range)
    }
}

/// Fetch and normalize all sheets. Never fails outward: any internal
/// error resolves to the fallback set.
pub fn fetch_assessment_data(
    config: &SheetsConfig,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Vec<AssessmentRecord> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(SHEETS.len());
    }

    let out = match SheetsClient::connect(config) {
        Ok(client) => fetch_with_source(&client, progress.as_deref_mut()),
        Err(e) => {
            loge!("Fetch: client init failed: {}", e);
            fallback::records()
        }
    };

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    out
}

/// Same policy as `fetch_assessment_data`, generic over the source.
pub fn fetch_with_source(
    source: &dyn RangeSource,
    progress: Option<&mut (dyn Progress + '_)>,
) -> Vec<AssessmentRecord> {
    match collect_live(source, progress) {
        Ok(recs) if !recs.is_empty() => recs,
        Ok(_) => {
            logf!("Fetch: live result empty, using fallback set");
            fallback::records()
        }
        Err(e) => {
            loge!("Fetch: {}", e);
            fallback::records()
        }
    }
}

/// Read + normalize every sheet in order. The first failed read aborts
/// the remaining sheets (all-or-nothing per load cycle).
fn collect_live(
    source: &dyn RangeSource,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Vec<AssessmentRecord>, Box<dyn Error>> {
    let mut all = Vec::new();
    for sheet in SHEETS {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching {}…", sheet.name()));
        }
        let values = source
            .read_range(sheet.range())
            .map_err(|e| format!("{}: {}", sheet.name(), e))?;
        all.extend(normalize_sheet(sheet, &values));
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(sheet.name());
        }
    }
    logf!("Fetch: {} live records", all.len());
    Ok(all)
}
