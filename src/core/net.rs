// src/core/net.rs

// Google Sheets v4 values.get over HTTPS.
// One client per load cycle; every request shares the fetch timeout so a
// dead network resolves to fallback data instead of hanging the UI.

use std::error::Error;

use reqwest::Url;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::consts::SHEETS_ENDPOINT;
use crate::config::options::SheetsConfig;

/// Deserialized subset of the values.get response. Cells arrive as
/// formatted strings; `values` is absent entirely for an empty range.
#[derive(Debug, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

pub struct SheetsClient {
    http: Client,
    config: SheetsConfig,
}

impl SheetsClient {
    pub fn connect(config: &SheetsConfig) -> Result<Self, Box<dyn Error>> {
        let http = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.timeout())
            .build()?;
        Ok(Self { http, config: config.clone() })
    }

    /// GET /v4/spreadsheets/{id}/values/{range}?key=…
    /// `range` is A1 notation incl. the tab name ("Nationals!A5:R500");
    /// Url path segments take care of the percent-encoding.
    pub fn get_values(&self, range: &str) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
        let mut url = Url::parse(SHEETS_ENDPOINT)?;
        url.path_segments_mut()
            .map_err(|_| "Sheets endpoint is not a base URL")?
            .push(&self.config.spreadsheet_id)
            .push("values")
            .push(range);
        url.query_pairs_mut().append_pair("key", &self.config.api_key);

        logd!("Net: GET values {}", range);

        let resp = self.http.get(url).send()?.error_for_status()?;
        let vr: ValueRange = resp.json()?;
        Ok(vr.values)
    }
}
