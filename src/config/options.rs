// src/config/options.rs
use std::env;
use std::time::Duration;

use super::consts::{API_KEY, ENV_API_KEY, ENV_SPREADSHEET_ID, FETCH_TIMEOUT_SECS, SPREADSHEET_ID};

/// Connection settings for the spreadsheet source.
/// Passed explicitly into the adapter so tests and frontends can construct
/// their own instead of reaching for module globals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: s!(SPREADSHEET_ID),
            api_key: s!(API_KEY),
            timeout_secs: FETCH_TIMEOUT_SECS,
        }
    }
}

impl SheetsConfig {
    /// Deployment override: env vars win over the built-in literals.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(id) = env::var(ENV_SPREADSHEET_ID) {
            if !id.is_empty() { cfg.spreadsheet_id = id; }
        }
        if let Ok(key) = env::var(ENV_API_KEY) {
            if !key.is_empty() { cfg.api_key = key; }
        }
        cfg
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
