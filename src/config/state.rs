// src/config/state.rs
use super::options::SheetsConfig;
use crate::filter::FilterState;

#[derive(Clone, Debug, Default)]
pub struct GuiState {
    /// Active filter + search inputs.
    pub filters: FilterState,

    /// Index into the *raw* record set of the record open in the detail
    /// window; None = closed.
    pub selected: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub sheets: SheetsConfig,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            sheets: SheetsConfig::from_env(),
            gui: GuiState::default(),
        }
    }
}
