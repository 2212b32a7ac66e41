// src/sheets/mod.rs
//! # Sheet adapter module
//!
//! This module hosts everything that knows **what the workbook looks like**
//! and how to turn it into `AssessmentRecord`s.
//!
//! ## What lives here
//! - **Per-tab layout specs** (`schema`): tab names, A1 ranges, default
//!   qualification labels, and the literal header strings each tab uses.
//! - **Header-driven normalization** (`normalize`): resolve logical fields
//!   to column positions by header text at load time — never by hardcoded
//!   position — then shape rows into records with per-field defaults.
//! - **Fetch orchestration** (`fetch`): read the four ranges in order and
//!   decide, once, whether the load cycle produced usable live data.
//! - **The fallback dataset** (`fallback`): built-in sample records served
//!   whenever live retrieval is incomplete.
//!
//! ## What does **not** live here
//! - **HTTP details** – `core::net` owns the client and the wire format.
//! - **Filtering and GUI concerns** – frontends read the record sequence
//!   and derive their own views (`data`, `filter`).
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → fetch::fetch_assessment_data
//!           → net::SheetsClient (one read per tab range)
//!           → normalize::normalize_sheet (per tab)
//!           ↘ fallback::records() on any failure or empty result
//! ```
//!
//! ## Conventions & invariants
//! - Tabs are processed in `schema::SHEETS` order; per-tab row order is
//!   preserved in the output.
//! - Live data is **all-or-nothing**: one failed range read aborts the
//!   remaining reads and the whole cycle resolves to the fallback set.
//!   Partial live results are never merged with fallback records.
//! - Every emitted record has a non-empty qualification.
//! - The caller never sees an error; "always usable data, possibly not
//!   live data" is the contract.
pub mod fallback;
pub mod fetch;
pub mod normalize;
pub mod schema;

pub use fetch::{RangeSource, fetch_assessment_data};
