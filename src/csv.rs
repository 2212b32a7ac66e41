// src/csv.rs
use std::io::{self, Write};

use crate::core::sanitize::normalize_ws;
use crate::record::{AssessmentRecord, FIELDS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn ext(self) -> &'static str {
        match self { Delim::Csv => "csv", Delim::Tsv => "tsv" }
    }
    pub fn sep(self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }
}

/// Quote a field when it contains the separator, quotes or line breaks.
fn escape(field: &str, sep: char) -> String {
    if field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r') {
        join!("\"", &field.replace('"', "\"\""), "\"")
    } else {
        s!(field)
    }
}

pub fn write_row<W: Write>(w: &mut W, cells: &[String], delim: Delim) -> io::Result<()> {
    let sep = delim.sep();
    let line = cells
        .iter()
        .map(|c| escape(c, sep))
        .collect::<Vec<_>>()
        .join(&sep.to_string());
    writeln!(w, "{}", line)
}

/// Header + one row per record; multi-line cells squashed to one line.
pub fn write_records<W: Write>(
    w: &mut W,
    records: &[&AssessmentRecord],
    delim: Delim,
) -> io::Result<()> {
    let headers: Vec<String> = FIELDS.iter().map(|f| s!(f.label())).collect();
    write_row(w, &headers, delim)?;
    for rec in records {
        let cells: Vec<String> = FIELDS.iter().map(|&f| normalize_ws(rec.get(f))).collect();
        write_row(w, &cells, delim)?;
    }
    Ok(())
}
