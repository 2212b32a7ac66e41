// src/sheets/schema.rs
//
// Declarative per-tab layout. Each tab of the workbook uses its own literal
// header strings and exposes its own subset of fields, so columns are
// resolved by header text at load time, never by position.

use crate::record::Field;

/// Workbook tabs, in processing (and output) order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sheet {
    Nationals,
    Firsts,
    Technicals,
    TechAward2022,
}

pub const SHEETS: [Sheet; 4] = [
    Sheet::Nationals,
    Sheet::Firsts,
    Sheet::Technicals,
    Sheet::TechAward2022,
];

impl Sheet {
    /// Tab name as it appears in the workbook.
    pub fn name(self) -> &'static str {
        match self {
            Sheet::Nationals => "Nationals",
            Sheet::Firsts => "Firsts",
            Sheet::Technicals => "Technicals",
            Sheet::TechAward2022 => "Tech Award from 2022",
        }
    }

    /// A1 range read for this tab: header row + up to ~495 data rows.
    pub fn range(self) -> &'static str {
        match self {
            Sheet::Nationals => "Nationals!A5:R500",
            Sheet::Firsts => "Firsts!A5:K500",
            Sheet::Technicals => "Technicals!A5:K500",
            Sheet::TechAward2022 => "Tech Award from 2022!A5:K500",
        }
    }

    /// Qualification label substituted when a row has none of its own.
    pub fn default_qualification(self) -> &'static str {
        match self {
            Sheet::Nationals => "RQF BTEC National",
            Sheet::Firsts => "NQF BTEC First",
            Sheet::Technicals => "BTEC Technical",
            Sheet::TechAward2022 => "BTEC Tech Award 2022",
        }
    }

    /// Literal header strings accepted for `field` on this tab.
    /// Empty slice = the tab has no such column (resolves to "not present").
    /// Nationals ships carriage-return variants of some headers, so a field
    /// may list more than one accepted spelling; first match wins.
    pub fn headers_for(self, field: Field) -> &'static [&'static str] {
        use Field::*;
        match self {
            Sheet::Nationals => match field {
                Qualification => &["Qualification"],
                Sector => &["Sector"],
                ComponentCode => &["Component\r\nCode", "Component Code"],
                ComponentName => &["Component Name"],
                ExamType => &["Exam/Task"],
                Duration => &["Duration"],
                Access => &["Access"],
                LevelOfControl => &["Level of control"],
                AdditionalInfo => &["Additional information"],
                Invigilator => &["Internal/External invigilator required"],
                QualificationSizes => &[
                    "Qualification Sizes\r\n(Double click to expand cell to see all qualifications)",
                ],
            },
            Sheet::Firsts | Sheet::Technicals => match field {
                Qualification => &["Qualification"],
                Sector => &["Sector"],
                ComponentCode => &["Component Code"],
                ComponentName => &["Component Name"],
                ExamType => &["Exam/Task"],
                Duration => &["Duration"],
                Access => &["Access"],
                LevelOfControl => &["Level of control"],
                AdditionalInfo => &["Additional information"],
                Invigilator => &["Internal/External invigilator required"],
                QualificationSizes => &[],
            },
            Sheet::TechAward2022 => match field {
                Qualification => &["Qualification"],
                Sector => &["Subject"],
                ComponentCode => &["Examination code"],
                ComponentName => &["Title"],
                ExamType => &["Task/Test"],
                Duration => &["Duration"],
                Access => &[],
                LevelOfControl => &["Level of control"],
                AdditionalInfo => &["Additional information"],
                Invigilator => &["Internal/External invigilator required"],
                QualificationSizes => &[],
            },
        }
    }
}
