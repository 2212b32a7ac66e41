// src/record.rs
//
// The single normalized shape every sheet row is mapped into.
// Fields are permissive free text; only `qualification` is guaranteed
// non-empty (rows that can't determine one get dropped upstream).

/// One external assessment, as shown in cards and the detail view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssessmentRecord {
    pub qualification: String,
    pub sector: String,
    pub component_code: String,
    pub component_name: String,
    pub exam_type: String,
    pub duration: String,
    pub access: String,
    pub level_of_control: String,
    pub additional_info: String,
    pub invigilator: String,
    pub qualification_sizes: String,
}

/// Logical columns, used for header resolution and field-by-field display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Qualification,
    Sector,
    ComponentCode,
    ComponentName,
    ExamType,
    Duration,
    Access,
    LevelOfControl,
    AdditionalInfo,
    Invigilator,
    QualificationSizes,
}

/// All fields in declaration (and display) order.
/// Keep in sync with the enum; `Field as usize` indexes by this order.
pub const FIELDS: [Field; 11] = [
    Field::Qualification,
    Field::Sector,
    Field::ComponentCode,
    Field::ComponentName,
    Field::ExamType,
    Field::Duration,
    Field::Access,
    Field::LevelOfControl,
    Field::AdditionalInfo,
    Field::Invigilator,
    Field::QualificationSizes,
];

impl Field {
    /// Human label for the detail view and delimited output.
    pub fn label(self) -> &'static str {
        match self {
            Field::Qualification => "Qualification",
            Field::Sector => "Sector",
            Field::ComponentCode => "Component Code",
            Field::ComponentName => "Component Name",
            Field::ExamType => "Exam/Task",
            Field::Duration => "Duration",
            Field::Access => "Access Arrangements",
            Field::LevelOfControl => "Level of Control",
            Field::AdditionalInfo => "Additional Information",
            Field::Invigilator => "Invigilator Required",
            Field::QualificationSizes => "Qualification Sizes",
        }
    }

    /// Default substituted when a cell is absent or empty.
    pub fn default_value(self) -> &'static str {
        match self {
            Field::ExamType => "Task",
            Field::Access => "Secure Dispatch",
            _ => "",
        }
    }
}

impl AssessmentRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Qualification => &self.qualification,
            Field::Sector => &self.sector,
            Field::ComponentCode => &self.component_code,
            Field::ComponentName => &self.component_name,
            Field::ExamType => &self.exam_type,
            Field::Duration => &self.duration,
            Field::Access => &self.access,
            Field::LevelOfControl => &self.level_of_control,
            Field::AdditionalInfo => &self.additional_info,
            Field::Invigilator => &self.invigilator,
            Field::QualificationSizes => &self.qualification_sizes,
        }
    }
}
