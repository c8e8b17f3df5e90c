//! Attendance, exams, and grades.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::schema::{DefaultValue, FieldKind, FieldSpec, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

impl AttendanceStatus {
    pub const VALUES: &'static [&'static str] = &["present", "absent", "late", "excused"];
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AttendanceRecord {
    pub class_id: String,
    pub student_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl Schema for AttendanceRecord {
    const NAME: &'static str = "AttendanceRecord";
    const COLLECTION: &'static str = "attendancerecord";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("class_id", FieldKind::String),
        FieldSpec::required("student_id", FieldKind::String),
        FieldSpec::required("date", FieldKind::Date),
        FieldSpec::required(
            "status",
            FieldKind::Enum {
                values: AttendanceStatus::VALUES,
            },
        ),
        FieldSpec::optional("remarks", FieldKind::String),
    ];
}

fn default_max_marks() -> i64 {
    100
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Exam {
    /// e.g. `Midterm Math`
    pub name: String,
    pub subject_id: String,
    pub class_id: String,
    pub date: NaiveDate,
    #[serde(default = "default_max_marks")]
    pub max_marks: i64,
}

impl Schema for Exam {
    const NAME: &'static str = "Exam";
    const COLLECTION: &'static str = "exam";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::String).describe("e.g., Midterm Math"),
        FieldSpec::required("subject_id", FieldKind::String),
        FieldSpec::required("class_id", FieldKind::String),
        FieldSpec::required("date", FieldKind::Date),
        FieldSpec::defaulted("max_marks", FieldKind::Integer, DefaultValue::Int(100)),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Grade {
    pub student_id: String,
    pub exam_id: String,
    pub marks_obtained: f64,
    /// Letter grade, e.g. `A`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl Schema for Grade {
    const NAME: &'static str = "Grade";
    const COLLECTION: &'static str = "grade";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("student_id", FieldKind::String),
        FieldSpec::required("exam_id", FieldKind::String),
        FieldSpec::required("marks_obtained", FieldKind::Float),
        FieldSpec::optional("grade", FieldKind::String).describe("Letter grade e.g., A, B+"),
        FieldSpec::optional("remark", FieldKind::String),
    ];
}
