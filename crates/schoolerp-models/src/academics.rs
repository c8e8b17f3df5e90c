//! Subjects, classes, courses, enrollments, and the timetable.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::schema::{DefaultValue, Entity, FieldKind, FieldSpec, Schema, patch_of};
use crate::validation::validate_time_of_day;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Subject {
    pub name: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Schema for Subject {
    const NAME: &'static str = "Subject";
    const COLLECTION: &'static str = "subject";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::required("code", FieldKind::String),
        FieldSpec::optional("description", FieldKind::String),
    ];
}

/// A class (form/grade group) for a school year.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ClassRoom {
    /// e.g. `Grade 5A`
    pub name: String,
    /// Academic year, e.g. 2025
    pub year: i32,
    /// Teacher `_id`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_teacher_id: Option<String>,
    #[serde(default)]
    pub subject_ids: Vec<String>,
}

impl Schema for ClassRoom {
    const NAME: &'static str = "ClassRoom";
    const COLLECTION: &'static str = "classroom";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::String).describe("e.g., Grade 5A"),
        FieldSpec::required("year", FieldKind::Integer).describe("Academic year e.g., 2025"),
        FieldSpec::optional("class_teacher_id", FieldKind::String)
            .describe("Teacher _id as string"),
        FieldSpec::defaulted("subject_ids", FieldKind::StringList, DefaultValue::EmptyList)
            .describe("Subject _ids as strings"),
    ];
}

impl Entity for ClassRoom {
    const RESOURCE: &'static str = "classes";
    const SEARCH_FIELDS: &'static [&'static str] = &["name"];
    type Patch = ClassRoomPatch;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ClassRoomPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_teacher_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_ids: Option<Vec<String>>,
}

patch_of!(ClassRoomPatch => ClassRoom);

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Course {
    pub name: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub subject_ids: Vec<String>,
}

impl Schema for Course {
    const NAME: &'static str = "Course";
    const COLLECTION: &'static str = "course";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::required("code", FieldKind::String),
        FieldSpec::optional("description", FieldKind::String),
        FieldSpec::defaulted("subject_ids", FieldKind::StringList, DefaultValue::EmptyList),
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    #[default]
    Enrolled,
    Completed,
    Dropped,
}

impl EnrollmentStatus {
    pub const VALUES: &'static [&'static str] = &["enrolled", "completed", "dropped"];
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Enrollment {
    pub student_id: String,
    pub class_id: String,
    pub year: i32,
    #[serde(default)]
    pub status: EnrollmentStatus,
}

impl Schema for Enrollment {
    const NAME: &'static str = "Enrollment";
    const COLLECTION: &'static str = "enrollment";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("student_id", FieldKind::String),
        FieldSpec::required("class_id", FieldKind::String),
        FieldSpec::required("year", FieldKind::Integer),
        FieldSpec::defaulted(
            "status",
            FieldKind::Enum {
                values: EnrollmentStatus::VALUES,
            },
            DefaultValue::Str("enrolled"),
        ),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DayOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayOfWeek {
    pub const VALUES: &'static [&'static str] = &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
}

/// One weekly slot: a subject taught to a class by a teacher.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TimetableEntry {
    pub class_id: String,
    pub subject_id: String,
    pub teacher_id: String,
    pub day_of_week: DayOfWeek,
    /// `HH:MM` (24h)
    #[validate(custom(function = "validate_time_of_day"))]
    pub start_time: String,
    /// `HH:MM` (24h)
    #[validate(custom(function = "validate_time_of_day"))]
    pub end_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl Schema for TimetableEntry {
    const NAME: &'static str = "TimetableEntry";
    const COLLECTION: &'static str = "timetableentry";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("class_id", FieldKind::String),
        FieldSpec::required("subject_id", FieldKind::String),
        FieldSpec::required("teacher_id", FieldKind::String),
        FieldSpec::required(
            "day_of_week",
            FieldKind::Enum {
                values: DayOfWeek::VALUES,
            },
        ),
        FieldSpec::required("start_time", FieldKind::Time).describe("HH:MM 24h format"),
        FieldSpec::required("end_time", FieldKind::Time).describe("HH:MM 24h format"),
        FieldSpec::optional("room", FieldKind::String),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::to_document;
    use serde_json::json;

    #[test]
    fn test_classroom_defaults() {
        let class: ClassRoom = serde_json::from_value(json!({"name": "Grade 5A", "year": 2025})).unwrap();
        assert!(class.subject_ids.is_empty());
        assert!(class.class_teacher_id.is_none());
        assert!(class.validate().is_ok());

        let document = to_document(&class).unwrap();
        assert_eq!(
            serde_json::Value::Object(document),
            json!({"name": "Grade 5A", "year": 2025, "subject_ids": []})
        );
    }

    #[test]
    fn test_classroom_only_type_checked() {
        let class: ClassRoom =
            serde_json::from_value(json!({"name": "", "year": 1850})).unwrap();
        assert!(class.validate().is_ok());
    }

    #[test]
    fn test_classroom_year_must_be_integer() {
        let result = serde_json::from_value::<ClassRoom>(json!({"name": "Grade 5A", "year": "2025"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_classroom_patch_only_year() {
        let patch: ClassRoomPatch = serde_json::from_value(json!({"year": 2026})).unwrap();
        assert!(patch.validate().is_ok());
        assert_eq!(
            serde_json::Value::Object(to_document(&patch).unwrap()),
            json!({"year": 2026})
        );
    }

    #[test]
    fn test_timetable_times() {
        let mut entry: TimetableEntry = serde_json::from_value(json!({
            "class_id": "c1",
            "subject_id": "s1",
            "teacher_id": "t1",
            "day_of_week": "Mon",
            "start_time": "08:00",
            "end_time": "08:45"
        }))
        .unwrap();
        assert!(entry.validate().is_ok());

        entry.end_time = "8:45am".to_string();
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_day_of_week_values_match_serialization() {
        let days = [
            DayOfWeek::Mon,
            DayOfWeek::Tue,
            DayOfWeek::Wed,
            DayOfWeek::Thu,
            DayOfWeek::Fri,
            DayOfWeek::Sat,
            DayOfWeek::Sun,
        ];
        for (day, expected) in days.iter().zip(DayOfWeek::VALUES) {
            assert_eq!(serde_json::to_value(day).unwrap(), json!(expected));
        }
        assert!(serde_json::from_value::<DayOfWeek>(json!("monday")).is_err());
    }

    #[test]
    fn test_enrollment_default_status() {
        let enrollment: Enrollment = serde_json::from_value(json!({
            "student_id": "s1",
            "class_id": "c1",
            "year": 2025
        }))
        .unwrap();
        assert_eq!(enrollment.status, EnrollmentStatus::Enrolled);
        for (status, expected) in [
            EnrollmentStatus::Enrolled,
            EnrollmentStatus::Completed,
            EnrollmentStatus::Dropped,
        ]
        .iter()
        .zip(EnrollmentStatus::VALUES)
        {
            assert_eq!(serde_json::to_value(status).unwrap(), json!(expected));
        }
    }
}
