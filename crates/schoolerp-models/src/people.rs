//! Students, teachers, and parents.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::schema::{DefaultValue, Entity, FieldKind, FieldSpec, Schema, patch_of};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    #[default]
    Active,
    Graduated,
    Transferred,
    Suspended,
}

impl StudentStatus {
    pub const VALUES: &'static [&'static str] = &["active", "graduated", "transferred", "suspended"];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TeacherStatus {
    #[default]
    Active,
    Inactive,
}

impl TeacherStatus {
    pub const VALUES: &'static [&'static str] = &["active", "inactive"];
}

/// A parent or guardian.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Parent {
    pub first_name: String,
    pub last_name: String,
    #[validate(email)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Relationship to the student, e.g. father, mother, guardian
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
}

impl Schema for Parent {
    const NAME: &'static str = "Parent";
    const COLLECTION: &'static str = "parent";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("first_name", FieldKind::String),
        FieldSpec::required("last_name", FieldKind::String),
        FieldSpec::optional("email", FieldKind::Email),
        FieldSpec::optional("phone", FieldKind::String),
        FieldSpec::optional("address", FieldKind::String),
        FieldSpec::optional("relationship", FieldKind::String)
            .describe("Relationship to student e.g., father, mother, guardian"),
    ];
}

/// An enrolled student.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Student {
    /// Unique admission/enrollment number
    pub admission_number: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[validate(email)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// ClassRoom `_id`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
    /// Parent `_id`s
    #[serde(default)]
    pub parent_ids: Vec<String>,
    #[serde(default)]
    pub status: StudentStatus,
}

impl Schema for Student {
    const NAME: &'static str = "Student";
    const COLLECTION: &'static str = "student";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("admission_number", FieldKind::String)
            .describe("Unique admission/enrollment number"),
        FieldSpec::required("first_name", FieldKind::String),
        FieldSpec::required("last_name", FieldKind::String),
        FieldSpec::optional("date_of_birth", FieldKind::Date),
        FieldSpec::optional("gender", FieldKind::String).describe("male/female/other"),
        FieldSpec::optional("email", FieldKind::Email),
        FieldSpec::optional("phone", FieldKind::String),
        FieldSpec::optional("address", FieldKind::String),
        FieldSpec::optional("class_id", FieldKind::String)
            .describe("Reference to ClassRoom _id as string"),
        FieldSpec::defaulted("parent_ids", FieldKind::StringList, DefaultValue::EmptyList)
            .describe("List of Parent _id as strings"),
        FieldSpec::defaulted(
            "status",
            FieldKind::Enum {
                values: StudentStatus::VALUES,
            },
            DefaultValue::Str("active"),
        ),
    ];
}

impl Entity for Student {
    const RESOURCE: &'static str = "students";
    const SEARCH_FIELDS: &'static [&'static str] =
        &["admission_number", "first_name", "last_name", "email"];
    type Patch = StudentPatch;
}

/// Partial student update. Only the fields present are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct StudentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[validate(email)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StudentStatus>,
}

patch_of!(StudentPatch => Student);

/// A member of teaching staff.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Teacher {
    pub first_name: String,
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
    /// Subject `_id`s this teacher teaches
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub status: TeacherStatus,
}

impl Schema for Teacher {
    const NAME: &'static str = "Teacher";
    const COLLECTION: &'static str = "teacher";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("first_name", FieldKind::String),
        FieldSpec::required("last_name", FieldKind::String),
        FieldSpec::required("email", FieldKind::Email),
        FieldSpec::optional("phone", FieldKind::String),
        FieldSpec::optional("address", FieldKind::String),
        FieldSpec::optional("hire_date", FieldKind::Date),
        FieldSpec::defaulted("subjects", FieldKind::StringList, DefaultValue::EmptyList)
            .describe("Subject _ids as strings they teach"),
        FieldSpec::defaulted(
            "status",
            FieldKind::Enum {
                values: TeacherStatus::VALUES,
            },
            DefaultValue::Str("active"),
        ),
    ];
}

impl Entity for Teacher {
    const RESOURCE: &'static str = "teachers";
    const SEARCH_FIELDS: &'static [&'static str] = &["first_name", "last_name", "email"];
    type Patch = TeacherPatch;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct TeacherPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[validate(email)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TeacherStatus>,
}

patch_of!(TeacherPatch => Teacher);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::to_document;
    use serde_json::json;

    fn valid_student() -> Student {
        serde_json::from_value(json!({
            "admission_number": "A100",
            "first_name": "Jane",
            "last_name": "Doe"
        }))
        .unwrap()
    }

    #[test]
    fn test_student_defaults() {
        let student = valid_student();
        assert_eq!(student.status, StudentStatus::Active);
        assert!(student.parent_ids.is_empty());
        assert!(student.validate().is_ok());
    }

    #[test]
    fn test_student_document_has_submitted_fields_and_defaults_only() {
        let document = to_document(&valid_student()).unwrap();
        assert_eq!(
            serde_json::Value::Object(document),
            json!({
                "admission_number": "A100",
                "first_name": "Jane",
                "last_name": "Doe",
                "parent_ids": [],
                "status": "active"
            })
        );
    }

    #[test]
    fn test_student_missing_required_field() {
        let result = serde_json::from_value::<Student>(json!({
            "first_name": "Jane",
            "last_name": "Doe"
        }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("admission_number"));
    }

    #[test]
    fn test_student_invalid_status() {
        let result = serde_json::from_value::<Student>(json!({
            "admission_number": "A100",
            "first_name": "Jane",
            "last_name": "Doe",
            "status": "expelled"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_student_invalid_email() {
        let mut student = valid_student();
        student.email = Some("not-an-email".to_string());
        assert!(student.validate().is_err());
    }

    #[test]
    fn test_student_free_text_fields_are_not_bounded() {
        let mut student = valid_student();
        student.first_name = String::new();
        student.admission_number = "A".repeat(200);
        assert!(student.validate().is_ok());
    }

    #[test]
    fn test_student_date_of_birth_format() {
        let student: Student = serde_json::from_value(json!({
            "admission_number": "A101",
            "first_name": "Sam",
            "last_name": "Okoro",
            "date_of_birth": "2010-01-15"
        }))
        .unwrap();
        let document = to_document(&student).unwrap();
        assert_eq!(document["date_of_birth"], "2010-01-15");
    }

    #[test]
    fn test_student_patch_skips_absent_and_null_fields() {
        let patch: StudentPatch = serde_json::from_value(json!({
            "status": "graduated",
            "phone": null
        }))
        .unwrap();
        let document = to_document(&patch).unwrap();
        assert_eq!(serde_json::Value::Object(document), json!({"status": "graduated"}));
    }

    #[test]
    fn test_student_patch_validates_present_fields() {
        let patch = StudentPatch {
            email: Some("bad".to_string()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
        assert!(StudentPatch::default().validate().is_ok());
    }

    #[test]
    fn test_teacher_requires_valid_email() {
        let missing = serde_json::from_value::<Teacher>(json!({
            "first_name": "Ada",
            "last_name": "Obi"
        }));
        assert!(missing.is_err());

        let teacher: Teacher = serde_json::from_value(json!({
            "first_name": "Ada",
            "last_name": "Obi",
            "email": "ada.obi"
        }))
        .unwrap();
        assert!(teacher.validate().is_err());
    }

    #[test]
    fn test_teacher_defaults() {
        let teacher: Teacher = serde_json::from_value(json!({
            "first_name": "Ada",
            "last_name": "Obi",
            "email": "ada@school.test"
        }))
        .unwrap();
        assert_eq!(teacher.status, TeacherStatus::Active);
        assert!(teacher.subjects.is_empty());
        assert!(teacher.validate().is_ok());
    }

    #[test]
    fn test_status_values_match_serialization() {
        for (status, expected) in [
            StudentStatus::Active,
            StudentStatus::Graduated,
            StudentStatus::Transferred,
            StudentStatus::Suspended,
        ]
        .iter()
        .zip(StudentStatus::VALUES)
        {
            assert_eq!(serde_json::to_value(status).unwrap(), json!(expected));
        }

        for (status, expected) in [TeacherStatus::Active, TeacherStatus::Inactive]
            .iter()
            .zip(TeacherStatus::VALUES)
        {
            assert_eq!(serde_json::to_value(status).unwrap(), json!(expected));
        }
    }

    #[test]
    fn test_parent_optional_email_validated() {
        let parent = Parent {
            first_name: "Grace".to_string(),
            last_name: "Doe".to_string(),
            email: Some("grace@".to_string()),
            phone: None,
            address: None,
            relationship: Some("mother".to_string()),
        };
        assert!(parent.validate().is_err());
    }
}
