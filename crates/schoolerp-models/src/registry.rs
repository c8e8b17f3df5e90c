//! The static schema registry.

use serde::Serialize;
use utoipa::ToSchema;

use crate::academics::{ClassRoom, Course, Enrollment, Subject, TimetableEntry};
use crate::assessment::{AttendanceRecord, Exam, Grade};
use crate::communication::Announcement;
use crate::finance::{FeeInvoice, Payment};
use crate::people::{Parent, Student, Teacher};
use crate::schema::{Entity, FieldSpec, Schema};

/// Registry entry for one entity kind.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct SchemaDef {
    #[schema(value_type = String, example = "Student")]
    pub name: &'static str,
    #[schema(value_type = String, example = "student")]
    pub collection: &'static str,
    /// Resource path segment when the kind is exposed over HTTP.
    #[schema(value_type = Option<String>, example = "students")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<&'static str>,
    #[schema(value_type = Vec<Object>)]
    pub fields: &'static [FieldSpec],
}

const fn declared<T: Schema>() -> SchemaDef {
    SchemaDef {
        name: T::NAME,
        collection: T::COLLECTION,
        resource: None,
        fields: T::FIELDS,
    }
}

const fn exposed<T: Entity>() -> SchemaDef {
    SchemaDef {
        resource: Some(T::RESOURCE),
        ..declared::<T>()
    }
}

pub static REGISTRY: &[SchemaDef] = &[
    declared::<Parent>(),
    exposed::<Student>(),
    exposed::<Teacher>(),
    declared::<Subject>(),
    exposed::<ClassRoom>(),
    declared::<Course>(),
    declared::<Enrollment>(),
    declared::<TimetableEntry>(),
    declared::<AttendanceRecord>(),
    declared::<Exam>(),
    declared::<Grade>(),
    exposed::<FeeInvoice>(),
    declared::<Payment>(),
    declared::<Announcement>(),
];

/// Looks up a schema by kind name or collection name, ignoring case.
pub fn find(name: &str) -> Option<&'static SchemaDef> {
    REGISTRY.iter().find(|def| {
        def.name.eq_ignore_ascii_case(name) || def.collection.eq_ignore_ascii_case(name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldKind, to_document};
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_registry_has_every_kind_once() {
        assert_eq!(REGISTRY.len(), 14);
        let names: HashSet<_> = REGISTRY.iter().map(|def| def.name).collect();
        assert_eq!(names.len(), REGISTRY.len());
    }

    #[test]
    fn test_collections_are_lowercased_names() {
        for def in REGISTRY {
            assert_eq!(def.collection, def.name.to_lowercase());
        }
    }

    #[test]
    fn test_exposed_resources() {
        let resources: Vec<_> = REGISTRY.iter().filter_map(|def| def.resource).collect();
        assert_eq!(resources, vec!["students", "teachers", "classes", "invoices"]);
    }

    #[test]
    fn test_find_by_name_or_collection() {
        assert_eq!(find("Student").map(|def| def.collection), Some("student"));
        assert_eq!(find("classroom").map(|def| def.name), Some("ClassRoom"));
        assert_eq!(find("FEEINVOICE").map(|def| def.name), Some("FeeInvoice"));
        assert!(find("classes").is_none());
        assert!(find("unknown").is_none());
    }

    #[test]
    fn test_field_names_unique_per_schema() {
        for def in REGISTRY {
            let names: HashSet<_> = def.fields.iter().map(|spec| spec.name).collect();
            assert_eq!(names.len(), def.fields.len(), "duplicate field in {}", def.name);
        }
    }

    #[test]
    fn test_required_fields_have_no_default() {
        for def in REGISTRY {
            for spec in def.fields {
                assert!(
                    !(spec.required && spec.default.is_some()),
                    "{}.{} is required and defaulted",
                    def.name,
                    spec.name
                );
            }
        }
    }

    #[test]
    fn test_declared_fields_match_student_serialization() {
        let student: Student = serde_json::from_value(json!({
            "admission_number": "A1",
            "first_name": "Jane",
            "last_name": "Doe",
            "date_of_birth": "2011-04-02",
            "gender": "female",
            "email": "jane@school.test",
            "phone": "555-0100",
            "address": "1 Main St",
            "class_id": "c1"
        }))
        .unwrap();
        let document = to_document(&student).unwrap();

        let declared: HashSet<_> = Student::FIELDS.iter().map(|spec| spec.name).collect();
        let serialized: HashSet<_> = document.keys().map(String::as_str).collect();
        assert_eq!(declared, serialized);
    }

    #[test]
    fn test_declared_fields_match_invoice_serialization() {
        let invoice: FeeInvoice = serde_json::from_value(json!({
            "student_id": "s1",
            "invoice_number": "INV-1",
            "issue_date": "2025-01-10",
            "due_date": "2025-02-10",
            "description": "Term 1 tuition",
            "amount": 100
        }))
        .unwrap();
        let document = to_document(&invoice).unwrap();

        let declared: HashSet<_> = FeeInvoice::FIELDS.iter().map(|spec| spec.name).collect();
        let serialized: HashSet<_> = document.keys().map(String::as_str).collect();
        assert_eq!(declared, serialized);
    }

    #[test]
    fn test_search_fields_are_declared() {
        fn check<E: Entity>() {
            for field in E::SEARCH_FIELDS {
                assert!(E::declares(field), "{} does not declare {field}", E::NAME);
            }
        }
        check::<Student>();
        check::<Teacher>();
        check::<ClassRoom>();
        check::<FeeInvoice>();
    }

    #[test]
    fn test_registry_serialization() {
        let def = find("teacher").unwrap();
        let value = serde_json::to_value(def).unwrap();
        assert_eq!(value["name"], "Teacher");
        assert_eq!(value["resource"], "teachers");
        assert_eq!(value["fields"][2], json!({"name": "email", "type": {"type": "email"}, "required": true}));

        let subject = serde_json::to_value(find("Subject").unwrap()).unwrap();
        assert!(subject.get("resource").is_none());
    }

    #[test]
    fn test_timetable_times_declared_as_time() {
        let def = find("TimetableEntry").unwrap();
        let start = def.fields.iter().find(|spec| spec.name == "start_time").unwrap();
        assert_eq!(start.kind, FieldKind::Time);
    }
}
