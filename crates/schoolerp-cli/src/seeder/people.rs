//! Fake students and teachers.

use chrono::NaiveDate;
use fake::Fake;
use fake::faker::address::en::StreetName;
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use schoolerp_models::people::{Student, StudentStatus, Teacher, TeacherStatus};

fn email_for(first_name: &str, last_name: &str, role: &str, idx: usize) -> String {
    format!(
        "{}.{}+{}{}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        role,
        idx
    )
}

fn random_date(years: std::ops::Range<i32>) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(years.fake(), (1u32..=12).fake(), (1u32..=28).fake())
}

pub fn generate_teachers(count: usize) -> Vec<Teacher> {
    (0..count)
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();

            Teacher {
                email: email_for(&first_name, &last_name, "teacher", idx),
                first_name,
                last_name,
                phone: Some(PhoneNumber().fake()),
                address: None,
                hire_date: random_date(2005..2025),
                subjects: Vec::new(),
                status: TeacherStatus::Active,
            }
        })
        .collect()
}

/// Students spread round-robin across `class_ids`, left unassigned when
/// there are no classes.
pub fn generate_students(count: usize, year: i32, class_ids: &[String]) -> Vec<Student> {
    (0..count)
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let class_id = (!class_ids.is_empty()).then(|| class_ids[idx % class_ids.len()].clone());

            Student {
                admission_number: format!("ADM-{}-{:05}", year, idx + 1),
                email: Some(email_for(&first_name, &last_name, "student", idx)),
                first_name,
                last_name,
                date_of_birth: random_date(year - 18..year - 5),
                gender: None,
                phone: None,
                address: Some(StreetName().fake()),
                class_id,
                parent_ids: Vec::new(),
                status: StudentStatus::Active,
            }
        })
        .collect()
}
