//! Seeding of fake school data through the document store.
//!
//! Teachers are seeded first, then classes referencing them, then students
//! placed in those classes, then invoices for those students. Each document
//! goes through the same schema types and store as the API, so seeded data
//! is indistinguishable from data created over HTTP.

mod classes;
mod invoices;
mod models;
mod people;

pub use classes::generate_classes;
pub use invoices::generate_invoices;
pub use models::{SeedConfig, SeedSummary};
pub use people::{generate_students, generate_teachers};

use schoolerp_db::{DocumentStore, ObjectId};
use schoolerp_models::{Schema, to_document};
use serde::Serialize;
use std::time::Instant;

/// Inserts `entities` one by one into their collection.
pub async fn insert_all<T>(store: &dyn DocumentStore, entities: &[T]) -> anyhow::Result<Vec<ObjectId>>
where
    T: Schema + Serialize,
{
    let mut ids = Vec::with_capacity(entities.len());
    for entity in entities {
        let id = store.insert_one(T::COLLECTION, to_document(entity)?).await?;
        ids.push(id);
    }
    Ok(ids)
}

fn hex_ids(ids: &[ObjectId]) -> Vec<String> {
    ids.iter().map(ObjectId::to_hex).collect()
}

/// Seeds teachers, classes, students, and invoices.
pub async fn seed_all(store: &dyn DocumentStore, config: &SeedConfig) -> anyhow::Result<SeedSummary> {
    let start_time = Instant::now();

    println!("👩‍🏫 Seeding {} teachers...", config.teachers);
    let teacher_ids = insert_all(store, &generate_teachers(config.teachers)).await?;

    println!("🏫 Seeding {} classes...", config.classes);
    let class_ids = insert_all(
        store,
        &generate_classes(config.classes, config.year, &hex_ids(&teacher_ids)),
    )
    .await?;

    println!("🎓 Seeding {} students...", config.students);
    let student_ids = insert_all(
        store,
        &generate_students(config.students, config.year, &hex_ids(&class_ids)),
    )
    .await?;

    println!(
        "🧾 Seeding {} invoices ({} per student)...",
        student_ids.len() * config.invoices_per_student,
        config.invoices_per_student
    );
    let invoice_ids = insert_all(
        store,
        &generate_invoices(&hex_ids(&student_ids), config.invoices_per_student, config.year),
    )
    .await?;

    let summary = SeedSummary {
        teachers: teacher_ids.len(),
        classes: class_ids.len(),
        students: student_ids.len(),
        invoices: invoice_ids.len(),
    };

    println!(
        "   ✓ Inserted {} documents in {:?}",
        summary.total(),
        start_time.elapsed()
    );

    Ok(summary)
}
