//! # School ERP Models
//!
//! Entity schemas for the School ERP API.
//!
//! Every entity kind is a plain struct carrying its field declarations
//! through [`Schema`]. Kinds exposed over HTTP also implement [`Entity`],
//! which adds the resource path, the search fields, and a patch type whose
//! fields are all optional.
//!
//! - [`people`]: students, teachers, parents
//! - [`academics`]: subjects, classes, courses, enrollments, timetable
//! - [`assessment`]: attendance, exams, grades
//! - [`finance`]: fee invoices, payments
//! - [`communication`]: announcements
//! - [`registry`]: the static schema registry served by `GET /schema`

pub mod academics;
pub mod assessment;
pub mod communication;
pub mod finance;
pub mod people;
pub mod registry;
pub mod schema;
pub mod validation;

pub use academics::{ClassRoom, ClassRoomPatch};
pub use finance::{FeeInvoice, FeeInvoicePatch};
pub use people::{Student, StudentPatch, Teacher, TeacherPatch};
pub use registry::{REGISTRY, SchemaDef};
pub use schema::{DefaultValue, Entity, FieldKind, FieldSpec, Schema, to_document};
