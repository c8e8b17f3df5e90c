use schoolerp_core::ErrorResponse;
use schoolerp_models::academics::{ClassRoom, ClassRoomPatch};
use schoolerp_models::finance::{FeeInvoice, FeeInvoicePatch, InvoiceStatus};
use schoolerp_models::people::{Student, StudentPatch, StudentStatus, Teacher, TeacherPatch, TeacherStatus};
use schoolerp_models::SchemaDef;
use utoipa::OpenApi;

use crate::modules::crud::model::{CreatedResponse, DeletedResponse, UpdatedResponse};
use crate::modules::system::model::{Diagnostics, ServiceInfo};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::system::controller::get_service_info,
        crate::modules::system::controller::run_diagnostics,
        crate::modules::schema::controller::list_schemas,
        crate::modules::schema::controller::get_schema,
        crate::modules::students::controller::list_students,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::teachers::controller::list_teachers,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::get_teacher,
        crate::modules::teachers::controller::update_teacher,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::classes::controller::list_classes,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::get_class,
        crate::modules::classes::controller::update_class,
        crate::modules::classes::controller::delete_class,
        crate::modules::invoices::controller::list_invoices,
        crate::modules::invoices::controller::create_invoice,
        crate::modules::invoices::controller::get_invoice,
        crate::modules::invoices::controller::update_invoice,
        crate::modules::invoices::controller::delete_invoice,
    ),
    components(
        schemas(
            Student,
            StudentPatch,
            StudentStatus,
            Teacher,
            TeacherPatch,
            TeacherStatus,
            ClassRoom,
            ClassRoomPatch,
            FeeInvoice,
            FeeInvoicePatch,
            InvoiceStatus,
            CreatedResponse,
            UpdatedResponse,
            DeletedResponse,
            ServiceInfo,
            Diagnostics,
            SchemaDef,
            ErrorResponse,
        )
    ),
    tags(
        (name = "System", description = "Service identity and store diagnostics"),
        (name = "Schema", description = "Entity field declarations"),
        (name = "Students", description = "Student records"),
        (name = "Teachers", description = "Teacher records"),
        (name = "Classes", description = "Classes (classrooms) per academic year"),
        (name = "Invoices", description = "Fee invoices")
    ),
    info(
        title = "School ERP API",
        description = "Document-store backed CRUD API for students, teachers, classes, and fee invoices.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_resource() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/test",
            "/schema",
            "/schema/{name}",
            "/students",
            "/students/{id}",
            "/teachers",
            "/teachers/{id}",
            "/classes",
            "/classes/{id}",
            "/invoices",
            "/invoices/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
