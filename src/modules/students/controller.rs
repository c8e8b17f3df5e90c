use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use schoolerp_core::{AppError, ErrorResponse, ListParams, ListResponse};
use schoolerp_db::Document;
use schoolerp_models::{Student, StudentPatch};
use tracing::instrument;

use crate::modules::crud::model::{CreatedResponse, DeletedResponse, UpdatedResponse};
use crate::modules::crud::service::CrudService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/students",
    params(ListParams),
    responses(
        (status = 200, description = "Students, newest first; `{items, total}` when paged", body = Vec<Student>),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn list_students(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<Document>>, AppError> {
    let students = CrudService::<Student>::list(state.store.as_ref(), &params).await?;
    Ok(Json(students))
}

#[utoipa::path(
    post,
    path = "/students",
    request_body = Student,
    responses(
        (status = 201, description = "Student created", body = CreatedResponse),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, student))]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(student): ValidatedJson<Student>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = CrudService::<Student>::create(state.store.as_ref(), student).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse { id: id.to_hex() }),
    ))
}

#[utoipa::path(
    get,
    path = "/students/{id}",
    params(
        ("id" = String, Path, description = "Student id (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Student document", body = Student),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document>, AppError> {
    let student = CrudService::<Student>::get(state.store.as_ref(), &id).await?;
    Ok(Json(student))
}

#[utoipa::path(
    put,
    path = "/students/{id}",
    params(
        ("id" = String, Path, description = "Student id (24 hex characters)")
    ),
    request_body = StudentPatch,
    responses(
        (status = 200, description = "Student updated", body = UpdatedResponse),
        (status = 400, description = "Invalid id or malformed JSON", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, patch))]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<StudentPatch>,
) -> Result<Json<UpdatedResponse>, AppError> {
    CrudService::<Student>::update(state.store.as_ref(), &id, patch).await?;
    Ok(Json(UpdatedResponse { updated: true }))
}

#[utoipa::path(
    delete,
    path = "/students/{id}",
    params(
        ("id" = String, Path, description = "Student id (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Student deleted", body = DeletedResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, AppError> {
    CrudService::<Student>::delete(state.store.as_ref(), &id).await?;
    Ok(Json(DeletedResponse { deleted: true }))
}
