use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use schoolerp_core::{AppError, ErrorResponse, ListParams, ListResponse};
use schoolerp_db::Document;
use schoolerp_models::{Teacher, TeacherPatch};
use tracing::instrument;

use crate::modules::crud::model::{CreatedResponse, DeletedResponse, UpdatedResponse};
use crate::modules::crud::service::CrudService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/teachers",
    params(ListParams),
    responses(
        (status = 200, description = "Teachers, newest first; `{items, total}` when paged", body = Vec<Teacher>),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn list_teachers(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<Document>>, AppError> {
    let teachers = CrudService::<Teacher>::list(state.store.as_ref(), &params).await?;
    Ok(Json(teachers))
}

#[utoipa::path(
    post,
    path = "/teachers",
    request_body = Teacher,
    responses(
        (status = 201, description = "Teacher created", body = CreatedResponse),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, teacher))]
pub async fn create_teacher(
    State(state): State<AppState>,
    ValidatedJson(teacher): ValidatedJson<Teacher>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = CrudService::<Teacher>::create(state.store.as_ref(), teacher).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse { id: id.to_hex() }),
    ))
}

#[utoipa::path(
    get,
    path = "/teachers/{id}",
    params(
        ("id" = String, Path, description = "Teacher id (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Teacher document", body = Teacher),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document>, AppError> {
    let teacher = CrudService::<Teacher>::get(state.store.as_ref(), &id).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    put,
    path = "/teachers/{id}",
    params(
        ("id" = String, Path, description = "Teacher id (24 hex characters)")
    ),
    request_body = TeacherPatch,
    responses(
        (status = 200, description = "Teacher updated", body = UpdatedResponse),
        (status = 400, description = "Invalid id or malformed JSON", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, patch))]
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<TeacherPatch>,
) -> Result<Json<UpdatedResponse>, AppError> {
    CrudService::<Teacher>::update(state.store.as_ref(), &id, patch).await?;
    Ok(Json(UpdatedResponse { updated: true }))
}

#[utoipa::path(
    delete,
    path = "/teachers/{id}",
    params(
        ("id" = String, Path, description = "Teacher id (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Teacher deleted", body = DeletedResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, AppError> {
    CrudService::<Teacher>::delete(state.store.as_ref(), &id).await?;
    Ok(Json(DeletedResponse { deleted: true }))
}
