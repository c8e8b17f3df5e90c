use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use schoolerp_core::{AppError, ErrorResponse, ListParams, ListResponse};
use schoolerp_db::Document;
use schoolerp_models::{ClassRoom, ClassRoomPatch};
use tracing::instrument;

use crate::modules::crud::model::{CreatedResponse, DeletedResponse, UpdatedResponse};
use crate::modules::crud::service::CrudService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/classes",
    params(ListParams),
    responses(
        (status = 200, description = "Classes, newest first; `{items, total}` when paged", body = Vec<ClassRoom>),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn list_classes(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<Document>>, AppError> {
    let classes = CrudService::<ClassRoom>::list(state.store.as_ref(), &params).await?;
    Ok(Json(classes))
}

#[utoipa::path(
    post,
    path = "/classes",
    request_body = ClassRoom,
    responses(
        (status = 201, description = "Class created", body = CreatedResponse),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state, class))]
pub async fn create_class(
    State(state): State<AppState>,
    ValidatedJson(class): ValidatedJson<ClassRoom>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = CrudService::<ClassRoom>::create(state.store.as_ref(), class).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse { id: id.to_hex() }),
    ))
}

#[utoipa::path(
    get,
    path = "/classes/{id}",
    params(
        ("id" = String, Path, description = "ClassRoom id (24 hex characters)")
    ),
    responses(
        (status = 200, description = "ClassRoom document", body = ClassRoom),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "ClassRoom not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document>, AppError> {
    let class = CrudService::<ClassRoom>::get(state.store.as_ref(), &id).await?;
    Ok(Json(class))
}

#[utoipa::path(
    put,
    path = "/classes/{id}",
    params(
        ("id" = String, Path, description = "ClassRoom id (24 hex characters)")
    ),
    request_body = ClassRoomPatch,
    responses(
        (status = 200, description = "ClassRoom updated", body = UpdatedResponse),
        (status = 400, description = "Invalid id or malformed JSON", body = ErrorResponse),
        (status = 404, description = "ClassRoom not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state, patch))]
pub async fn update_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<ClassRoomPatch>,
) -> Result<Json<UpdatedResponse>, AppError> {
    CrudService::<ClassRoom>::update(state.store.as_ref(), &id, patch).await?;
    Ok(Json(UpdatedResponse { updated: true }))
}

#[utoipa::path(
    delete,
    path = "/classes/{id}",
    params(
        ("id" = String, Path, description = "ClassRoom id (24 hex characters)")
    ),
    responses(
        (status = 200, description = "ClassRoom deleted", body = DeletedResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "ClassRoom not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn delete_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, AppError> {
    CrudService::<ClassRoom>::delete(state.store.as_ref(), &id).await?;
    Ok(Json(DeletedResponse { deleted: true }))
}
