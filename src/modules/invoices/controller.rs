use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use schoolerp_core::{AppError, ErrorResponse, ListParams, ListResponse};
use schoolerp_db::Document;
use schoolerp_models::{FeeInvoice, FeeInvoicePatch};
use tracing::instrument;

use crate::modules::crud::model::{CreatedResponse, DeletedResponse, UpdatedResponse};
use crate::modules::crud::service::CrudService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/invoices",
    params(ListParams),
    responses(
        (status = 200, description = "Invoices, newest first; `{items, total}` when paged", body = Vec<FeeInvoice>),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Invoices"
)]
#[instrument(skip(state))]
pub async fn list_invoices(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<Document>>, AppError> {
    let invoices = CrudService::<FeeInvoice>::list(state.store.as_ref(), &params).await?;
    Ok(Json(invoices))
}

#[utoipa::path(
    post,
    path = "/invoices",
    request_body = FeeInvoice,
    responses(
        (status = 201, description = "Invoice created", body = CreatedResponse),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Invoices"
)]
#[instrument(skip(state, invoice))]
pub async fn create_invoice(
    State(state): State<AppState>,
    ValidatedJson(invoice): ValidatedJson<FeeInvoice>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = CrudService::<FeeInvoice>::create(state.store.as_ref(), invoice).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse { id: id.to_hex() }),
    ))
}

#[utoipa::path(
    get,
    path = "/invoices/{id}",
    params(
        ("id" = String, Path, description = "FeeInvoice id (24 hex characters)")
    ),
    responses(
        (status = 200, description = "FeeInvoice document", body = FeeInvoice),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "FeeInvoice not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Invoices"
)]
#[instrument(skip(state))]
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document>, AppError> {
    let invoice = CrudService::<FeeInvoice>::get(state.store.as_ref(), &id).await?;
    Ok(Json(invoice))
}

#[utoipa::path(
    put,
    path = "/invoices/{id}",
    params(
        ("id" = String, Path, description = "FeeInvoice id (24 hex characters)")
    ),
    request_body = FeeInvoicePatch,
    responses(
        (status = 200, description = "FeeInvoice updated", body = UpdatedResponse),
        (status = 400, description = "Invalid id or malformed JSON", body = ErrorResponse),
        (status = 404, description = "FeeInvoice not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Invoices"
)]
#[instrument(skip(state, patch))]
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<FeeInvoicePatch>,
) -> Result<Json<UpdatedResponse>, AppError> {
    CrudService::<FeeInvoice>::update(state.store.as_ref(), &id, patch).await?;
    Ok(Json(UpdatedResponse { updated: true }))
}

#[utoipa::path(
    delete,
    path = "/invoices/{id}",
    params(
        ("id" = String, Path, description = "FeeInvoice id (24 hex characters)")
    ),
    responses(
        (status = 200, description = "FeeInvoice deleted", body = DeletedResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "FeeInvoice not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Invoices"
)]
#[instrument(skip(state))]
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, AppError> {
    CrudService::<FeeInvoice>::delete(state.store.as_ref(), &id).await?;
    Ok(Json(DeletedResponse { deleted: true }))
}
