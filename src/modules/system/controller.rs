use axum::{Json, extract::State};
use tracing::instrument;

use crate::modules::system::model::{Diagnostics, ServiceInfo};
use crate::modules::system::service::SystemService;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service name and version", body = ServiceInfo)
    ),
    tag = "System"
)]
pub async fn get_service_info() -> Json<ServiceInfo> {
    Json(SystemService::service_info())
}

/// Never fails: store errors are reported in the body.
#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Backend liveness and store connectivity", body = Diagnostics)
    ),
    tag = "System"
)]
#[instrument(skip(state))]
pub async fn run_diagnostics(State(state): State<AppState>) -> Json<Diagnostics> {
    Json(SystemService::diagnostics(state.store.as_ref(), &state.database_config).await)
}
