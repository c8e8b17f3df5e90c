use crate::modules::system::controller::{get_service_info, run_diagnostics};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_system_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_service_info))
        .route("/test", get(run_diagnostics))
}
