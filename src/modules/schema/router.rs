use crate::modules::schema::controller::{get_schema, list_schemas};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_schema_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_schemas))
        .route("/{name}", get(get_schema))
}
