use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::modules::classes::router::init_classes_router;
use crate::modules::invoices::router::init_invoices_router;
use crate::modules::schema::router::init_schema_router;
use crate::modules::students::router::init_students_router;
use crate::modules::system::router::init_system_router;
use crate::modules::teachers::router::init_teachers_router;
use crate::state::AppState;
use axum::http::HeaderValue;
use axum::{Router, middleware};
use schoolerp_config::CorsConfig;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

/// Credentialed CORS. Origin, methods and headers are echoed from the
/// request, since a literal `*` is not allowed alongside credentials.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allow_origin = if config.allows_any_origin() {
        AllowOrigin::mirror_request()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn init_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_config);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(init_system_router())
        .nest("/schema", init_schema_router())
        .nest("/students", init_students_router())
        .nest("/teachers", init_teachers_router())
        .nest("/classes", init_classes_router())
        .nest("/invoices", init_invoices_router())
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
