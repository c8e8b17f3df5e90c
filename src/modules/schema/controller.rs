use anyhow::anyhow;
use axum::{Json, extract::Path};
use schoolerp_core::{AppError, ErrorResponse};
use schoolerp_models::{REGISTRY, SchemaDef, registry};

#[utoipa::path(
    get,
    path = "/schema",
    responses(
        (status = 200, description = "Field declarations for every entity kind", body = Vec<SchemaDef>)
    ),
    tag = "Schema"
)]
pub async fn list_schemas() -> Json<&'static [SchemaDef]> {
    Json(REGISTRY)
}

#[utoipa::path(
    get,
    path = "/schema/{name}",
    params(
        ("name" = String, Path, description = "Entity kind or collection name, case-insensitive")
    ),
    responses(
        (status = 200, description = "Field declarations for one entity kind", body = SchemaDef),
        (status = 404, description = "Unknown entity kind", body = ErrorResponse)
    ),
    tag = "Schema"
)]
pub async fn get_schema(Path(name): Path<String>) -> Result<Json<&'static SchemaDef>, AppError> {
    registry::find(&name)
        .map(Json)
        .ok_or_else(|| AppError::not_found(anyhow!("Unknown schema: {}", name)))
}
