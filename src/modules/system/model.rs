use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    #[schema(example = "School ERP Backend")]
    pub name: String,
    #[schema(example = "1.0.0")]
    pub version: String,
}

/// Store connectivity report from `GET /test`.
///
/// Configuration values are reported only as present or absent.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Diagnostics {
    /// Always `running` when the service answers
    #[schema(example = "running")]
    pub backend: String,
    /// `connected`, `not configured`, or the truncated store error
    #[schema(example = "connected")]
    pub database: String,
    #[schema(example = "Connected")]
    pub connection_status: String,
    /// Up to 20 collection names
    pub collections: Vec<String>,
    /// Whether `DATABASE_URL` is set
    pub database_url: bool,
    /// Whether `DATABASE_NAME` is set
    pub database_name: bool,
}
