use anyhow::{Context, anyhow};
use axum::extract::FromRef;
use schoolerp_config::{CorsConfig, DatabaseConfig, SchemaConfig};
use schoolerp_db::DocumentStore;
use std::sync::Arc;

#[derive(Clone, Debug, FromRef)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub database_config: DatabaseConfig,
    pub cors_config: CorsConfig,
    pub schema_config: SchemaConfig,
}

impl AppState {
    /// State around an already opened store, with every other setting at
    /// its default.
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            database_config: DatabaseConfig::default(),
            cors_config: CorsConfig::default(),
            schema_config: SchemaConfig::default(),
        }
    }
}

/// Reads configuration from the environment and opens the document store.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let database_config = DatabaseConfig::from_env();
    let url = database_config
        .url
        .as_deref()
        .ok_or_else(|| anyhow!("DATABASE_URL must be set"))?;

    let store = schoolerp_db::connect(
        url,
        database_config.name.as_deref(),
        database_config.max_connections,
    )
    .await
    .context("Failed to open document store")?;

    Ok(AppState {
        store,
        database_config,
        cors_config: CorsConfig::from_env(),
        schema_config: SchemaConfig::from_env(),
    })
}
