use schoolerp_config::DatabaseConfig;
use schoolerp_db::DocumentStore;
use tracing::{instrument, warn};

use crate::modules::system::model::{Diagnostics, ServiceInfo};

pub const SERVICE_NAME: &str = "School ERP Backend";
pub const MAX_REPORTED_COLLECTIONS: usize = 20;
const MAX_ERROR_CHARS: usize = 80;

fn truncate_chars(message: &str, max: usize) -> String {
    message.chars().take(max).collect()
}

pub struct SystemService;

impl SystemService {
    pub fn service_info() -> ServiceInfo {
        ServiceInfo {
            name: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    #[instrument(skip(store))]
    pub async fn diagnostics(store: &dyn DocumentStore, config: &DatabaseConfig) -> Diagnostics {
        let mut report = Diagnostics {
            backend: "running".to_string(),
            database: "not connected".to_string(),
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
            database_url: config.has_url(),
            database_name: config.has_name(),
        };

        match store.list_collections().await {
            Ok(mut collections) => {
                collections.truncate(MAX_REPORTED_COLLECTIONS);
                report.database = "connected".to_string();
                report.connection_status = "Connected".to_string();
                report.collections = collections;
            }
            Err(e) => {
                warn!(error = %e, "Store connectivity check failed");
                report.database = format!("error: {}", truncate_chars(&e.to_string(), MAX_ERROR_CHARS));
            }
        }

        report
    }
}
