//! # School ERP DB
//!
//! Document store abstraction for the School ERP API.
//!
//! - [`store`]: the [`DocumentStore`] trait every backend implements
//! - [`postgres`]: JSONB-backed store on Postgres (via SQLx)
//! - [`memory`]: in-process store with identical semantics
//! - [`object_id`]: 12-byte document identifiers
//! - [`document`]: documents, filters, and find options
//!
//! # Example
//!
//! ```ignore
//! use schoolerp_db::{Filter, FindOptions, connect};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), schoolerp_db::StoreError> {
//!     let store = connect("memory://", None, 10).await?;
//!     let id = store.insert_one("student", Default::default()).await?;
//!     let newest = store.find("student", &Filter::all(), FindOptions::new().limit(10)).await?;
//!     store.close().await;
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod memory;
pub mod object_id;
pub mod postgres;
pub mod store;

use std::sync::Arc;
use tracing::info;

pub use document::{Document, Filter, FindOptions, ID_KEY, StoredDocument, TextSearch};
pub use memory::MemoryStore;
pub use object_id::{InvalidObjectId, ObjectId};
pub use postgres::PgDocumentStore;
pub use store::{DocumentStore, StoreError};

/// Opens the store named by a connection string.
///
/// - `memory://…` selects [`MemoryStore`]
/// - `postgres://…` / `postgresql://…` selects [`PgDocumentStore`]
pub async fn connect(
    url: &str,
    database: Option<&str>,
    max_connections: u32,
) -> Result<Arc<dyn DocumentStore>, StoreError> {
    let scheme = url.split_once("://").map(|(scheme, _)| scheme).unwrap_or("");

    match scheme {
        "memory" => {
            info!("Using in-memory document store");
            Ok(Arc::new(MemoryStore::new()))
        }
        "postgres" | "postgresql" => Ok(Arc::new(
            PgDocumentStore::connect(url, database, max_connections).await?,
        )),
        other => Err(StoreError::UnsupportedScheme(other.to_string())),
    }
}
