//! The document store contract.
//!
//! Handlers never talk to a database directly; they receive a
//! `dyn DocumentStore` through the application state. Each method is a single
//! round trip to the backend.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::document::{Document, Filter, FindOptions, StoredDocument};
use crate::object_id::ObjectId;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("corrupt document in `{collection}`: {reason}")]
    Corrupt { collection: String, reason: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("unsupported connection string scheme `{0}`")]
    UnsupportedScheme(String),
}

#[async_trait]
pub trait DocumentStore: Debug + Send + Sync {
    /// Documents matching `filter`, newest first, windowed by `options`.
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        options: FindOptions,
    ) -> Result<Vec<StoredDocument>, StoreError>;

    /// Number of documents matching `filter`.
    async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError>;

    async fn find_one(
        &self,
        collection: &str,
        id: &ObjectId,
    ) -> Result<Option<StoredDocument>, StoreError>;

    /// Inserts `body` under a freshly assigned identifier. The store stamps
    /// `created_at` and `updated_at`.
    async fn insert_one(&self, collection: &str, body: Document) -> Result<ObjectId, StoreError>;

    /// Sets every top-level field in `changes`, leaving all others untouched.
    /// Returns whether a document matched.
    async fn update_one(
        &self,
        collection: &str,
        id: &ObjectId,
        changes: Document,
    ) -> Result<bool, StoreError>;

    /// Returns whether a document was removed.
    async fn delete_one(&self, collection: &str, id: &ObjectId) -> Result<bool, StoreError>;

    /// Names of collections holding at least one document.
    async fn list_collections(&self) -> Result<Vec<String>, StoreError>;

    /// Releases backend resources. Later calls fail with
    /// [`StoreError::Unavailable`] or a backend error.
    async fn close(&self);
}
