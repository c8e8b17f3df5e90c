//! In-process document store.
//!
//! Same semantics as the Postgres backend, kept in a `HashMap` behind a
//! `tokio` read-write lock. Used by the test suite and selected at runtime with
//! `DATABASE_URL=memory://`.

use async_trait::async_trait;
use std::cmp::Ordering as CmpOrdering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::instrument;

use crate::document::{Document, Filter, FindOptions, StoredDocument, stamp_insert, stamp_update};
use crate::object_id::ObjectId;
use crate::store::{DocumentStore, StoreError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, HashMap<ObjectId, Document>>>,
    closed: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `body` as-is under `id`, without timestamps. Mirrors documents
    /// written by other tools straight into the database.
    pub async fn insert_raw(&self, collection: &str, id: ObjectId, body: Document) {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(id, body);
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(StoreError::Unavailable("memory store is closed".to_string()));
        }
        Ok(())
    }
}

/// Newest `created_at` first, missing timestamps last, then id descending.
fn listing_order(a: &StoredDocument, b: &StoredDocument) -> CmpOrdering {
    let by_created_at = match (a.created_at(), b.created_at()) {
        (Some(left), Some(right)) => right.cmp(left),
        (Some(_), None) => CmpOrdering::Less,
        (None, Some(_)) => CmpOrdering::Greater,
        (None, None) => CmpOrdering::Equal,
    };
    by_created_at.then_with(|| b.id.cmp(&a.id))
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl DocumentStore for MemoryStore {
    #[instrument(skip(self, filter))]
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        options: FindOptions,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        self.ensure_open()?;
        let collections = self.collections.read().await;

        let mut documents: Vec<StoredDocument> = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|(_, body)| filter.matches(body))
                    .map(|(id, body)| StoredDocument {
                        id: *id,
                        body: body.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        documents.sort_by(listing_order);

        let limit = options.limit.map(to_usize).unwrap_or(usize::MAX);
        Ok(documents
            .into_iter()
            .skip(to_usize(options.skip))
            .take(limit)
            .collect())
    }

    #[instrument(skip(self, filter))]
    async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError> {
        self.ensure_open()?;
        let collections = self.collections.read().await;

        Ok(collections
            .get(collection)
            .map(|docs| docs.values().filter(|body| filter.matches(body)).count() as u64)
            .unwrap_or(0))
    }

    #[instrument(skip(self))]
    async fn find_one(
        &self,
        collection: &str,
        id: &ObjectId,
    ) -> Result<Option<StoredDocument>, StoreError> {
        self.ensure_open()?;
        let collections = self.collections.read().await;

        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|body| StoredDocument {
                id: *id,
                body: body.clone(),
            }))
    }

    #[instrument(skip(self, body))]
    async fn insert_one(
        &self,
        collection: &str,
        mut body: Document,
    ) -> Result<ObjectId, StoreError> {
        self.ensure_open()?;
        stamp_insert(&mut body);

        let id = ObjectId::new();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(id, body);

        Ok(id)
    }

    #[instrument(skip(self, changes))]
    async fn update_one(
        &self,
        collection: &str,
        id: &ObjectId,
        mut changes: Document,
    ) -> Result<bool, StoreError> {
        self.ensure_open()?;
        let mut collections = self.collections.write().await;

        let Some(body) = collections.get_mut(collection).and_then(|docs| docs.get_mut(id))
        else {
            return Ok(false);
        };

        stamp_update(&mut changes);
        body.extend(changes);
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn delete_one(&self, collection: &str, id: &ObjectId) -> Result<bool, StoreError> {
        self.ensure_open()?;
        let mut collections = self.collections.write().await;

        Ok(collections
            .get_mut(collection)
            .is_some_and(|docs| docs.remove(id).is_some()))
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        self.ensure_open()?;
        let collections = self.collections.read().await;

        let mut names: Vec<String> = collections
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        Ok(names)
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }
}
