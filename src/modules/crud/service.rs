//! Collection-scoped CRUD shared by every exposed entity kind.
//!
//! Each operation is a single store call, except the paged listing which
//! counts the matches before reading the page.

use anyhow::anyhow;
use schoolerp_core::{AppError, ListParams, ListResponse};
use schoolerp_db::{Document, DocumentStore, Filter, FindOptions, ObjectId, StoredDocument};
use schoolerp_models::{Entity, to_document};
use std::marker::PhantomData;
use tracing::instrument;

use crate::metrics::track_document_operation;

/// Parses a path identifier, rejecting anything but 24 hex characters.
pub fn parse_id(id: &str) -> Result<ObjectId, AppError> {
    id.parse()
        .map_err(|_| AppError::bad_request(anyhow!("Invalid id")))
}

fn search_filter<E: Entity>(params: &ListParams) -> Filter {
    match params.search_text() {
        Some(needle) => Filter::text_search(E::SEARCH_FIELDS, needle),
        None => Filter::all(),
    }
}

fn into_documents(stored: Vec<StoredDocument>) -> Vec<Document> {
    stored.into_iter().map(StoredDocument::into_document).collect()
}

fn tracked<T, E>(
    collection: &'static str,
    operation: &'static str,
    result: Result<T, E>,
) -> Result<T, E> {
    track_document_operation(collection, operation, result.is_ok());
    result
}

pub struct CrudService<E>(PhantomData<E>);

impl<E: Entity> CrudService<E> {
    #[instrument(skip(store), fields(collection = E::COLLECTION))]
    pub async fn list(
        store: &dyn DocumentStore,
        params: &ListParams,
    ) -> Result<ListResponse<Document>, AppError> {
        let filter = search_filter::<E>(params);

        let response = match params.page_window() {
            Some((skip, page_size)) => {
                let total = tracked(
                    E::COLLECTION,
                    "count",
                    store.count(E::COLLECTION, &filter).await,
                )?;
                let options = FindOptions::new().skip(skip).limit(page_size);
                let items = tracked(
                    E::COLLECTION,
                    "list",
                    store.find(E::COLLECTION, &filter, options).await,
                )?;

                ListResponse::Paged {
                    items: into_documents(items),
                    total: i64::try_from(total).unwrap_or(i64::MAX),
                }
            }
            None => {
                let options = FindOptions::new().limit(params.limit());
                let items = tracked(
                    E::COLLECTION,
                    "list",
                    store.find(E::COLLECTION, &filter, options).await,
                )?;

                ListResponse::Flat(into_documents(items))
            }
        };

        Ok(response)
    }

    #[instrument(skip(store, entity), fields(collection = E::COLLECTION))]
    pub async fn create(store: &dyn DocumentStore, entity: E) -> Result<ObjectId, AppError> {
        let document = to_document(&entity)?;
        let id = tracked(
            E::COLLECTION,
            "create",
            store.insert_one(E::COLLECTION, document).await,
        )?;
        Ok(id)
    }

    #[instrument(skip(store), fields(collection = E::COLLECTION))]
    pub async fn get(store: &dyn DocumentStore, id: &str) -> Result<Document, AppError> {
        let id = parse_id(id)?;
        tracked(E::COLLECTION, "get", store.find_one(E::COLLECTION, &id).await)?
            .map(StoredDocument::into_document)
            .ok_or_else(|| AppError::not_found(anyhow!("{} not found", E::NAME)))
    }

    /// Sets exactly the fields present in `patch`; every other field keeps
    /// its stored value.
    #[instrument(skip(store, patch), fields(collection = E::COLLECTION))]
    pub async fn update(
        store: &dyn DocumentStore,
        id: &str,
        patch: E::Patch,
    ) -> Result<(), AppError> {
        let id = parse_id(id)?;
        let changes = to_document(&patch)?;

        let matched = tracked(
            E::COLLECTION,
            "update",
            store.update_one(E::COLLECTION, &id, changes).await,
        )?;
        if !matched {
            return Err(AppError::not_found(anyhow!("{} not found", E::NAME)));
        }

        Ok(())
    }

    #[instrument(skip(store), fields(collection = E::COLLECTION))]
    pub async fn delete(store: &dyn DocumentStore, id: &str) -> Result<(), AppError> {
        let id = parse_id(id)?;

        let deleted = tracked(
            E::COLLECTION,
            "delete",
            store.delete_one(E::COLLECTION, &id).await,
        )?;
        if !deleted {
            return Err(AppError::not_found(anyhow!("{} not found", E::NAME)));
        }

        Ok(())
    }
}
