//! Postgres document store.
//!
//! Every collection lives in a single `documents` table keyed by
//! `(collection, id)` with the body stored as `JSONB`. Partial updates use the
//! JSONB concatenation operator, which replaces exactly the top-level keys
//! present on the right-hand side.

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::str::FromStr;
use tracing::{info, instrument};

use crate::document::{Document, Filter, FindOptions, StoredDocument, stamp_insert, stamp_update};
use crate::object_id::ObjectId;
use crate::store::{DocumentStore, StoreError};

#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Connects to `url` and applies the embedded migrations.
    ///
    /// When `database` is given it replaces the database named in the URL.
    pub async fn connect(
        url: &str,
        database: Option<&str>,
        max_connections: u32,
    ) -> Result<Self, StoreError> {
        let mut options = PgConnectOptions::from_str(url)?;
        if let Some(database) = database {
            options = options.database(database);
        }

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        info!(max_connections, "Postgres document store ready");

        Ok(Self { pool })
    }
}

/// A `created_at` that is not a JSON string sorts with the missing ones.
const CREATED_AT_ORDER: &str = r#" ORDER BY (CASE WHEN jsonb_typeof(body->'created_at') = 'string' THEN body->>'created_at' END) COLLATE "C" DESC NULLS LAST, id DESC"#;

/// Escapes `ILIKE` wildcards so the needle matches literally.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &Filter) {
    let Some(search) = &filter.search else {
        return;
    };

    if search.fields.is_empty() {
        qb.push(" AND FALSE");
        return;
    }

    // Only string values are searched, never numbers or nested values.
    let pattern = format!("%{}%", escape_like(&search.needle));
    qb.push(" AND (");
    let mut clauses = qb.separated(" OR ");
    for field in &search.fields {
        clauses
            .push("(jsonb_typeof(body->")
            .push_bind_unseparated(field.clone())
            .push_unseparated(") = 'string' AND body->>")
            .push_bind_unseparated(field.clone())
            .push_unseparated(" ILIKE ")
            .push_bind_unseparated(pattern.clone())
            .push_unseparated(")");
    }
    qb.push(")");
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn decode_row(
    collection: &str,
    (id, Json(body)): (Vec<u8>, Json<Document>),
) -> Result<StoredDocument, StoreError> {
    let id = ObjectId::try_from(id.as_slice()).map_err(|e| StoreError::Corrupt {
        collection: collection.to_string(),
        reason: e.to_string(),
    })?;
    Ok(StoredDocument { id, body })
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    #[instrument(skip(self, filter))]
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        options: FindOptions,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT id, body FROM documents WHERE collection = ");
        qb.push_bind(collection);
        push_filter(&mut qb, filter);
        qb.push(CREATED_AT_ORDER);
        if let Some(limit) = options.limit {
            qb.push(" LIMIT ").push_bind(to_i64(limit));
        }
        qb.push(" OFFSET ").push_bind(to_i64(options.skip));

        let rows: Vec<(Vec<u8>, Json<Document>)> =
            qb.build_query_as().fetch_all(&self.pool).await?;

        rows.into_iter()
            .map(|row| decode_row(collection, row))
            .collect()
    }

    #[instrument(skip(self, filter))]
    async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError> {
        let mut qb =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM documents WHERE collection = ");
        qb.push_bind(collection);
        push_filter(&mut qb, filter);

        let total: i64 = qb.build_query_scalar().fetch_one(&self.pool).await?;
        Ok(total.max(0) as u64)
    }

    #[instrument(skip(self))]
    async fn find_one(
        &self,
        collection: &str,
        id: &ObjectId,
    ) -> Result<Option<StoredDocument>, StoreError> {
        let body = sqlx::query_scalar::<_, Json<Document>>(
            "SELECT body FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id.bytes().as_slice())
        .fetch_optional(&self.pool)
        .await?;

        Ok(body.map(|Json(body)| StoredDocument { id: *id, body }))
    }

    #[instrument(skip(self, body))]
    async fn insert_one(
        &self,
        collection: &str,
        mut body: Document,
    ) -> Result<ObjectId, StoreError> {
        stamp_insert(&mut body);
        let id = ObjectId::new();

        sqlx::query("INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)")
            .bind(collection)
            .bind(id.bytes().as_slice())
            .bind(Json(&body))
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    #[instrument(skip(self, changes))]
    async fn update_one(
        &self,
        collection: &str,
        id: &ObjectId,
        mut changes: Document,
    ) -> Result<bool, StoreError> {
        stamp_update(&mut changes);

        let result = sqlx::query(
            "UPDATE documents SET body = body || $3 WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id.bytes().as_slice())
        .bind(Json(&changes))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_one(&self, collection: &str, id: &ObjectId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id.bytes().as_slice())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT collection FROM documents ORDER BY collection",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("100%"), r"100\%");
        assert_eq!(escape_like("a_b"), r"a\_b");
        assert_eq!(escape_like(r"c:\d"), r"c:\\d");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_push_filter_builds_or_clause() {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT 1 FROM documents WHERE collection = ");
        qb.push_bind("student");
        push_filter(
            &mut qb,
            &Filter::text_search(&["first_name", "last_name"], "jane"),
        );

        assert_eq!(
            qb.sql(),
            "SELECT 1 FROM documents WHERE collection = $1 AND \
             ((jsonb_typeof(body->$2) = 'string' AND body->>$3 ILIKE $4) OR \
             (jsonb_typeof(body->$5) = 'string' AND body->>$6 ILIKE $7))"
        );
    }

    #[test]
    fn test_order_ignores_non_string_created_at() {
        assert!(CREATED_AT_ORDER.contains("jsonb_typeof(body->'created_at') = 'string'"));
        assert!(CREATED_AT_ORDER.ends_with("DESC NULLS LAST, id DESC"));
    }

    #[test]
    fn test_push_filter_without_fields() {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT 1 WHERE TRUE");
        push_filter(&mut qb, &Filter::text_search::<&str>(&[], "x"));
        assert_eq!(qb.sql(), "SELECT 1 WHERE TRUE AND FALSE");
    }

    #[test]
    fn test_push_filter_empty_filter_is_noop() {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT 1 WHERE TRUE");
        push_filter(&mut qb, &Filter::all());
        assert_eq!(qb.sql(), "SELECT 1 WHERE TRUE");
    }
}
