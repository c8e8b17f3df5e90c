//! Documents, filters, and find options shared by every store backend.

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::object_id::ObjectId;

/// A schemaless document body: field name to JSON value.
pub type Document = Map<String, Value>;

/// Key under which the identifier is exposed in API documents.
pub const ID_KEY: &str = "_id";
pub const CREATED_AT_KEY: &str = "created_at";
pub const UPDATED_AT_KEY: &str = "updated_at";

/// A document as held by the store, with its identifier kept apart from the
/// body.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: ObjectId,
    pub body: Document,
}

impl StoredDocument {
    /// Renders the document for the API: the body plus the identifier in
    /// string form under [`ID_KEY`].
    pub fn into_document(self) -> Document {
        let mut document = self.body;
        document.insert(ID_KEY.to_string(), Value::String(self.id.to_hex()));
        document
    }

    /// The `created_at` stamp, if the document carries one as a string.
    pub fn created_at(&self) -> Option<&str> {
        self.body.get(CREATED_AT_KEY).and_then(Value::as_str)
    }
}

/// Case-insensitive substring match across a set of fields (logical OR).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSearch {
    pub fields: Vec<String>,
    pub needle: String,
}

impl TextSearch {
    /// Matches string-valued fields only, like a pattern query would.
    pub fn matches(&self, body: &Document) -> bool {
        let needle = self.needle.to_lowercase();
        self.fields.iter().any(|field| {
            body.get(field)
                .and_then(Value::as_str)
                .is_some_and(|value| value.to_lowercase().contains(&needle))
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub search: Option<TextSearch>,
}

impl Filter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn text_search<S>(fields: &[S], needle: &str) -> Self
    where
        S: AsRef<str>,
    {
        Self {
            search: Some(TextSearch {
                fields: fields.iter().map(|f| f.as_ref().to_string()).collect(),
                needle: needle.to_string(),
            }),
        }
    }

    pub fn matches(&self, body: &Document) -> bool {
        self.search
            .as_ref()
            .is_none_or(|search| search.matches(body))
    }
}

/// Window over the ordered result set. Results are always ordered by
/// `created_at` descending; documents without a `created_at` come last and
/// ties are broken by identifier, descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindOptions {
    pub skip: u64,
    pub limit: Option<u64>,
}

impl FindOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = skip;
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Current time in the fixed-width form used for `created_at` and
/// `updated_at`, so that string comparison matches time order.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn stamp_insert(body: &mut Document) {
    let now = timestamp_now();
    body.insert(CREATED_AT_KEY.to_string(), Value::String(now.clone()));
    body.insert(UPDATED_AT_KEY.to_string(), Value::String(now));
}

pub(crate) fn stamp_update(changes: &mut Document) {
    changes.insert(UPDATED_AT_KEY.to_string(), Value::String(timestamp_now()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_into_document_adds_string_id() {
        let id: ObjectId = "65a1b2c3d4e5f60718293a4b".parse().unwrap();
        let stored = StoredDocument {
            id,
            body: body(json!({"name": "Grade 10 - A"})),
        };
        let document = stored.into_document();
        assert_eq!(document["_id"], "65a1b2c3d4e5f60718293a4b");
        assert_eq!(document["name"], "Grade 10 - A");
    }

    #[test]
    fn test_text_search_is_case_insensitive_substring() {
        let filter = Filter::text_search(&["first_name", "last_name"], "DO");
        assert!(filter.matches(&body(json!({"first_name": "Jane", "last_name": "Doe"}))));
        assert!(!filter.matches(&body(json!({"first_name": "Jane", "last_name": "Smith"}))));
    }

    #[test]
    fn test_text_search_ignores_non_string_fields() {
        let filter = Filter::text_search(&["year"], "2024");
        assert!(!filter.matches(&body(json!({"year": 2024}))));
    }

    #[test]
    fn test_text_search_without_fields_matches_nothing() {
        let filter = Filter::text_search::<&str>(&[], "a");
        assert!(!filter.matches(&body(json!({"name": "a"}))));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(Filter::all().matches(&Document::new()));
    }

    #[test]
    fn test_timestamps_sort_lexicographically() {
        let first = timestamp_now();
        let second = timestamp_now();
        assert!(first <= second);
        assert!(first.ends_with('Z'));
        assert_eq!(first.len(), "2025-01-01T00:00:00.000000Z".len());
    }

    #[test]
    fn test_stamp_insert_sets_both_timestamps() {
        let mut document = Document::new();
        stamp_insert(&mut document);
        assert_eq!(document[CREATED_AT_KEY], document[UPDATED_AT_KEY]);
    }
}
