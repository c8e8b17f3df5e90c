//! List query parameters and response shapes.
//!
//! Every collection endpoint accepts the same query parameters:
//!
//! - `q`: keyword matched case-insensitively against the resource's
//!   searchable fields
//! - `limit`: maximum number of documents in a flat listing (default: 50)
//! - `page` / `page_size`: page-based listing (1-indexed pages)
//!
//! When both `page` and `page_size` are present the response is a
//! [`ListResponse::Paged`] object carrying the total match count. Otherwise
//! it is a flat array truncated to `limit`.
//!
//! # Example
//!
//! ```ignore
//! async fn list_students(
//!     Query(params): Query<ListParams>,
//! ) -> Result<Json<ListResponse<Document>>, AppError> {
//!     match params.page_window() {
//!         Some((skip, size)) => { /* count + page slice */ }
//!         None => { /* first `params.limit()` documents */ }
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::serde::{deserialize_optional_i64, deserialize_optional_string};

pub const DEFAULT_LIMIT: i64 = 50;
pub const MAX_LIMIT: i64 = 1000;

#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Maximum number of documents in a flat listing
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
    /// Case-insensitive keyword matched against the searchable fields
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub q: Option<String>,
    /// 1-indexed page number, only used together with `page_size`
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    /// Page size, only used together with `page`
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page_size: Option<i64>,
}

impl ListParams {
    pub fn limit(&self) -> u64 {
        clamp_size(self.limit.unwrap_or(DEFAULT_LIMIT))
    }

    /// Returns `(skip, page_size)` when page-based listing was requested.
    ///
    /// The skip saturates instead of overflowing on absurd page numbers.
    pub fn page_window(&self) -> Option<(u64, u64)> {
        let (page, page_size) = (self.page?, self.page_size?);
        let page_size = clamp_size(page_size);
        let pages_before = u64::try_from(page.saturating_sub(1)).unwrap_or(0);
        Some((pages_before.saturating_mul(page_size), page_size))
    }

    /// The search keyword with surrounding whitespace removed, or `None`
    /// when it is blank.
    pub fn search_text(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

fn clamp_size(value: i64) -> u64 {
    value.clamp(1, MAX_LIMIT).unsigned_abs()
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Flat(Vec<T>),
    Paged { items: Vec<T>, total: i64 },
}

impl<T> ListResponse<T> {
    pub fn len(&self) -> usize {
        match self {
            ListResponse::Flat(items) => items.len(),
            ListResponse::Paged { items, .. } => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_default() {
        let params = ListParams::default();
        assert_eq!(params.limit(), 50);
        assert_eq!(params.page_window(), None);
        assert_eq!(params.search_text(), None);
    }

    #[test]
    fn test_limit_boundaries() {
        let test_cases = vec![
            (Some(1), 1),
            (Some(50), 50),
            (Some(1000), 1000),
            (Some(1001), 1000),
            (Some(0), 1),
            (Some(-1), 1),
            (None, 50),
        ];

        for (input, expected) in test_cases {
            let params = ListParams {
                limit: input,
                ..Default::default()
            };
            assert_eq!(params.limit(), expected);
        }
    }

    #[test]
    fn test_page_window_first_page() {
        let params = ListParams {
            page: Some(1),
            page_size: Some(20),
            ..Default::default()
        };
        assert_eq!(params.page_window(), Some((0, 20)));
    }

    #[test]
    fn test_page_window_third_page() {
        let params = ListParams {
            page: Some(3),
            page_size: Some(10),
            ..Default::default()
        };
        assert_eq!(params.page_window(), Some((20, 10)));
    }

    #[test]
    fn test_page_window_requires_both_values() {
        let only_page = ListParams {
            page: Some(2),
            ..Default::default()
        };
        assert_eq!(only_page.page_window(), None);

        let only_size = ListParams {
            page_size: Some(5),
            ..Default::default()
        };
        assert_eq!(only_size.page_window(), None);
    }

    #[test]
    fn test_page_window_clamps_values() {
        let params = ListParams {
            page: Some(0),
            page_size: Some(-3),
            ..Default::default()
        };
        assert_eq!(params.page_window(), Some((0, 1)));
    }

    #[test]
    fn test_page_window_huge_page_saturates() {
        let params = ListParams {
            page: Some(i64::MAX),
            page_size: Some(1000),
            ..Default::default()
        };
        assert_eq!(params.page_window(), Some((u64::MAX, 1000)));

        let params = ListParams {
            page: Some(i64::MIN),
            page_size: Some(i64::MAX),
            ..Default::default()
        };
        assert_eq!(params.page_window(), Some((0, 1000)));
    }

    #[test]
    fn test_search_text_is_trimmed() {
        let params = ListParams {
            q: Some("  doe ".to_string()),
            ..Default::default()
        };
        assert_eq!(params.search_text(), Some("doe"));
    }

    #[test]
    fn test_deserialize_query_strings() {
        let json = r#"{"limit":"25","q":"doe","page":"2","page_size":"10"}"#;
        let params: ListParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.limit(), 25);
        assert_eq!(params.search_text(), Some("doe"));
        assert_eq!(params.page_window(), Some((10, 10)));
    }

    #[test]
    fn test_deserialize_empty_strings() {
        let json = r#"{"limit":"","q":"  ","page":"","page_size":""}"#;
        let params: ListParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.limit(), 50);
        assert_eq!(params.search_text(), None);
        assert_eq!(params.page_window(), None);
    }

    #[test]
    fn test_deserialize_rejects_non_numeric_limit() {
        let json = r#"{"limit":"ten"}"#;
        assert!(serde_json::from_str::<ListParams>(json).is_err());
    }

    #[test]
    fn test_list_response_serialize_flat() {
        let response = ListResponse::Flat(vec![1, 2, 3]);
        assert_eq!(serde_json::to_string(&response).unwrap(), "[1,2,3]");
        assert_eq!(response.len(), 3);
    }

    #[test]
    fn test_list_response_serialize_paged() {
        let response = ListResponse::Paged {
            items: vec!["a"],
            total: 7,
        };
        let serialized = serde_json::to_string(&response).unwrap();
        assert!(serialized.contains(r#""items":["a"]"#));
        assert!(serialized.contains(r#""total":7"#));
        assert!(!response.is_empty());
    }
}
