use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::schema::{DefaultValue, FieldKind, FieldSpec, Schema};
use crate::validation::validate_audience;

fn default_audience() -> String {
    "all".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Announcement {
    pub title: String,
    pub body: String,
    /// `all`, `students`, `teachers`, or `class:<id>`
    #[validate(custom(function = "validate_audience"))]
    #[serde(default = "default_audience")]
    pub audience: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
}

impl Schema for Announcement {
    const NAME: &'static str = "Announcement";
    const COLLECTION: &'static str = "announcement";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", FieldKind::String),
        FieldSpec::required("body", FieldKind::String),
        FieldSpec::defaulted("audience", FieldKind::String, DefaultValue::Str("all"))
            .describe("all, students, teachers, or class:<id>"),
        FieldSpec::optional("published_at", FieldKind::DateTime),
        FieldSpec::optional("author_id", FieldKind::String),
    ];
}
