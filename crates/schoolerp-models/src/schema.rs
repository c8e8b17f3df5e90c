//! Field declarations and the traits tying entity types to collections.
//!
//! Each entity type declares its fields once, as a `const` slice of
//! [`FieldSpec`]. The declarations drive unknown-field checks during request
//! decoding and are served verbatim by `GET /schema`.

use serde::ser::{Error as _, SerializeSeq};
use serde::{Serialize, Serializer, de::DeserializeOwned};
use serde_json::{Map, Value};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    String,
    Email,
    Date,
    DateTime,
    /// 24h `HH:MM`
    Time,
    Integer,
    Float,
    StringList,
    Enum { values: &'static [&'static str] },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Str(&'static str),
    Int(i64),
    EmptyList,
}

impl Serialize for DefaultValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DefaultValue::Str(value) => serializer.serialize_str(value),
            DefaultValue::Int(value) => serializer.serialize_i64(*value),
            DefaultValue::EmptyList => serializer.serialize_seq(Some(0))?.end(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
            description: None,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: None,
            description: None,
        }
    }

    pub const fn defaulted(name: &'static str, kind: FieldKind, default: DefaultValue) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: Some(default),
            description: None,
        }
    }

    pub const fn describe(self, description: &'static str) -> Self {
        Self {
            description: Some(description),
            ..self
        }
    }
}

/// A declared data shape.
pub trait Schema {
    /// Entity kind name, e.g. `Student`.
    const NAME: &'static str;
    /// Collection holding documents of this kind (lowercased kind name).
    const COLLECTION: &'static str;
    const FIELDS: &'static [FieldSpec];

    fn declares(field: &str) -> bool {
        Self::FIELDS.iter().any(|spec| spec.name == field)
    }
}

/// An entity kind exposed through the CRUD routes.
pub trait Entity:
    Schema + Validate + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Path segment of the resource family, e.g. `students`.
    const RESOURCE: &'static str;
    /// Fields matched by the `q` list parameter.
    const SEARCH_FIELDS: &'static [&'static str];

    /// Partial-update shape: every field optional, absent fields untouched.
    type Patch: Schema + Validate + Serialize + DeserializeOwned + Send + Sync + 'static;
}

/// Implements [`Schema`] for a patch type by borrowing its entity's
/// declarations.
macro_rules! patch_of {
    ($patch:ty => $entity:ty) => {
        impl $crate::schema::Schema for $patch {
            const NAME: &'static str = <$entity as $crate::schema::Schema>::NAME;
            const COLLECTION: &'static str = <$entity as $crate::schema::Schema>::COLLECTION;
            const FIELDS: &'static [$crate::schema::FieldSpec] =
                <$entity as $crate::schema::Schema>::FIELDS;
        }
    };
}

pub(crate) use patch_of;

/// Serializes a schema value into a document body.
///
/// Optional fields left unset are omitted; declared defaults are present
/// because deserialization already filled them in.
pub fn to_document<T>(value: &T) -> Result<Map<String, Value>, serde_json::Error>
where
    T: Serialize,
{
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(serde_json::Error::custom(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_spec_serialization() {
        let spec = FieldSpec::defaulted(
            "status",
            FieldKind::Enum {
                values: &["active", "inactive"],
            },
            DefaultValue::Str("active"),
        )
        .describe("Employment status");

        assert_eq!(
            serde_json::to_value(spec).unwrap(),
            json!({
                "name": "status",
                "type": {"type": "enum", "values": ["active", "inactive"]},
                "required": false,
                "default": "active",
                "description": "Employment status"
            })
        );
    }

    #[test]
    fn test_default_value_serialization() {
        assert_eq!(serde_json::to_value(DefaultValue::Int(100)).unwrap(), json!(100));
        assert_eq!(serde_json::to_value(DefaultValue::EmptyList).unwrap(), json!([]));
    }

    #[test]
    fn test_to_document_rejects_non_objects() {
        assert!(to_document(&vec![1, 2]).is_err());
        assert!(to_document(&json!({"a": 1})).is_ok());
    }
}
