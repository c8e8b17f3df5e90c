use std::env;

/// What to do with request body fields the schema does not declare.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownFields {
    #[default]
    Ignore,
    Reject,
}

impl UnknownFields {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ignore" => Some(Self::Ignore),
            "reject" | "forbid" => Some(Self::Reject),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SchemaConfig {
    pub unknown_fields: UnknownFields,
}

impl SchemaConfig {
    /// Reads `UNKNOWN_FIELDS` (`ignore` or `reject`, default `ignore`).
    pub fn from_env() -> Self {
        let unknown_fields = env::var("UNKNOWN_FIELDS")
            .ok()
            .and_then(|v| UnknownFields::parse(&v))
            .unwrap_or_default();

        Self { unknown_fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unknown_fields() {
        assert_eq!(UnknownFields::parse("ignore"), Some(UnknownFields::Ignore));
        assert_eq!(UnknownFields::parse("REJECT"), Some(UnknownFields::Reject));
        assert_eq!(UnknownFields::parse("forbid"), Some(UnknownFields::Reject));
        assert_eq!(UnknownFields::parse("maybe"), None);
    }
}
