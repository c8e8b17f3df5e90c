use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRef, FromRequest, Request, rejection::JsonRejection},
};
use schoolerp_config::{SchemaConfig, UnknownFields};
use schoolerp_core::AppError;
use schoolerp_models::Schema;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

fn format_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| format!("{field}: {msg}"))
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn reject_body(rejection: JsonRejection) -> AppError {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::bad_request(anyhow!(
            "Missing 'Content-Type: application/json' header"
        ));
    }

    AppError::bad_request(anyhow!("Invalid request body: {}", rejection.body_text()))
}

fn reject_decode(error: serde_json::Error) -> AppError {
    let message = error.to_string();

    if let Some(field) = message
        .split("missing field `")
        .nth(1)
        .and_then(|s| s.split('`').next())
    {
        return AppError::unprocessable(anyhow!("{} is required", field));
    }

    AppError::unprocessable(anyhow!("Invalid request body: {}", message))
}

fn unknown_fields<T: Schema>(fields: &Map<String, Value>) -> Vec<&str> {
    fields
        .keys()
        .map(String::as_str)
        .filter(|key| !T::declares(key))
        .collect()
}

/// JSON body decoded against an entity schema and validated.
///
/// Undeclared fields are dropped or rejected according to
/// [`SchemaConfig::unknown_fields`]. Malformed JSON is a 400; anything that
/// parses but does not fit the schema is a 422.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: Schema + DeserializeOwned + Validate,
    S: Send + Sync,
    SchemaConfig: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(reject_body)?;

        let Value::Object(fields) = body else {
            return Err(AppError::unprocessable(anyhow!(
                "Request body must be a JSON object"
            )));
        };

        if SchemaConfig::from_ref(state).unknown_fields == UnknownFields::Reject {
            let unknown = unknown_fields::<T>(&fields);
            if !unknown.is_empty() {
                return Err(AppError::unprocessable(anyhow!(
                    "Unknown field(s) for {}: {}",
                    T::NAME,
                    unknown.join(", ")
                )));
            }
        }

        let value: T = serde_json::from_value(Value::Object(fields)).map_err(reject_decode)?;

        value
            .validate()
            .map_err(|errors| AppError::unprocessable(anyhow!("{}", format_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}
