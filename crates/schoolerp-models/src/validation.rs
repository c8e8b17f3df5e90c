//! Custom field validators used by `#[validate(custom(...))]`.

use chrono::NaiveTime;
use validator::ValidationError;

/// Accepts a 24h `HH:MM` time.
pub fn validate_time_of_day(value: &str) -> Result<(), ValidationError> {
    let well_formed = value.len() == 5 && NaiveTime::parse_from_str(value, "%H:%M").is_ok();
    if well_formed {
        return Ok(());
    }

    let mut error = ValidationError::new("time_of_day");
    error.message = Some(format!("{value} is not a 24h HH:MM time").into());
    Err(error)
}

/// Accepts `all`, `students`, `teachers`, or `class:<id>`.
pub fn validate_audience(value: &str) -> Result<(), ValidationError> {
    let valid = match value {
        "all" | "students" | "teachers" => true,
        other => other
            .strip_prefix("class:")
            .is_some_and(|class_id| !class_id.trim().is_empty()),
    };
    if valid {
        return Ok(());
    }

    let mut error = ValidationError::new("audience");
    error.message = Some("audience must be all, students, teachers, or class:<id>".into());
    Err(error)
}
