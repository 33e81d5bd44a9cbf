//! Validation and normalization of inbound stadium payloads.
//!
//! Every rule runs independently so a single response can report all of the
//! offending fields at once.

use crate::domain::stadium::{CreateStadiumRequest, MAX_CAPACITY, MAX_TEXT_LEN};
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use utoipa::ToSchema;

/// A single violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// All rule violations found in one payload (never empty).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed for {} field(s)", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns true if any error was reported for `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

/// Validates an untrusted JSON payload and returns the normalized request.
///
/// Unknown keys are ignored. `name` is trimmed; `capacity` defaults to 0 when
/// omitted or `null`.
pub fn validate_create_payload(payload: &JsonValue) -> Result<CreateStadiumRequest, ValidationErrors> {
    let Some(obj) = payload.as_object() else {
        return Err(ValidationErrors(vec![FieldError::new(
            "body",
            "expected a JSON object",
        )]));
    };

    let mut errors = Vec::new();

    let name = string_field(obj, "name", &mut errors).and_then(|v| check_text("name", v, true, &mut errors));
    let sport = string_field(obj, "sport", &mut errors).and_then(|v| check_text("sport", v, false, &mut errors));
    let city = string_field(obj, "city", &mut errors).and_then(|v| check_text("city", v, false, &mut errors));
    let state = string_field(obj, "state", &mut errors).and_then(|v| check_text("state", v, false, &mut errors));
    let capacity = capacity_field(obj, &mut errors).and_then(|v| check_capacity(v, &mut errors));

    finish(name, sport, city, state, capacity, errors)
}

impl CreateStadiumRequest {
    /// Validates typed values with the same rules as
    /// [`validate_create_payload`]. `None` capacity means 0.
    pub fn new(
        name: &str,
        sport: &str,
        city: &str,
        state: &str,
        capacity: Option<i64>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = Vec::new();

        let name = check_text("name", name, true, &mut errors);
        let sport = check_text("sport", sport, false, &mut errors);
        let city = check_text("city", city, false, &mut errors);
        let state = check_text("state", state, false, &mut errors);
        let capacity = check_capacity(capacity, &mut errors);

        finish(name, sport, city, state, capacity, errors)
    }
}

fn finish(
    name: Option<String>,
    sport: Option<String>,
    city: Option<String>,
    state: Option<String>,
    capacity: Option<i32>,
    errors: Vec<FieldError>,
) -> Result<CreateStadiumRequest, ValidationErrors> {
    match (name, sport, city, state, capacity) {
        (Some(name), Some(sport), Some(city), Some(state), Some(capacity)) if errors.is_empty() => Ok(
            CreateStadiumRequest::from_validated(name, sport, city, state, capacity),
        ),
        _ => Err(ValidationErrors(errors)),
    }
}

fn string_field<'a>(
    obj: &'a Map<String, JsonValue>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    match obj.get(field) {
        None | Some(JsonValue::Null) => {
            errors.push(FieldError::new(field, "field is required"));
            None
        }
        Some(JsonValue::String(s)) => Some(s),
        Some(_) => {
            errors.push(FieldError::new(field, "must be a string"));
            None
        }
    }
}

/// `Some(None)` when absent or `null`; `None` after recording a type error.
fn capacity_field(obj: &Map<String, JsonValue>, errors: &mut Vec<FieldError>) -> Option<Option<i64>> {
    let value = match obj.get("capacity") {
        None | Some(JsonValue::Null) => return Some(None),
        Some(v) => v,
    };

    if let Some(n) = value.as_i64() {
        Some(Some(n))
    } else if value.is_u64() {
        errors.push(out_of_range());
        None
    } else {
        errors.push(FieldError::new("capacity", "must be an integer"));
        None
    }
}

fn check_text(field: &str, raw: &str, trim: bool, errors: &mut Vec<FieldError>) -> Option<String> {
    let value = if trim { raw.trim() } else { raw };
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "must not be blank"));
        return None;
    }
    if value.chars().count() > MAX_TEXT_LEN {
        errors.push(FieldError::new(
            field,
            format!("must be at most {} characters", MAX_TEXT_LEN),
        ));
        return None;
    }
    Some(value.to_string())
}

fn check_capacity(capacity: Option<i64>, errors: &mut Vec<FieldError>) -> Option<i32> {
    let Some(n) = capacity else {
        return Some(0);
    };
    match i32::try_from(n) {
        Ok(n) if (0..=MAX_CAPACITY).contains(&n) => Some(n),
        _ => {
            errors.push(out_of_range());
            None
        }
    }
}

fn out_of_range() -> FieldError {
    FieldError::new("capacity", format!("must be between 0 and {}", MAX_CAPACITY))
}
