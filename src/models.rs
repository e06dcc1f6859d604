use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

use crate::error::AppError;

/// Error half of the response envelope shared by every endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Decodes and validates a JSON request body.
///
/// The body is read as raw bytes so callers that omit `Content-Type` are still
/// served. Bodies that are not JSON, or are `null`, fail as internal errors.
/// Any other non-object body has no fields, so it fails field validation
/// instead of being matched to fields by position.
pub fn parse_body<T>(body: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::InternalError(format!("Invalid request body: {}", e)))?;

    let fields = match value {
        Value::Object(fields) => fields,
        Value::Null => {
            return Err(AppError::InternalError(
                "Invalid request body: expected a JSON object, found null".into(),
            ))
        }
        _ => Map::new(),
    };

    let request: T = serde_json::from_value(Value::Object(fields))
        .map_err(|e| AppError::InternalError(format!("Invalid request body: {}", e)))?;

    request.validate()?;

    Ok(request)
}

/// Accepts any JSON array. Elements are left for the upstream to judge.
pub fn validate_sequence(value: &Value) -> Result<(), ValidationError> {
    if value.is_array() {
        Ok(())
    } else {
        Err(ValidationError::new("sequence"))
    }
}

/// Renders a JSON value as prompt or query text: strings verbatim, `null` as
/// nothing, everything else as its JSON text. Arrays keep their brackets and a
/// missing value renders empty, unlike JavaScript string coercion.
pub fn value_as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// JavaScript-style truthiness: empty strings, zero, `false` and `null` are
/// falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}
