//! Shape validation for the raw config document.

use serde_json::Value;

use super::Config;
use crate::error::{GatorError, Result};

/// Turn a parsed JSON document into a [`Config`], rejecting bad shapes.
///
/// - `db_url` must be present and a non-empty string.
/// - `current_user_name` may be absent, `null`, or a string. Anything else is
///   rejected rather than coerced to "no user".
/// - Unknown keys are ignored.
pub fn validate_config(raw: &Value) -> Result<Config> {
    let Some(object) = raw.as_object() else {
        return Err(GatorError::ConfigValidation(
            "invalid config: expected a JSON object".to_string(),
        ));
    };

    let db_url = match object.get("db_url") {
        Some(Value::String(url)) if !url.trim().is_empty() => url.clone(),
        Some(Value::String(_)) => {
            return Err(GatorError::ConfigValidation(
                "invalid url: db_url must not be empty".to_string(),
            ))
        }
        _ => {
            return Err(GatorError::ConfigValidation(
                "invalid url: db_url must be a string".to_string(),
            ))
        }
    };

    let current_user_name = match object.get("current_user_name") {
        None | Some(Value::Null) => None,
        Some(Value::String(name)) => Some(name.clone()),
        Some(other) => {
            return Err(GatorError::ConfigValidation(format!(
                "invalid current_user_name: expected a string or null, got {}",
                json_type_name(other)
            )))
        }
    };

    Ok(Config {
        db_url,
        current_user_name,
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
