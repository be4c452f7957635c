//! JSON type inspection.

use serde_json::Value;

/// Returns the JSON type name of `value`.
///
/// One of `"null"`, `"boolean"`, `"number"`, `"string"`, `"array"` or
/// `"object"`.
#[must_use]
pub const fn get_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns `true` if `value` is a JSON string.
#[must_use]
pub const fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// Returns `true` if `value` is a JSON number.
#[must_use]
pub const fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

/// Returns `true` if `value` is `true` or `false`.
#[must_use]
pub const fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

/// Returns `true` if `value` is a JSON object.
#[must_use]
pub const fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Returns `true` if `value` is a JSON array.
#[must_use]
pub const fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Returns `true` if `value` is `null`.
#[must_use]
pub const fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}
