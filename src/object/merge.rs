//! Recursive merging of JSON objects.

use serde_json::Value;

/// Returns `true` for JSON objects, the only values that merge key by key.
#[must_use]
pub const fn is_mergeable_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

#[derive(Clone, Copy)]
enum Arrays {
    Replace,
    Concat,
}

/// Merges `sources` into `target`, left to right.
///
/// Objects merge key by key, recursively. Any other value from a later source
/// replaces the earlier value, arrays included. A non-object source replaces
/// the whole target.
pub fn deep_merge<I>(target: Value, sources: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    sources
        .into_iter()
        .fold(target, |merged, source| merge_value(merged, source, Arrays::Replace))
}

/// Like [`deep_merge`], but arrays found at the same key are concatenated.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use tidbits::object::deep_merge_with_array;
///
/// let merged = deep_merge_with_array(json!({ "tags": ["a"] }), [json!({ "tags": ["b"] })]);
/// assert_eq!(merged, json!({ "tags": ["a", "b"] }));
/// ```
pub fn deep_merge_with_array<I>(target: Value, sources: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    sources
        .into_iter()
        .fold(target, |merged, source| merge_value(merged, source, Arrays::Concat))
}

fn merge_value(target: Value, source: Value, arrays: Arrays) -> Value {
    match (target, source, arrays) {
        (Value::Object(mut target), Value::Object(source), _) => {
            for (key, value) in source {
                let merged = match target.remove(&key) {
                    Some(existing) => merge_value(existing, value, arrays),
                    None => value,
                };
                target.insert(key, merged);
            }
            Value::Object(target)
        }
        (Value::Array(mut target), Value::Array(source), Arrays::Concat) => {
            target.extend(source);
            Value::Array(target)
        }
        (_, source, _) => source,
    }
}
