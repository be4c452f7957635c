//! Reshaping and inspecting JSON objects.

use serde_json::{Map, Value};

/// Maps every entry through `transform`, dropping entries for which it returns
/// `None`.
///
/// # Examples
///
/// ```rust
/// use serde_json::{json, Value};
/// use tidbits::object::object_map;
///
/// let Value::Object(prices) = json!({ "apple": 1, "pear": 2 }) else { unreachable!() };
/// let doubled = object_map(prices, |key, value| {
///     if key == "pear" {
///         return None;
///     }
///     Some((key.to_uppercase(), json!(value.as_i64()? * 2)))
/// });
/// assert_eq!(Value::Object(doubled), json!({ "APPLE": 2 }));
/// ```
pub fn object_map<F>(object: Map<String, Value>, mut transform: F) -> Map<String, Value>
where
    F: FnMut(String, Value) -> Option<(String, Value)>,
{
    object
        .into_iter()
        .filter_map(|(key, value)| transform(key, value))
        .collect()
}

/// Returns `true` if `key` is a key of `object`.
#[must_use]
pub fn is_key_of(object: &Map<String, Value>, key: &str) -> bool {
    object.contains_key(key)
}

/// Same as [`is_key_of`]; mirrors the name used for the own-property check.
#[must_use]
pub fn has_own_property(object: &Map<String, Value>, key: &str) -> bool {
    is_key_of(object, key)
}

/// Returns the keys of `object`.
#[must_use]
pub fn object_keys(object: &Map<String, Value>) -> Vec<&str> {
    object.keys().map(String::as_str).collect()
}

/// Returns the entries of `object`.
#[must_use]
pub fn object_entries(object: &Map<String, Value>) -> Vec<(&str, &Value)> {
    object
        .iter()
        .map(|(key, value)| (key.as_str(), value))
        .collect()
}

/// Returns a new object with only the listed keys, in the order of `keys`.
///
/// Missing keys are skipped. With `omit_null`, keys whose value is `null` are
/// skipped as well.
pub fn object_pick<'a, I>(object: &Map<String, Value>, keys: I, omit_null: bool) -> Map<String, Value>
where
    I: IntoIterator<Item = &'a str>,
{
    keys.into_iter()
        .filter_map(|key| {
            let value = object.get(key)?;
            (!(omit_null && value.is_null())).then(|| (key.to_string(), value.clone()))
        })
        .collect()
}

/// Removes every `null`-valued key from `object`, in place.
pub fn clear_null(object: &mut Map<String, Value>) {
    object.retain(|_, value| !value.is_null());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn sample() -> Map<String, Value> {
        match json!({ "a": 1, "b": null, "c": "three" }) {
            Value::Object(object) => object,
            _ => unreachable!(),
        }
    }

    #[rstest]
    fn object_map_renames_and_drops(sample: Map<String, Value>) {
        let mapped = object_map(sample, |key, value| {
            (!value.is_null()).then(|| (format!("_{key}"), value))
        });
        assert_eq!(Value::Object(mapped), json!({ "_a": 1, "_c": "three" }));
    }

    #[rstest]
    fn object_map_drops_entries_that_fail_conversion(sample: Map<String, Value>) {
        let doubled = object_map(sample, |key, value| {
            if key == "c" {
                return None;
            }
            Some((key, json!(value.as_i64()? * 2)))
        });
        assert_eq!(Value::Object(doubled), json!({ "a": 2 }));
    }

    #[rstest]
    fn key_checks(sample: Map<String, Value>) {
        assert!(is_key_of(&sample, "a"));
        assert!(has_own_property(&sample, "b"));
        assert!(!is_key_of(&sample, "z"));
    }

    #[rstest]
    fn keys_and_entries(sample: Map<String, Value>) {
        let mut keys = object_keys(&sample);
        keys.sort_unstable();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert!(object_entries(&sample).contains(&("a", &json!(1))));
    }

    #[rstest]
    #[case(false, json!({ "b": null, "a": 1 }))]
    #[case(true, json!({ "a": 1 }))]
    fn object_pick_cases(sample: Map<String, Value>, #[case] omit_null: bool, #[case] expected: Value) {
        let picked = object_pick(&sample, ["b", "a", "missing"], omit_null);
        assert_eq!(Value::Object(picked), expected);
    }

    #[rstest]
    fn clear_null_removes_null_values(mut sample: Map<String, Value>) {
        clear_null(&mut sample);
        assert_eq!(Value::Object(sample), json!({ "a": 1, "c": "three" }));
    }
}
