//! Structural equality for JSON values.
//!
//! [`is_deep_equal`] differs from `==` on [`serde_json::Value`] in how numbers
//! compare: `1` and `1.0` are equal because they denote the same value.

use serde_json::{Number, Value};

/// Returns `true` if `left` and `right` are structurally equal.
///
/// - Numbers compare by numeric value.
/// - Objects compare key sets and values, ignoring key order.
/// - Arrays compare element-wise, in order.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use tidbits::equal::is_deep_equal;
///
/// assert!(is_deep_equal(&json!({ "a": [1, 2.0] }), &json!({ "a": [1.0, 2] })));
/// assert!(!is_deep_equal(&json!([1, 2]), &json!([2, 1])));
/// ```
#[must_use]
pub fn is_deep_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => numbers_equal(left, right),
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right)
                    .all(|(left, right)| is_deep_equal(left, right))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left.iter().all(|(key, value)| {
                    right
                        .get(key)
                        .is_some_and(|other| is_deep_equal(value, other))
                })
        }
        _ => left == right,
    }
}

#[allow(clippy::float_cmp)]
fn numbers_equal(left: &Number, right: &Number) -> bool {
    if let (Some(left), Some(right)) = (left.as_i64(), right.as_i64()) {
        return left == right;
    }
    if let (Some(left), Some(right)) = (left.as_u64(), right.as_u64()) {
        return left == right;
    }
    match (left.as_f64(), right.as_f64()) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(1), json!(1.0))]
    #[case(json!(null), json!(null))]
    #[case(json!("a"), json!("a"))]
    #[case(json!({ "a": 1, "b": { "c": [true] } }), json!({ "b": { "c": [true] }, "a": 1.0 }))]
    #[case(json!(u64::MAX), json!(u64::MAX))]
    #[case(json!([]), json!([]))]
    fn equal_values(#[case] left: Value, #[case] right: Value) {
        assert!(is_deep_equal(&left, &right));
        assert!(is_deep_equal(&right, &left));
    }

    #[rstest]
    #[case(json!(1), json!(2))]
    #[case(json!(1), json!("1"))]
    #[case(json!(0), json!(false))]
    #[case(json!(null), json!({}))]
    #[case(json!([1]), json!([1, 1]))]
    #[case(json!({ "a": 1 }), json!({ "a": 1, "b": 2 }))]
    #[case(json!({ "a": 1 }), json!({ "b": 1 }))]
    #[case(json!(-1), json!(u64::MAX))]
    fn unequal_values(#[case] left: Value, #[case] right: Value) {
        assert!(!is_deep_equal(&left, &right));
        assert!(!is_deep_equal(&right, &left));
    }
}
