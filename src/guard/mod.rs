//! Guards for optional values and JSON values.
//!
//! The presence guards ([`is_def`], [`not_nullish`], [`not_null`]) and
//! [`is_truthy`] accept both [`Option`] and [`serde_json::Value`] through the
//! [`Nullish`] and [`Truthy`] traits. The JSON type predicates work on
//! [`serde_json::Value`] only.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use tidbits::guard::{is_def, is_truthy, get_type_name};
//!
//! assert!(is_def(&Some(0)));
//! assert!(!is_def(&json!(null)));
//! assert!(!is_truthy(&json!("")));
//! assert!(is_truthy(&Some(json!([]))));
//! assert_eq!(get_type_name(&json!({ "a": 1 })), "object");
//! ```

mod json;
mod traits;

pub use json::{get_type_name, is_array, is_boolean, is_null, is_number, is_object, is_string};
pub use traits::{Nullish, Truthy};

/// Returns `true` if `value` holds something.
#[must_use]
pub fn is_def<T: Nullish + ?Sized>(value: &T) -> bool {
    !value.is_nullish()
}

/// Alias of [`is_def`], named for use as a filter predicate.
#[must_use]
pub fn not_nullish<T: Nullish + ?Sized>(value: &T) -> bool {
    !value.is_nullish()
}

/// Alias of [`is_def`]; Rust has a single notion of absence.
#[must_use]
pub fn not_null<T: Nullish + ?Sized>(value: &T) -> bool {
    !value.is_nullish()
}

/// Returns `true` if `value` is truthy.
///
/// `None`, `null`, `false`, zero, `NaN` and the empty string are falsy.
/// Everything else, including empty arrays and objects, is truthy.
#[must_use]
pub fn is_truthy<T: Truthy + ?Sized>(value: &T) -> bool {
    value.is_truthy()
}
