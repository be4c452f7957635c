//! Object helpers over JSON objects.
//!
//! Objects are represented as [`serde_json::Map`] and values as
//! [`serde_json::Value`], so the helpers work on any data that round-trips
//! through JSON.
//!
//! - [`deep_merge`] / [`deep_merge_with_array`]: recursive merging
//! - [`object_pick`] / [`object_map`] / [`clear_null`]: reshaping
//! - [`object_keys`] / [`object_entries`] / [`has_own_property`] / [`is_key_of`]
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use tidbits::object::deep_merge;
//!
//! let merged = deep_merge(
//!     json!({ "a": { "x": 1 }, "list": [1] }),
//!     [json!({ "a": { "y": 2 }, "list": [2] })],
//! );
//! assert_eq!(merged, json!({ "a": { "x": 1, "y": 2 }, "list": [2] }));
//! ```

mod merge;
mod shape;

pub use merge::{deep_merge, deep_merge_with_array, is_mergeable_object};
pub use shape::{
    clear_null, has_own_property, is_key_of, object_entries, object_keys, object_map, object_pick,
};
