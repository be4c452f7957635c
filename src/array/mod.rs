//! Array helpers.
//!
//! Small, allocation-conscious helpers over `Vec` and slices:
//!
//! - [`to_array`]: normalise "nothing, one or many" into a `Vec`
//! - [`flatten`] / [`merge_arrays`]: concatenation helpers
//! - [`partition`]: split by a list of predicates
//! - [`uniq`] / [`uniq_by`]: remove duplicates, keeping first occurrences
//! - [`last`] / [`at`] / [`remove`] / [`move_item`] / [`clamp_array_range`]
//! - [`range`] / [`range_from`] / [`range_step`]: integer ranges
//!
//! # Examples
//!
//! ```rust
//! use tidbits::array::{at, partition, uniq};
//!
//! assert_eq!(uniq(vec![1, 1, 2, 3, 2]), vec![1, 2, 3]);
//! assert_eq!(at(&[1, 2, 3], -1), Some(&3));
//!
//! let groups = partition(vec![1, 2, 3, 4], &[&|n: &i32, _| n % 2 == 1]);
//! assert_eq!(groups, vec![vec![1, 3], vec![2, 4]]);
//! ```

mod collection;
mod error;
mod range;

pub use collection::{
    IntoArray, at, clamp_array_range, flatten, last, merge_arrays, move_item, partition, remove,
    to_array, uniq, uniq_by,
};
pub use error::ArrayError;
pub use range::{range, range_from, range_step};
