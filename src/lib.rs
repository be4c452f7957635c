//! # tidbits
//!
//! Small, independent utility functions and async coordination primitives,
//! meant to be imported piecemeal.
//!
//! ## Overview
//!
//! - **Array helpers**: `uniq`, `partition`, `range`, `move_item`, ...
//! - **Object helpers**: `deep_merge`, `object_pick`, `object_map` over JSON objects
//! - **String helpers**: `slash`, `template`, `unindent`, ...
//! - **Guards**: `is_def`, `not_nullish`, `is_truthy`, JSON type predicates
//! - **Deep equality**: structural comparison of JSON values
//! - **Math**: `clamp`, `lerp`, `remap`, `sum`
//! - **Function helpers**: `batch_invoke`, `invoke`, `tap`
//! - **Promise primitives**: controlled promises, singleton promises, promise
//!   locks and the concurrency-limited pipeline `p`
//!
//! ## Feature Flags
//!
//! - `array`: Array helpers
//! - `object`: Object helpers (pulls in `serde_json`)
//! - `string`: String helpers
//! - `guard`: Option and JSON guards
//! - `equal`: Deep equality
//! - `math`: Numeric helpers
//! - `function`: Function helpers
//! - `time`: Wall-clock helpers
//! - `promise`: Async primitives (pulls in `tokio`, `futures`, `tracing`)
//! - `serde`: `Serialize`/`Deserialize` for option structs
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use tidbits::prelude::*;
//!
//! assert_eq!(uniq(vec![1, 2, 2, 3, 1]), vec![1, 2, 3]);
//! assert_eq!(clamp(15, 0, 10), 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled module.
///
/// # Usage
///
/// ```rust
/// use tidbits::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "array")]
    pub use crate::array::*;

    #[cfg(feature = "object")]
    pub use crate::object::*;

    #[cfg(feature = "string")]
    pub use crate::string::*;

    #[cfg(feature = "guard")]
    pub use crate::guard::*;

    #[cfg(feature = "equal")]
    pub use crate::equal::*;

    #[cfg(feature = "math")]
    pub use crate::math::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "time")]
    pub use crate::time::*;

    #[cfg(feature = "promise")]
    pub use crate::promise::*;
}

#[cfg(feature = "array")]
pub mod array;

#[cfg(feature = "object")]
pub mod object;

#[cfg(feature = "string")]
pub mod string;

#[cfg(feature = "guard")]
pub mod guard;

#[cfg(feature = "equal")]
pub mod equal;

#[cfg(feature = "math")]
pub mod math;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "time")]
pub mod time;

#[cfg(feature = "promise")]
pub mod promise;
