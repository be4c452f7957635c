//! Promise-style coordination primitives built on futures and tokio.
//!
//! This module provides a handful of small primitives for coordinating
//! asynchronous work:
//!
//! - [`create_controlled_promise`]: a future completed from the outside
//!   through a [`Resolver`]
//! - [`create_singleton_promise`]: concurrent callers share one in-flight
//!   invocation of an async factory until [`SingletonPromise::reset`]
//! - [`create_promise_lock`]: track outstanding work and wait for it to drain
//! - [`p`]: a lazily evaluated `map`/`filter` pipeline over a collection with
//!   an optional concurrency bound, preserving input order
//! - [`p_collect`]: collect futures over time and resolve them together
//! - [`sleep`] / [`sleep_then`]: timer helpers
//!
//! # Rejections
//!
//! A "rejected" promise is a future whose output is `Err(E)`. Every primitive
//! in this module hands the caller's own `E` back unmodified.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tidbits::promise::p;
//!
//! #[tokio::main]
//! async fn main() {
//!     let values = p(vec![1, 2, 3, 4, 5])
//!         .map(|value, _| async move { Ok::<_, ()>(value * 3) })
//!         .filter(|value, _| {
//!             let even = value % 2 == 0;
//!             async move { Ok(even) }
//!         })
//!         .await;
//!
//!     assert_eq!(values, Ok(vec![6, 12]));
//! }
//! ```

mod collector;
mod controlled;
mod error;
mod executor;
mod lock;
mod options;
mod pipeline;
mod singleton;
mod sleep;

pub use collector::{Collector, p_collect, p_collect_with};
pub use controlled::{ControlledPromise, Resolver, create_controlled_promise};
pub use error::PromiseError;
pub use lock::{LockedTask, PromiseLock, create_promise_lock};
pub use options::PromiseOptions;
pub use pipeline::{Pipeline, p, p_from_future, p_with};
pub use singleton::{SharedInvocation, SingletonPromise, create_singleton_promise};
pub use sleep::{sleep, sleep_then};
