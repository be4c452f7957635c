//! Error types for the promise primitives.

use std::error::Error;
use std::fmt;

/// Errors raised while configuring promise primitives.
///
/// Failures of the work itself are never wrapped in this type; they are
/// returned as the caller's own error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromiseError {
    /// The concurrency limit was set to zero.
    ///
    /// The limit must be at least 1. Leave it unset for unbounded concurrency.
    InvalidConcurrency,
}

impl fmt::Display for PromiseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConcurrency => {
                write!(formatter, "concurrency limit must be greater than 0")
            }
        }
    }
}

impl Error for PromiseError {}
