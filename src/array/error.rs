//! Error type for array helpers.

use std::error::Error;
use std::fmt;

/// Assertion-style failures raised by array helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// A range was requested with a step of zero.
    ZeroStep,

    /// An index was outside of the collection.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The length of the collection.
        len: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroStep => write!(formatter, "range step must not be 0"),
            Self::IndexOutOfBounds { index, len } => {
                write!(formatter, "index {index} is out of bounds for length {len}")
            }
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn array_error_display() {
        assert_eq!(ArrayError::ZeroStep.to_string(), "range step must not be 0");
        assert_eq!(
            ArrayError::IndexOutOfBounds { index: 4, len: 2 }.to_string(),
            "index 4 is out of bounds for length 2"
        );
    }
}
