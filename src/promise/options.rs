//! Execution options shared by [`Pipeline`](super::Pipeline) and
//! [`Collector`](super::Collector).

use std::num::NonZeroUsize;

use super::PromiseError;

/// Options controlling how many futures a pipeline or collector drives at once.
///
/// The default is unbounded concurrency: every item is in flight at the same
/// time.
///
/// # Examples
///
/// ```rust
/// use tidbits::promise::PromiseOptions;
///
/// let unbounded = PromiseOptions::default();
/// assert_eq!(unbounded.concurrency(), None);
///
/// let bounded = PromiseOptions::new().with_concurrency(2);
/// assert_eq!(bounded.concurrency().map(|limit| limit.get()), Some(2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PromiseOptions {
    /// Maximum number of items in flight. `None` means unbounded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub concurrency: Option<NonZeroUsize>,
}

impl PromiseOptions {
    /// Creates options with unbounded concurrency.
    #[must_use]
    pub const fn new() -> Self {
        Self { concurrency: None }
    }

    /// Returns these options with the concurrency limit set to `limit`.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is 0. Use [`try_with_concurrency`](Self::try_with_concurrency)
    /// for a non-panicking version.
    #[must_use]
    pub fn with_concurrency(self, limit: usize) -> Self {
        self.try_with_concurrency(limit)
            .expect("PromiseOptions concurrency must be greater than 0")
    }

    /// Returns these options with the concurrency limit set to `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`PromiseError::InvalidConcurrency`] if `limit` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tidbits::promise::{PromiseError, PromiseOptions};
    ///
    /// assert!(PromiseOptions::new().try_with_concurrency(4).is_ok());
    /// assert_eq!(
    ///     PromiseOptions::new().try_with_concurrency(0),
    ///     Err(PromiseError::InvalidConcurrency)
    /// );
    /// ```
    pub fn try_with_concurrency(self, limit: usize) -> Result<Self, PromiseError> {
        let limit = NonZeroUsize::new(limit).ok_or(PromiseError::InvalidConcurrency)?;
        Ok(Self {
            concurrency: Some(limit),
        })
    }

    /// Returns the configured concurrency limit, `None` when unbounded.
    #[must_use]
    #[inline]
    pub const fn concurrency(&self) -> Option<NonZeroUsize> {
        self.concurrency
    }

    /// Number of futures to drive at once for a batch of `count` items.
    ///
    /// Always at least 1 so that an empty batch still yields a valid buffer size.
    pub(crate) fn limit_for(&self, count: usize) -> usize {
        self.concurrency
            .map_or(count, NonZeroUsize::get)
            .min(count)
            .max(1)
    }
}
