//! Integer ranges collected into vectors.

use super::ArrayError;

/// Returns `0, 1, ..., stop - 1`.
///
/// # Examples
///
/// ```rust
/// use tidbits::array::range;
///
/// assert_eq!(range(4), vec![0, 1, 2, 3]);
/// assert!(range(-2).is_empty());
/// ```
#[must_use]
pub fn range(stop: i64) -> Vec<i64> {
    range_from(0, stop)
}

/// Returns `start, start + 1, ..., stop - 1`.
#[must_use]
pub fn range_from(start: i64, stop: i64) -> Vec<i64> {
    (start..stop).collect()
}

/// Returns the values from `start` towards `stop` (exclusive) in increments of
/// `step`.
///
/// A negative `step` counts down while the value is greater than `stop`.
///
/// # Errors
///
/// Returns [`ArrayError::ZeroStep`] if `step` is 0.
///
/// # Examples
///
/// ```rust
/// use tidbits::array::{ArrayError, range_step};
///
/// assert_eq!(range_step(0, 10, 3), Ok(vec![0, 3, 6, 9]));
/// assert_eq!(range_step(5, 0, -2), Ok(vec![5, 3, 1]));
/// assert_eq!(range_step(0, 5, 0), Err(ArrayError::ZeroStep));
/// ```
pub fn range_step(start: i64, stop: i64, step: i64) -> Result<Vec<i64>, ArrayError> {
    if step == 0 {
        return Err(ArrayError::ZeroStep);
    }
    let ascending = step > 0;
    let mut values = Vec::new();
    let mut current = start;
    while (ascending && current < stop) || (!ascending && current > stop) {
        values.push(current);
        match current.checked_add(step) {
            Some(next) => current = next,
            None => break,
        }
    }
    Ok(values)
}
