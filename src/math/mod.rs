//! Numeric helpers.
//!
//! # Examples
//!
//! ```rust
//! use tidbits::math::{average, clamp, lerp, remap};
//!
//! assert_eq!(clamp(-3, 0, 10), 0);
//! assert_eq!(lerp(0.0, 10.0, 0.25), 2.5);
//! assert_eq!(remap(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
//! assert_eq!(average(&[1.0, 2.0, 3.0]), Some(2.0));
//! ```

use std::iter::Sum;

/// Restricts `value` to `min..=max`.
///
/// Works for any [`PartialOrd`] type, floats included. When `min > max`, `max`
/// wins.
#[must_use]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let lower_bounded = if value < min { min } else { value };
    if lower_bounded > max { max } else { lower_bounded }
}

/// Sums `values`.
#[must_use]
pub fn sum<T, I>(values: I) -> T
where
    I: IntoIterator<Item = T>,
    T: Sum<T>,
{
    values.into_iter().sum()
}

/// Linear interpolation between `min` and `max`.
///
/// `t` is clamped to `0.0..=1.0`.
#[must_use]
pub fn lerp(min: f64, max: f64, t: f64) -> f64 {
    let t = clamp(t, 0.0, 1.0);
    (max - min).mul_add(t, min)
}

/// Maps `value` from the input range onto the output range.
///
/// The result is clamped to the output range.
#[must_use]
pub fn remap(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let t = (value - in_min) / (in_max - in_min);
    lerp(out_min, out_max, t)
}

/// Arithmetic mean, or `None` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(5, 0, 10, 5)]
    #[case(-1, 0, 10, 0)]
    #[case(11, 0, 10, 10)]
    #[case(0, 0, 0, 0)]
    fn clamp_integers(#[case] value: i32, #[case] min: i32, #[case] max: i32, #[case] expected: i32) {
        assert_eq!(clamp(value, min, max), expected);
    }

    #[rstest]
    fn clamp_floats() {
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
    }

    #[rstest]
    fn sum_of_integers_and_floats() {
        assert_eq!(sum(vec![1, 2, 3]), 6);
        assert_eq!(sum([0.5, 0.25]), 0.75);
        assert_eq!(sum(Vec::<i64>::new()), 0);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(0.5, 5.0)]
    #[case(1.0, 10.0)]
    #[case(2.0, 10.0)]
    #[case(-1.0, 0.0)]
    fn lerp_cases(#[case] t: f64, #[case] expected: f64) {
        assert_eq!(lerp(0.0, 10.0, t), expected);
    }

    #[rstest]
    #[case(15.0, 150.0)]
    #[case(10.0, 100.0)]
    #[case(30.0, 200.0)]
    fn remap_cases(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(remap(value, 10.0, 20.0, 100.0, 200.0), expected);
    }

    #[rstest]
    fn average_of_empty_is_none() {
        assert_eq!(average(&[]), None);
        assert_eq!(average(&[4.0]), Some(4.0));
    }
}
