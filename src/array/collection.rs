//! Helpers over vectors and slices.

use std::collections::HashSet;
use std::hash::Hash;

use super::ArrayError;

/// Conversion of "nothing, one value, or many values" into a `Vec`.
///
/// `Option<T>` is "nothing or one", so `Some(vec![1])` becomes
/// `vec![vec![1]]`. Flatten an `Option<Vec<T>>` with
/// `unwrap_or_default()` first.
pub trait IntoArray<T> {
    /// Converts `self` into a vector.
    fn into_array(self) -> Vec<T>;
}

impl<T> IntoArray<T> for Vec<T> {
    fn into_array(self) -> Vec<T> {
        self
    }
}

impl<T> IntoArray<T> for Option<T> {
    fn into_array(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T, const N: usize> IntoArray<T> for [T; N] {
    fn into_array(self) -> Vec<T> {
        Vec::from(self)
    }
}

impl<T: Clone> IntoArray<T> for &[T] {
    fn into_array(self) -> Vec<T> {
        self.to_vec()
    }
}

/// Converts `value` into a vector.
///
/// # Examples
///
/// ```rust
/// use tidbits::array::to_array;
///
/// assert_eq!(to_array(Some(1)), vec![1]);
/// assert_eq!(to_array(None::<i32>), Vec::<i32>::new());
/// assert_eq!(to_array([1, 2]), vec![1, 2]);
/// ```
pub fn to_array<T>(value: impl IntoArray<T>) -> Vec<T> {
    value.into_array()
}

/// Flattens one level of nesting.
pub fn flatten<T, I>(nested: I) -> Vec<T>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    nested.into_iter().flatten().collect()
}

/// Concatenates several slices into one vector.
///
/// # Examples
///
/// ```rust
/// use tidbits::array::merge_arrays;
///
/// assert_eq!(merge_arrays(&[&[1, 2][..], &[3], &[]]), vec![1, 2, 3]);
/// ```
pub fn merge_arrays<T: Clone>(arrays: &[&[T]]) -> Vec<T> {
    arrays.concat()
}

/// Splits `items` into `predicates.len() + 1` groups.
///
/// Each item goes to the group of the first predicate it satisfies; items that
/// satisfy none go to the last group. Predicates receive the item and its index.
pub fn partition<T>(
    items: impl IntoIterator<Item = T>,
    predicates: &[&dyn Fn(&T, usize) -> bool],
) -> Vec<Vec<T>> {
    let mut groups: Vec<Vec<T>> = (0..=predicates.len()).map(|_| Vec::new()).collect();
    for (index, item) in items.into_iter().enumerate() {
        let group = predicates
            .iter()
            .position(|predicate| predicate(&item, index))
            .unwrap_or(predicates.len());
        groups[group].push(item);
    }
    groups
}

/// Removes duplicates, keeping the first occurrence of each value.
pub fn uniq<T: Eq + Hash>(items: Vec<T>) -> Vec<T> {
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(items.len());
        items.iter().map(|item| seen.insert(item)).collect()
    };
    items
        .into_iter()
        .zip(keep)
        .filter_map(|(item, keep)| keep.then_some(item))
        .collect()
}

/// Removes duplicates according to `equal`, keeping first occurrences.
///
/// # Examples
///
/// ```rust
/// use tidbits::array::uniq_by;
///
/// let words = vec!["Apple", "apple", "Pear"];
/// assert_eq!(
///     uniq_by(words, |a, b| a.eq_ignore_ascii_case(b)),
///     vec!["Apple", "Pear"]
/// );
/// ```
pub fn uniq_by<T, F>(items: Vec<T>, equal: F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    let mut kept: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !kept.iter().any(|existing| equal(existing, &item)) {
            kept.push(item);
        }
    }
    kept
}

/// Returns the last element.
#[must_use]
pub fn last<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// Removes the first element equal to `value`. Returns whether one was removed.
pub fn remove<T: PartialEq>(items: &mut Vec<T>, value: &T) -> bool {
    match items.iter().position(|item| item == value) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}

/// Returns the element at `index`; negative indices count from the end.
#[must_use]
pub fn at<T>(items: &[T], index: isize) -> Option<&T> {
    let resolved = if index < 0 {
        items.len().checked_sub(index.unsigned_abs())?
    } else {
        index.unsigned_abs()
    };
    items.get(resolved)
}

/// Moves the element at `from` to position `to`, shifting the elements between.
///
/// # Errors
///
/// Returns [`ArrayError::IndexOutOfBounds`] if either index is outside of
/// `items`.
///
/// # Examples
///
/// ```rust
/// use tidbits::array::move_item;
///
/// let mut items = vec!['a', 'b', 'c', 'd'];
/// move_item(&mut items, 0, 2).unwrap();
/// assert_eq!(items, vec!['b', 'c', 'a', 'd']);
/// ```
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<(), ArrayError> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(ArrayError::IndexOutOfBounds { index, len });
        }
    }
    let item = items.remove(from);
    items.insert(to, item);
    Ok(())
}

/// Clamps `index` into the valid index range of `items`.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn clamp_array_range<T>(items: &[T], index: isize) -> Option<usize> {
    let max = items.len().checked_sub(1)?;
    Some(usize::try_from(index).map_or(0, |index| index.min(max)))
}
