//! Function helpers.

/// Calls every function in iteration order.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use tidbits::function::batch_invoke;
///
/// let log = RefCell::new(Vec::new());
/// let steps: Vec<Box<dyn Fn() + '_>> = vec![
///     Box::new(|| log.borrow_mut().push("first")),
///     Box::new(|| log.borrow_mut().push("second")),
/// ];
/// batch_invoke(steps);
/// assert_eq!(*log.borrow(), vec!["first", "second"]);
/// ```
pub fn batch_invoke<I, F>(functions: I)
where
    I: IntoIterator<Item = F>,
    F: FnOnce(),
{
    functions.into_iter().for_each(|function| function());
}

/// Calls `function` and returns its result.
pub fn invoke<F, R>(function: F) -> R
where
    F: FnOnce() -> R,
{
    function()
}

/// Passes `value` to `function` by mutable reference, then returns it.
///
/// # Examples
///
/// ```rust
/// use tidbits::function::tap;
///
/// let sorted = tap(vec![3, 1, 2], |values| values.sort_unstable());
/// assert_eq!(sorted, vec![1, 2, 3]);
/// ```
pub fn tap<T, F>(mut value: T, function: F) -> T
where
    F: FnOnce(&mut T),
{
    function(&mut value);
    value
}
