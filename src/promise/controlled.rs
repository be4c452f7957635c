//! Futures completed from the outside.
//!
//! [`create_controlled_promise`] returns a [`ControlledPromise`] together with
//! a [`Resolver`]. The promise settles exactly once, with whichever of
//! [`Resolver::resolve`] or [`Resolver::reject`] is called first; every later
//! call is silently ignored.
//!
//! The resolver can be cloned and moved anywhere, so completion may come from
//! another task, a callback, or a timer. Composing the promise with a timeout
//! is left to the caller (e.g. `tokio::time::timeout`).
//!
//! # Examples
//!
//! ```rust,ignore
//! use tidbits::promise::create_controlled_promise;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (promise, resolver) = create_controlled_promise::<&str, ()>();
//!
//!     resolver.resolve("a");
//!     resolver.resolve("b");
//!
//!     assert_eq!(promise.await, Ok("a"));
//! }
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::task::{Context, Poll, Waker};

use parking_lot::Mutex;
use tracing::warn;

enum Slot<T, E> {
    Pending,
    Settled(Result<T, E>),
    Taken,
}

struct State<T, E> {
    slot: Slot<T, E>,
    waker: Option<Waker>,
}

/// Completion source shared by the promise and all of its resolvers.
struct Completion<T, E> {
    state: Mutex<State<T, E>>,
    resolvers: AtomicUsize,
}

impl<T, E> Completion<T, E> {
    /// Stores `outcome` if nothing was stored yet. Returns whether it was stored.
    fn settle(&self, outcome: Result<T, E>) -> bool {
        let waker = {
            let mut state = self.state.lock();
            if !matches!(state.slot, Slot::Pending) {
                return false;
            }
            state.slot = Slot::Settled(outcome);
            state.waker.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
        true
    }

    fn is_settled(&self) -> bool {
        !matches!(self.state.lock().slot, Slot::Pending)
    }
}

/// A future whose outcome is supplied externally through a [`Resolver`].
///
/// Output is `Ok(T)` after [`Resolver::resolve`] and `Err(E)` after
/// [`Resolver::reject`]. If every resolver is dropped without settling, the
/// promise stays pending forever.
///
/// The promise has a single consumer. To await the outcome from several places,
/// wrap it with [`futures::FutureExt::shared`].
///
/// # Panics
///
/// Polling the promise again after it returned `Poll::Ready` panics.
#[must_use = "futures do nothing unless polled"]
pub struct ControlledPromise<T, E> {
    completion: Arc<Completion<T, E>>,
}

/// The completion handle of a [`ControlledPromise`].
///
/// Cloning a resolver yields another handle to the same promise. Only the first
/// `resolve`/`reject` across all handles has an effect.
pub struct Resolver<T, E> {
    completion: Arc<Completion<T, E>>,
}

/// Creates a pending [`ControlledPromise`] and the [`Resolver`] that settles it.
///
/// # Examples
///
/// ```rust,ignore
/// use tidbits::promise::create_controlled_promise;
///
/// #[tokio::main]
/// async fn main() {
///     let (promise, resolver) = create_controlled_promise::<i32, String>();
///
///     tokio::spawn(async move {
///         resolver.reject("boom".to_string());
///     });
///
///     assert_eq!(promise.await, Err("boom".to_string()));
/// }
/// ```
pub fn create_controlled_promise<T, E>() -> (ControlledPromise<T, E>, Resolver<T, E>) {
    let completion = Arc::new(Completion {
        state: Mutex::new(State {
            slot: Slot::Pending,
            waker: None,
        }),
        resolvers: AtomicUsize::new(1),
    });
    (
        ControlledPromise {
            completion: Arc::clone(&completion),
        },
        Resolver { completion },
    )
}

impl<T, E> Resolver<T, E> {
    /// Fulfils the promise with `value`. No-op if it already settled.
    pub fn resolve(&self, value: T) {
        self.completion.settle(Ok(value));
    }

    /// Rejects the promise with `error`. No-op if it already settled.
    pub fn reject(&self, error: E) {
        self.completion.settle(Err(error));
    }

    /// Returns `true` once the promise received its first completion.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.completion.is_settled()
    }
}

impl<T, E> Clone for Resolver<T, E> {
    fn clone(&self) -> Self {
        self.completion.resolvers.fetch_add(1, Ordering::Relaxed);
        Self {
            completion: Arc::clone(&self.completion),
        }
    }
}

impl<T, E> Drop for Resolver<T, E> {
    fn drop(&mut self) {
        if self.completion.resolvers.fetch_sub(1, Ordering::AcqRel) == 1
            && !self.completion.is_settled()
        {
            warn!("last resolver dropped before the controlled promise settled");
        }
    }
}

impl<T, E> ControlledPromise<T, E> {
    /// Returns `true` once the promise received its first completion.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.completion.is_settled()
    }
}

impl<T, E> Future for ControlledPromise<T, E> {
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let mut state = self.completion.state.lock();
        match std::mem::replace(&mut state.slot, Slot::Taken) {
            Slot::Settled(outcome) => Poll::Ready(outcome),
            Slot::Pending => {
                state.slot = Slot::Pending;
                match &mut state.waker {
                    Some(waker) if waker.will_wake(context.waker()) => {}
                    waker => *waker = Some(context.waker().clone()),
                }
                Poll::Pending
            }
            Slot::Taken => panic!("ControlledPromise polled after completion"),
        }
    }
}

impl<T, E> fmt::Debug for ControlledPromise<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ControlledPromise")
            .field("settled", &self.is_settled())
            .finish()
    }
}

impl<T, E> fmt::Debug for Resolver<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Resolver")
            .field("settled", &self.is_settled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use rstest::rstest;

    #[rstest]
    fn new_promise_is_pending() {
        let (mut promise, resolver) = create_controlled_promise::<i32, ()>();
        assert!(!promise.is_settled());
        assert!(!resolver.is_settled());
        assert!((&mut promise).now_or_never().is_none());
    }

    #[rstest]
    fn first_resolve_wins() {
        let (promise, resolver) = create_controlled_promise::<&str, ()>();
        resolver.resolve("a");
        resolver.resolve("b");
        resolver.reject(());
        assert_eq!(promise.now_or_never(), Some(Ok("a")));
    }

    #[rstest]
    fn first_reject_wins() {
        let (promise, resolver) = create_controlled_promise::<i32, &str>();
        resolver.reject("first");
        resolver.resolve(1);
        assert_eq!(promise.now_or_never(), Some(Err("first")));
    }

    #[rstest]
    fn cloned_resolver_settles_same_promise() {
        let (promise, resolver) = create_controlled_promise::<i32, ()>();
        let other = resolver.clone();
        other.resolve(7);
        assert!(resolver.is_settled());
        resolver.resolve(8);
        assert_eq!(promise.now_or_never(), Some(Ok(7)));
    }

    #[rstest]
    fn dropping_resolvers_leaves_promise_pending() {
        let (mut promise, resolver) = create_controlled_promise::<i32, ()>();
        drop(resolver.clone());
        drop(resolver);
        assert!((&mut promise).now_or_never().is_none());
        assert!(!promise.is_settled());
    }

    #[rstest]
    fn debug_shows_settled_state() {
        let (promise, resolver) = create_controlled_promise::<i32, ()>();
        assert!(format!("{promise:?}").contains("settled: false"));
        resolver.resolve(1);
        assert!(format!("{resolver:?}").contains("settled: true"));
    }
}
