//! Share one in-flight invocation of an async factory between callers.
//!
//! [`SingletonPromise::call`] invokes the factory only when no invocation is
//! stored; otherwise it hands out another handle to the stored one. The stored
//! invocation is kept after it settles, including when it settles with an
//! error, until [`SingletonPromise::reset`] clears it.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use parking_lot::{Mutex, ReentrantMutex};
use tracing::trace;

/// Handle to a shared invocation.
///
/// Every handle cloned from the same invocation resolves to the same outcome.
/// Use [`Shared::ptr_eq`] to check whether two handles belong to the same
/// invocation.
pub type SharedInvocation<T, E> = Shared<BoxFuture<'static, Result<T, E>>>;

type Factory<T, E> = dyn Fn() -> BoxFuture<'static, Result<T, E>> + Send + Sync;

struct SingletonInner<T, E> {
    factory: Box<Factory<T, E>>,
    /// Serialises factory invocations. Reentrant so the factory may inspect
    /// its own singleton.
    invoking: ReentrantMutex<()>,
    current: Mutex<Option<SharedInvocation<T, E>>>,
}

/// An async factory whose concurrent callers share one invocation.
///
/// Cloning a `SingletonPromise` yields another handle to the same stored
/// invocation.
///
/// # Type Parameters
///
/// - `T`: The success type. Must be `Clone` so every caller receives a copy.
/// - `E`: The error type. Must be `Clone` for the same reason.
///
/// # Examples
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use tidbits::promise::create_singleton_promise;
///
/// #[tokio::main]
/// async fn main() {
///     let calls = Arc::new(AtomicUsize::new(0));
///     let counter = Arc::clone(&calls);
///     let connect = create_singleton_promise(move || {
///         counter.fetch_add(1, Ordering::SeqCst);
///         async { Ok::<_, ()>("connection") }
///     });
///
///     let (first, second) = (connect.call(), connect.call());
///     assert_eq!(first.await, second.await);
///     assert_eq!(calls.load(Ordering::SeqCst), 1);
///
///     connect.reset().await;
///     connect.call().await.unwrap();
///     assert_eq!(calls.load(Ordering::SeqCst), 2);
/// }
/// ```
pub struct SingletonPromise<T, E> {
    inner: Arc<SingletonInner<T, E>>,
}

/// Wraps `factory` so that concurrent callers share a single invocation.
///
/// The factory is not called until the first [`SingletonPromise::call`].
pub fn create_singleton_promise<F, Fut, T, E>(factory: F) -> SingletonPromise<T, E>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    SingletonPromise {
        inner: Arc::new(SingletonInner {
            factory: Box::new(move || factory().boxed()),
            invoking: ReentrantMutex::new(()),
            current: Mutex::new(None),
        }),
    }
}

impl<T, E> SingletonPromise<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Returns the stored invocation, invoking the factory first if none is stored.
    ///
    /// The factory runs synchronously inside this call when it is invoked; the
    /// future it returns makes progress once any handle is polled. Callers on
    /// other threads block until the factory returns and then share its
    /// invocation. The stored slot is not locked while the factory runs, so the
    /// factory may call [`is_pending`](Self::is_pending) on its own singleton.
    /// Calling `call` from inside the factory invokes it again.
    pub fn call(&self) -> SharedInvocation<T, E> {
        if let Some(invocation) = self.stored() {
            return invocation;
        }
        let _invoking = self.inner.invoking.lock();
        if let Some(invocation) = self.stored() {
            return invocation;
        }

        trace!("invoking singleton factory");
        let invocation = (self.inner.factory)().shared();
        *self.inner.current.lock() = Some(invocation.clone());
        invocation
    }

    fn stored(&self) -> Option<SharedInvocation<T, E>> {
        self.inner.current.lock().clone()
    }

    /// Waits for the stored invocation to settle, then clears it.
    ///
    /// The outcome of the settling invocation is discarded. Resolves immediately
    /// when nothing is stored. Once this resolves, the next [`call`](Self::call)
    /// invokes the factory again.
    pub async fn reset(&self) {
        let stored = self.inner.current.lock().clone();
        let Some(invocation) = stored else {
            return;
        };
        let _ = invocation.clone().await;

        let mut current = self.inner.current.lock();
        if current
            .as_ref()
            .is_some_and(|candidate| candidate.ptr_eq(&invocation))
        {
            *current = None;
            trace!("singleton invocation reset");
        }
    }
}

impl<T, E> SingletonPromise<T, E> {
    /// Returns `true` while an invocation is stored.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.current.lock().is_some()
    }
}

impl<T, E> Clone for SingletonPromise<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, E> fmt::Debug for SingletonPromise<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SingletonPromise")
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::OnceLock;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_singleton() -> (SingletonPromise<usize, String>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let singleton = create_singleton_promise(move || {
            let call = counter.fetch_add(1, Ordering::SeqCst) + 1;
            async move { Ok(call) }
        });
        (singleton, calls)
    }

    #[rstest]
    fn factory_is_not_called_on_creation() {
        let (singleton, calls) = counting_singleton();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!singleton.is_pending());
    }

    #[rstest]
    fn repeated_calls_share_invocation() {
        let (singleton, calls) = counting_singleton();
        let first = singleton.call();
        let second = singleton.call();
        let third = singleton.clone().call();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(first.ptr_eq(&second));
        assert!(second.ptr_eq(&third));
        assert!(singleton.is_pending());
    }

    #[rstest]
    #[tokio::test]
    async fn settled_invocation_is_reused() {
        let (singleton, calls) = counting_singleton();
        assert_eq!(singleton.call().await, Ok(1));
        assert_eq!(singleton.call().await, Ok(1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn reset_without_invocation_returns_immediately() {
        let (singleton, calls) = counting_singleton();
        singleton.reset().await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn reset_clears_stored_invocation() {
        let (singleton, calls) = counting_singleton();
        let _ = singleton.call();
        singleton.reset().await;
        assert!(!singleton.is_pending());
        assert_eq!(singleton.call().await, Ok(2));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn factory_can_inspect_its_own_singleton() {
        let slot: Arc<OnceLock<SingletonPromise<bool, ()>>> = Arc::new(OnceLock::new());
        let inner_slot = Arc::clone(&slot);
        let singleton = create_singleton_promise(move || {
            let pending = inner_slot.get().map(SingletonPromise::is_pending);
            async move { Ok(pending == Some(false)) }
        });
        let _ = slot.set(singleton.clone());

        assert_eq!(singleton.call().await, Ok(true));
        assert!(singleton.is_pending());
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn racing_threads_invoke_factory_once() {
        let (singleton, calls) = counting_singleton();
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let singleton = singleton.clone();
                tokio::spawn(async move { singleton.call().await })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.await.unwrap(), Ok(1));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn debug_shows_pending_state() {
        let (singleton, _) = counting_singleton();
        let debug = format!("{singleton:?}");
        assert!(debug.contains("SingletonPromise"));
        assert!(debug.contains("pending: false"));
    }
}
