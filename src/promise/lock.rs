//! Track outstanding async work and wait for it to drain.
//!
//! [`PromiseLock::run`] starts a task right away on the current tokio runtime
//! and records it as pending until it settles. [`PromiseLock::wait`] resolves
//! once the pending set is observed empty, which includes tasks submitted
//! after `wait` was called but before it resolved.
//!
//! The lock does not serialise execution: tasks submitted through `run` run
//! concurrently. It only tracks completion.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use tidbits::promise::create_promise_lock;
//!
//! #[tokio::main]
//! async fn main() {
//!     let lock = create_promise_lock();
//!
//!     let _slow = lock.run(|| tokio::time::sleep(Duration::from_millis(200)));
//!     let _fast = lock.run(|| tokio::time::sleep(Duration::from_millis(100)));
//!     assert!(lock.is_waiting());
//!
//!     lock.wait().await;
//!     assert!(!lock.is_waiting());
//! }
//! ```

use std::collections::HashSet;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::task::{Context, Poll, ready};

use parking_lot::Mutex;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

#[derive(Default)]
struct LockInner {
    pending: Mutex<HashSet<u64>>,
    next_id: AtomicU64,
    drained: Notify,
}

impl LockInner {
    fn finish(&self, id: u64) {
        let remaining = {
            let mut pending = self.pending.lock();
            if !pending.remove(&id) {
                return;
            }
            pending.len()
        };
        trace!(task = id, remaining, "locked task settled");
        if remaining == 0 {
            self.drained.notify_waiters();
        }
    }
}

/// Removes a task from the pending set when the task finishes, panics or is
/// dropped by the runtime.
struct PendingGuard {
    inner: Arc<LockInner>,
    id: u64,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.inner.finish(self.id);
    }
}

/// Tracks outstanding async work submitted through [`run`](Self::run).
///
/// Cloning a `PromiseLock` yields another handle to the same pending set.
#[derive(Clone, Default)]
pub struct PromiseLock {
    inner: Arc<LockInner>,
}

/// Creates an empty [`PromiseLock`].
#[must_use]
pub fn create_promise_lock() -> PromiseLock {
    PromiseLock::new()
}

impl PromiseLock {
    /// Creates an empty lock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Invokes `factory` and spawns the returned future, tracking it as pending.
    ///
    /// The task is removed from the pending set when it settles, whatever its
    /// outcome. The returned handle resolves to the task's own output, so an
    /// `Err` produced by the task reaches the caller unchanged. Dropping the
    /// handle does not stop the task.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    pub fn run<F, Fut>(&self, factory: F) -> LockedTask<Fut::Output>
    where
        F: FnOnce() -> Fut,
        Fut: Future + Send + 'static,
        Fut::Output: Send + 'static,
    {
        let future = factory();
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let pending = {
            let mut pending = self.inner.pending.lock();
            pending.insert(id);
            pending.len()
        };
        trace!(task = id, pending, "locked task started");

        let guard = PendingGuard {
            inner: Arc::clone(&self.inner),
            id,
        };
        let handle = tokio::spawn(async move {
            let _guard = guard;
            future.await
        });
        LockedTask { handle }
    }

    /// Resolves once no task is pending.
    ///
    /// Tasks submitted while waiting are waited for as well. The outcomes of
    /// the tasks are not inspected: a task that returns an error does not make
    /// `wait` fail.
    pub async fn wait(&self) {
        loop {
            let drained = self.inner.drained.notified();
            tokio::pin!(drained);
            drained.as_mut().enable();

            if self.inner.pending.lock().is_empty() {
                return;
            }
            drained.await;
        }
    }

    /// Returns `true` if any task is pending.
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        !self.inner.pending.lock().is_empty()
    }

    /// Returns the number of pending tasks.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.inner.pending.lock().len()
    }

    /// Stops tracking every pending task.
    ///
    /// Running tasks are not cancelled; their completion is simply no longer
    /// recorded. Current waiters are released.
    pub fn clear(&self) {
        let dropped = {
            let mut pending = self.inner.pending.lock();
            let dropped = pending.len();
            pending.clear();
            dropped
        };
        if dropped > 0 {
            debug!(dropped, "promise lock cleared with outstanding tasks");
            self.inner.drained.notify_waiters();
        }
    }
}

impl fmt::Debug for PromiseLock {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PromiseLock")
            .field("pending", &self.pending_count())
            .finish()
    }
}

/// Handle to a task started by [`PromiseLock::run`].
///
/// Resolves to the task's output.
///
/// # Panics
///
/// Awaiting the handle panics when the task did not produce an output:
///
/// - a panic inside the task is resumed in the awaiting caller;
/// - a task cancelled because its runtime shut down panics with
///   `"locked task did not complete"`.
///
/// Either way the task has already left the lock's pending set.
#[must_use = "the task keeps running, but its output is lost unless awaited"]
pub struct LockedTask<T> {
    handle: JoinHandle<T>,
}

impl<T> LockedTask<T> {
    /// Returns `true` if the task has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl<T> Future for LockedTask<T> {
    type Output = T;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<T> {
        match ready!(Pin::new(&mut self.handle).poll(context)) {
            Ok(output) => Poll::Ready(output),
            Err(error) if error.is_panic() => std::panic::resume_unwind(error.into_panic()),
            Err(error) => panic!("locked task did not complete: {error}"),
        }
    }
}

impl<T> fmt::Debug for LockedTask<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LockedTask")
            .field("finished", &self.is_finished())
            .finish()
    }
}
