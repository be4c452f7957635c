//! Collect futures over time and resolve them together.
//!
//! A [`Collector`] is the sourceless form of [`p`](super::p): futures are
//! added one by one (or in batches) as the program goes, and the collector is
//! resolved later. Results come back in submission order.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tidbits::promise::p_collect;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut collector = p_collect::<i32, ()>();
//!     collector.add(async { Ok(1) }).add(async { Ok(2) });
//!     collector.add(async { Ok(3) });
//!
//!     assert_eq!(collector.await, Ok(vec![1, 2, 3]));
//! }
//! ```

use std::fmt;
use std::future::{Future, IntoFuture};

use futures::future::BoxFuture;
use futures::{FutureExt, TryFutureExt};
use tracing::{debug, trace};

use super::PromiseOptions;
use super::executor::execute_ordered;

/// An ordered collection of futures resolved together.
///
/// Every added future yields `Result<T, E>`. Resolving the collector drives the
/// collected futures with the configured concurrency bound and returns their
/// values in the order they were added, or the first error.
#[must_use = "collected futures do nothing unless the collector is resolved"]
pub struct Collector<T, E> {
    collected: Vec<BoxFuture<'static, Result<T, E>>>,
    options: PromiseOptions,
}

/// Creates an empty collector with unbounded concurrency.
pub fn p_collect<T, E>() -> Collector<T, E> {
    p_collect_with(PromiseOptions::default())
}

/// Creates an empty collector with the given options.
pub fn p_collect_with<T, E>(options: PromiseOptions) -> Collector<T, E> {
    Collector {
        collected: Vec::new(),
        options,
    }
}

impl<T, E> Collector<T, E> {
    /// Returns the number of collected futures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collected.len()
    }

    /// Returns `true` if nothing is collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collected.is_empty()
    }

    /// Returns the execution options.
    #[must_use]
    pub const fn options(&self) -> PromiseOptions {
        self.options
    }

    /// Drops every collected future without driving it.
    pub fn clear(&mut self) {
        if !self.collected.is_empty() {
            debug!(
                discarded = self.collected.len(),
                "collector cleared with outstanding futures"
            );
        }
        self.collected.clear();
    }
}

impl<T, E> Collector<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Appends a future.
    pub fn add<Fut>(&mut self, future: Fut) -> &mut Self
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        self.collected.push(future.boxed());
        self
    }

    /// Appends every future yielded by `futures`, in iteration order.
    pub fn add_all<I, Fut>(&mut self, futures: I) -> &mut Self
    where
        I: IntoIterator<Item = Fut>,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        self.collected.extend(futures.into_iter().map(FutureExt::boxed));
        self
    }

    /// Resolves every future collected so far and empties the collector.
    ///
    /// The collector can be reused afterwards.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a collected future. The remaining
    /// futures are dropped.
    pub async fn resolve(&mut self) -> Result<Vec<T>, E> {
        let collected = std::mem::take(&mut self.collected);
        run(collected, self.options).await
    }
}

async fn run<T, E>(
    collected: Vec<BoxFuture<'static, Result<T, E>>>,
    options: PromiseOptions,
) -> Result<Vec<T>, E> {
    let limit = options.limit_for(collected.len());
    trace!(futures = collected.len(), concurrency = limit, "resolving collector");
    let tasks: Vec<_> = collected
        .into_iter()
        .map(|future| future.map_ok(Some))
        .collect();
    execute_ordered(tasks, limit).await
}

impl<T, E> IntoFuture for Collector<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    type Output = Result<Vec<T>, E>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        run(self.collected, self.options).boxed()
    }
}

impl<T, E> fmt::Debug for Collector<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Collector")
            .field("collected", &self.collected.len())
            .field("options", &self.options)
            .finish()
    }
}
