//! Lazily evaluated async `map`/`filter` pipelines with bounded concurrency.
//!
//! A [`Pipeline`] records stages without running anything. Awaiting it (or
//! calling [`Pipeline::for_each`] / [`Pipeline::reduce`]) runs every item
//! through all recorded stages, with at most `concurrency` items in flight,
//! and returns the surviving items in input order regardless of the order in
//! which their work completed.
//!
//! Callbacks receive the item's index in the source collection. Items removed
//! by a filter keep their index, so later stages still see source indices.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tidbits::promise::{PromiseOptions, p_with};
//!
//! #[tokio::main]
//! async fn main() {
//!     let total = p_with(vec![1, 2, 3, 4], PromiseOptions::new().with_concurrency(2))
//!         .map(|value, _| async move { Ok::<_, ()>(value * 10) })
//!         .reduce(|sum, value| sum + value, 0)
//!         .await;
//!
//!     assert_eq!(total, Ok(100));
//! }
//! ```

use std::convert::identity;
use std::fmt;
use std::future::{Future, IntoFuture};
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::trace;

use super::PromiseOptions;
use super::executor::execute_ordered;

type MapFn<T, U, E> = Arc<dyn Fn(T, usize) -> BoxFuture<'static, Result<U, E>> + Send + Sync>;
type FilterFn<T, E> =
    Arc<dyn Fn(&T, usize) -> BoxFuture<'static, Result<bool, E>> + Send + Sync>;

/// Runs one item through every recorded stage. `None` means the item was
/// filtered out.
type Chain<Tin, Tout, E> =
    Arc<dyn Fn(Tin, usize) -> BoxFuture<'static, Result<Option<Tout>, E>> + Send + Sync>;

/// One recorded pipeline stage.
enum Stage<T, U, E> {
    Map(MapFn<T, U, E>),
    /// The conversion is the identity; filters never change the item type.
    Filter(FilterFn<T, E>, fn(T) -> U),
}

impl<T, U, E> Stage<T, U, E> {
    async fn apply(&self, item: T, index: usize) -> Result<Option<U>, E> {
        match self {
            Self::Map(transform) => transform(item, index).await.map(Some),
            Self::Filter(predicate, convert) => {
                let keep = predicate(&item, index).await?;
                Ok(keep.then(|| convert(item)))
            }
        }
    }
}

enum Source<T> {
    Items(Vec<T>),
    Deferred(BoxFuture<'static, Vec<T>>),
}

/// A recorded chain of async stages over a source collection.
///
/// # Type Parameters
///
/// - `Tin`: The source item type.
/// - `Tout`: The item type produced by the last recorded stage.
/// - `E`: The error type shared by every stage.
///
/// Awaiting a pipeline yields `Ok(Vec<Tout>)`, or the first `Err(E)` produced
/// by any stage invocation.
#[must_use = "pipelines do nothing unless awaited"]
pub struct Pipeline<Tin, Tout, E> {
    source: Source<Tin>,
    chain: Chain<Tin, Tout, E>,
    options: PromiseOptions,
}

/// Creates a pipeline over `items` with unbounded concurrency.
pub fn p<T, E, I>(items: I) -> Pipeline<T, T, E>
where
    I: IntoIterator<Item = T>,
    T: Send + 'static,
    E: Send + 'static,
{
    p_with(items, PromiseOptions::default())
}

/// Creates a pipeline over `items` with the given options.
pub fn p_with<T, E, I>(items: I, options: PromiseOptions) -> Pipeline<T, T, E>
where
    I: IntoIterator<Item = T>,
    T: Send + 'static,
    E: Send + 'static,
{
    Pipeline::from_source(Source::Items(items.into_iter().collect()), options)
}

/// Creates a pipeline whose source collection is produced by `items`.
///
/// The source future is awaited when the pipeline runs, before any stage.
pub fn p_from_future<T, E, Fut>(items: Fut, options: PromiseOptions) -> Pipeline<T, T, E>
where
    Fut: Future<Output = Vec<T>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    Pipeline::from_source(Source::Deferred(items.boxed()), options)
}

impl<T, E> Pipeline<T, T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn from_source(source: Source<T>, options: PromiseOptions) -> Self {
        let chain: Chain<T, T, E> =
            Arc::new(|item: T, _: usize| async move { Ok(Some(item)) }.boxed());
        Self {
            source,
            chain,
            options,
        }
    }
}

impl<Tin, Tout, E> Pipeline<Tin, Tout, E>
where
    Tin: Send + 'static,
    Tout: Send + 'static,
    E: Send + 'static,
{
    /// Records a transformation stage.
    ///
    /// `transform` receives each surviving item and its source index.
    pub fn map<U, F, Fut>(self, transform: F) -> Pipeline<Tin, U, E>
    where
        F: Fn(Tout, usize) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<U, E>> + Send + 'static,
        U: Send + 'static,
    {
        let transform: MapFn<Tout, U, E> =
            Arc::new(move |item, index| transform(item, index).boxed());
        self.push(Stage::Map(transform))
    }

    /// Records a filter stage.
    ///
    /// Items whose predicate resolves to `Ok(false)` are dropped; the relative
    /// order of the remaining items is kept.
    pub fn filter<F, Fut>(self, predicate: F) -> Self
    where
        F: Fn(&Tout, usize) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<bool, E>> + Send + 'static,
    {
        let predicate: FilterFn<Tout, E> =
            Arc::new(move |item: &Tout, index: usize| predicate(item, index).boxed());
        self.push(Stage::Filter(predicate, identity))
    }

    /// Replaces the execution options.
    pub fn with_options(mut self, options: PromiseOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the execution options.
    #[must_use]
    pub const fn options(&self) -> PromiseOptions {
        self.options
    }

    /// Runs the pipeline, calling `action` for every surviving item.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a stage or by `action`.
    pub async fn for_each<F, Fut>(self, action: F) -> Result<(), E>
    where
        F: Fn(Tout, usize) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
    {
        self.map(action).execute().await.map(|_| ())
    }

    /// Runs the pipeline, then folds the results left to right.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a stage; `reducer` is not called in
    /// that case.
    pub async fn reduce<A, F>(self, reducer: F, initial: A) -> Result<A, E>
    where
        F: FnMut(A, Tout) -> A,
    {
        Ok(self.execute().await?.into_iter().fold(initial, reducer))
    }

    fn push<U>(self, stage: Stage<Tout, U, E>) -> Pipeline<Tin, U, E>
    where
        U: Send + 'static,
    {
        let Self {
            source,
            chain,
            options,
        } = self;
        let stage = Arc::new(stage);
        let chain: Chain<Tin, U, E> = Arc::new(move |item, index| {
            let previous = chain(item, index);
            let stage = Arc::clone(&stage);
            async move {
                match previous.await? {
                    Some(value) => stage.apply(value, index).await,
                    None => Ok(None),
                }
            }
            .boxed()
        });
        Pipeline {
            source,
            chain,
            options,
        }
    }

    async fn execute(self) -> Result<Vec<Tout>, E> {
        let Self {
            source,
            chain,
            options,
        } = self;
        let items = match source {
            Source::Items(items) => items,
            Source::Deferred(items) => items.await,
        };
        let limit = options.limit_for(items.len());
        trace!(items = items.len(), concurrency = limit, "running pipeline");

        let tasks: Vec<_> = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| chain(item, index))
            .collect();
        execute_ordered(tasks, limit).await
    }
}

impl<Tin, Tout, E> IntoFuture for Pipeline<Tin, Tout, E>
where
    Tin: Send + 'static,
    Tout: Send + 'static,
    E: Send + 'static,
{
    type Output = Result<Vec<Tout>, E>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        self.execute().boxed()
    }
}

impl<Tin, Tout, E> fmt::Debug for Pipeline<Tin, Tout, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match &self.source {
            Source::Items(items) => format!("{} items", items.len()),
            Source::Deferred(_) => "deferred".to_string(),
        };
        formatter
            .debug_struct("Pipeline")
            .field("source", &source)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
