//! Bounded, order-preserving execution of a batch of futures.

use std::future::Future;

use futures::stream::{FuturesUnordered, StreamExt};

/// Drives `tasks` with at most `limit` in flight and reassembles the results
/// in input order.
///
/// Each task yields `Ok(Some(value))` to keep a value, `Ok(None)` to drop its
/// slot, or `Err` to fail the batch. The first error in completion order is
/// returned and the remaining tasks are dropped.
pub(crate) async fn execute_ordered<T, E, I, Fut>(tasks: I, limit: usize) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Fut>,
    I::IntoIter: ExactSizeIterator,
    Fut: Future<Output = Result<Option<T>, E>>,
{
    let mut tasks = tasks.into_iter().enumerate();
    let count = tasks.len();
    if count == 0 {
        return Ok(Vec::new());
    }

    let mut slots: Vec<Option<T>> = Vec::with_capacity(count);
    slots.resize_with(count, || None);

    let limit = limit.max(1);
    let mut running = FuturesUnordered::new();
    loop {
        while running.len() < limit {
            let Some((index, task)) = tasks.next() else {
                break;
            };
            running.push(async move { (index, task.await) });
        }
        let Some((index, outcome)) = running.next().await else {
            break;
        };
        slots[index] = outcome?;
    }

    Ok(slots.into_iter().flatten().collect())
}
