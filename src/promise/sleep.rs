//! Timer helpers.

use std::time::Duration;

/// Suspends the current task for `duration`.
///
/// # Examples
///
/// ```rust,ignore
/// use std::time::Duration;
/// use tidbits::promise::sleep;
///
/// #[tokio::main]
/// async fn main() {
///     sleep(Duration::from_millis(10)).await;
/// }
/// ```
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Suspends the current task for `duration`, then returns `callback()`.
pub async fn sleep_then<R, F>(duration: Duration, callback: F) -> R
where
    F: FnOnce() -> R,
{
    sleep(duration).await;
    callback()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tokio::time::Instant;

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn sleep_waits_for_duration() {
        let start = Instant::now();
        sleep(Duration::from_millis(100)).await;
        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn sleep_then_returns_callback_result() {
        let start = Instant::now();
        let value = sleep_then(Duration::from_millis(20), || "done").await;
        assert_eq!(value, "done");
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
