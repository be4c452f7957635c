#![cfg(feature = "promise")]
//! Integration tests for controlled promises.
//!
//! A controlled promise settles exactly once, from outside the computation
//! that awaits it.

use std::time::Duration;

use rstest::rstest;
use tidbits::promise::create_controlled_promise;
use tokio::time::{Instant, timeout};

// =============================================================================
// First Completion Wins
// =============================================================================

#[rstest]
#[tokio::test]
async fn second_resolve_is_ignored() {
    let (promise, resolver) = create_controlled_promise::<&str, ()>();
    resolver.resolve("a");
    resolver.resolve("b");
    assert_eq!(promise.await, Ok("a"));
}

#[rstest]
#[tokio::test]
async fn reject_after_resolve_is_ignored() {
    let (promise, resolver) = create_controlled_promise::<i32, String>();
    resolver.resolve(1);
    resolver.reject("late".to_string());
    assert_eq!(promise.await, Ok(1));
}

#[rstest]
#[tokio::test]
async fn rejection_reaches_awaiter_unchanged() {
    let (promise, resolver) = create_controlled_promise::<i32, String>();
    resolver.reject("boom".to_string());
    assert_eq!(promise.await, Err("boom".to_string()));
}

// =============================================================================
// Settling From Elsewhere
// =============================================================================

#[rstest]
#[tokio::test(start_paused = true)]
async fn resolve_from_another_task() {
    let (promise, resolver) = create_controlled_promise::<u32, ()>();
    let start = Instant::now();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(30)).await;
        resolver.resolve(30);
    });

    assert_eq!(promise.await, Ok(30));
    assert!(start.elapsed() >= Duration::from_millis(30));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn cloned_resolvers_race_and_first_wins() {
    let (promise, resolver) = create_controlled_promise::<&str, ()>();
    let slow = resolver.clone();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        slow.resolve("slow");
    });
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        resolver.resolve("fast");
    });

    assert_eq!(promise.await, Ok("fast"));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn timeout_composes_with_unsettled_promise() {
    let (promise, resolver) = create_controlled_promise::<i32, ()>();
    let outcome = timeout(Duration::from_millis(100), promise).await;
    assert!(outcome.is_err());
    assert!(!resolver.is_settled());
}
