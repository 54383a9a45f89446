//! Unit tests for the asynchronous bridges.
//!
//! Tests cover future capture (fulfillment and panic), the inline
//! async try-catch, materialization back into the future idiom, batch
//! aggregation ordering and first-failure reporting, the async value
//! combinators, and the stream adapter.

#![cfg(feature = "async")]

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::{FutureExt, StreamExt};
use outcomars::bridge::{
    and_then_async, async_try_catch, async_try_catch_with, from_future, from_future_all,
    from_future_all_with, from_future_with, map_async, map_failure_async, or_else_async,
    panic_message, to_future, try_map_stream,
};
use outcomars::outcome::Outcome;
use rstest::rstest;

// =============================================================================
// from_future / async_try_catch
// =============================================================================

#[rstest]
#[tokio::test]
async fn from_future_wraps_fulfillment_as_success() {
    let outcome = from_future(async { 42 }).await;
    assert_eq!(outcome.unwrap_or(0), 42);
}

#[rstest]
#[tokio::test]
async fn from_future_captures_a_panicking_future() {
    let outcome = from_future(async { panic!("boom") }).await;
    let payload = outcome.failure().unwrap();
    assert_eq!(panic_message(&payload), Some("boom"));
}

#[rstest]
#[tokio::test]
async fn from_future_with_maps_the_payload() {
    let outcome = from_future_with(async { panic!("boom") }, |payload| {
        panic_message(&payload).unwrap_or("unknown panic").to_string()
    })
    .await;
    assert_eq!(outcome, Outcome::<(), String>::Failure("boom".to_string()));
}

#[rstest]
#[tokio::test]
async fn async_try_catch_wraps_fulfillment_as_success() {
    let outcome = async_try_catch(|| async { 42 }).await;
    assert_eq!(outcome.unwrap_or(0), 42);
}

#[rstest]
#[tokio::test]
async fn async_try_catch_captures_a_panic_while_building_the_future() {
    let outcome: Outcome<i32, _> = async_try_catch(|| -> futures::future::Ready<i32> {
        panic!("early")
    })
    .await;
    let payload = outcome.failure().unwrap();
    assert_eq!(panic_message(&payload), Some("early"));
}

#[rstest]
#[tokio::test]
async fn async_try_catch_with_maps_the_payload() {
    let outcome = async_try_catch_with(
        || async { panic!("boom") },
        |payload| panic_message(&payload).unwrap_or("unknown panic").to_string(),
    )
    .await;
    assert_eq!(outcome, Outcome::<(), String>::Failure("boom".to_string()));
}

// =============================================================================
// to_future
// =============================================================================

#[rstest]
#[tokio::test]
async fn to_future_resolves_the_success_value() {
    let success: Outcome<i32, String> = Outcome::Success(42);
    assert_eq!(to_future(success).await, 42);
}

#[rstest]
#[tokio::test]
async fn to_future_reraises_the_original_error_value() {
    let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    let result = AssertUnwindSafe(to_future(failure)).catch_unwind().await;
    let payload = result.unwrap_err();
    assert_eq!(
        payload.downcast_ref::<String>().map(String::as_str),
        Some("boom")
    );
}

// =============================================================================
// from_future_all
// =============================================================================

#[rstest]
#[tokio::test]
async fn from_future_all_preserves_input_order() {
    let outcome = from_future_all((1..=3).map(|n| async move { n })).await;
    assert_eq!(outcome.unwrap_or_default(), vec![1, 2, 3]);
}

#[rstest]
#[tokio::test]
async fn from_future_all_preserves_order_despite_timing() {
    // The first future finishes last; order must follow input, not
    // completion time.
    let slow = async {
        tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        1
    };
    let fast = async { 2 };
    let outcome = from_future_all(vec![slow.boxed(), fast.boxed()]).await;
    assert_eq!(outcome.unwrap_or_default(), vec![1, 2]);
}

#[rstest]
#[tokio::test]
async fn from_future_all_reports_a_single_failure() {
    let futures = vec![
        async { 1 }.boxed(),
        async { panic!("bad") }.boxed(),
        async { 3 }.boxed(),
    ];
    let outcome = from_future_all(futures).await;
    let payload = outcome.failure().unwrap();
    assert_eq!(panic_message(&payload), Some("bad"));
}

#[rstest]
#[tokio::test]
async fn from_future_all_reports_the_first_failure_in_input_order() {
    let futures = vec![
        async { panic!("first") }.boxed(),
        async { panic!("second") }.boxed(),
    ];
    let outcome: Outcome<Vec<()>, _> = from_future_all(futures).await;
    let payload = outcome.failure().unwrap();
    assert_eq!(panic_message(&payload), Some("first"));
}

#[rstest]
#[tokio::test]
async fn from_future_all_with_maps_the_payload() {
    let futures = vec![async { 1 }.boxed(), async { panic!("bad") }.boxed()];
    let outcome = from_future_all_with(futures, |payload| {
        panic_message(&payload).unwrap_or("unknown panic").to_string()
    })
    .await;
    assert_eq!(outcome, Outcome::Failure("bad".to_string()));
}

// =============================================================================
// Async Value Combinators
// =============================================================================

#[rstest]
#[tokio::test]
async fn map_async_transforms_success_only() {
    let success: Outcome<i32, String> = Outcome::Success(21);
    let result = map_async(success, |n| async move { n * 2 }).await;
    assert_eq!(result, Outcome::Success(42));

    let calls = Arc::new(AtomicUsize::new(0));
    let probe = Arc::clone(&calls);
    let failure: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    let result = map_async(failure, move |n| {
        probe.fetch_add(1, Ordering::SeqCst);
        async move { n * 2 }
    })
    .await;
    assert_eq!(result, Outcome::Failure("oops".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn and_then_async_chains_fallible_steps() {
    let success: Outcome<i32, String> = Outcome::Success(8);
    let result = and_then_async(success, |n| async move {
        if n % 2 == 0 {
            Outcome::Success(n / 2)
        } else {
            Outcome::Failure("odd".to_string())
        }
    })
    .await;
    assert_eq!(result, Outcome::Success(4));
}

#[rstest]
#[tokio::test]
async fn or_else_async_recovers_and_may_retype() {
    let failure: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    let result: Outcome<i32, usize> =
        or_else_async(failure, |_| async move { Outcome::Success(0) }).await;
    assert_eq!(result, Outcome::Success(0));
}

#[rstest]
#[tokio::test]
async fn map_failure_async_transforms_failure_only() {
    let failure: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    let result = map_failure_async(failure, |e| async move { e.len() }).await;
    assert_eq!(result, Outcome::Failure(4));
}

// =============================================================================
// Stream Adapter
// =============================================================================

#[rstest]
#[tokio::test]
async fn try_map_stream_yields_one_outcome_per_item_in_order() {
    let input = futures::stream::iter([1, 2, 3]);
    let outcomes: Vec<_> = try_map_stream(input, |n| async move { n * 10 })
        .collect()
        .await;
    assert_eq!(
        outcomes.into_iter().map(|o| o.unwrap_or(0)).collect::<Vec<_>>(),
        vec![10, 20, 30]
    );
}

#[rstest]
#[tokio::test]
async fn try_map_stream_represents_a_panicking_step_without_ending() {
    let input = futures::stream::iter([1, 2, 3]);
    let outcomes: Vec<_> = try_map_stream(input, |n| async move {
        assert!(n != 2, "two");
        n
    })
    .collect()
    .await;
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].is_success());
    assert!(outcomes[1].is_failure());
    assert!(outcomes[2].is_success());
}
