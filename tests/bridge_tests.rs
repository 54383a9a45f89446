//! Unit tests for the synchronous panic bridge.
//!
//! The bridge must catch unconditionally: any panic payload, not just
//! `Error`-shaped ones, becomes a represented `Failure`. These tests
//! also verify the two sanctioned fatal exits (`unwrap`, `expect`)
//! carry full context back to the panic path.

#![cfg(feature = "bridge")]

use std::panic::{AssertUnwindSafe, catch_unwind};

use outcomars::bridge::{panic_message, try_catch, try_catch_with};
use outcomars::outcome::Outcome;
use rstest::rstest;

// =============================================================================
// Bridge Totality
// =============================================================================

#[rstest]
fn try_catch_wraps_normal_return_as_success() {
    let outcome = try_catch(|| 42);
    assert_eq!(outcome.unwrap_or(0), 42);
}

#[rstest]
fn try_catch_captures_string_panics() {
    let outcome = try_catch(|| -> i32 { panic!("boom") });
    let payload = outcome.failure().unwrap();
    assert_eq!(panic_message(&payload), Some("boom"));
}

#[rstest]
fn try_catch_captures_formatted_panics() {
    let outcome = try_catch(|| -> i32 { panic!("boom {}", 7) });
    let payload = outcome.failure().unwrap();
    assert_eq!(panic_message(&payload), Some("boom 7"));
}

#[rstest]
fn try_catch_captures_arbitrary_payloads() {
    let outcome = try_catch(|| -> i32 { std::panic::panic_any(vec![1, 2, 3]) });
    let payload = outcome.failure().unwrap();
    assert_eq!(panic_message(&payload), None);
    assert_eq!(payload.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2, 3]));
}

#[rstest]
fn try_catch_with_maps_the_payload() {
    let outcome = try_catch_with(
        || -> i32 { panic!("boom") },
        |payload| panic_message(&payload).unwrap_or("unknown panic").to_string(),
    );
    assert_eq!(outcome, Outcome::Failure("boom".to_string()));
}

#[rstest]
fn try_catch_with_leaves_success_unmapped() {
    let mut mapper_calls = 0;
    let outcome = try_catch_with(
        || 42,
        |_| {
            mapper_calls += 1;
            "unused".to_string()
        },
    );
    assert_eq!(outcome, Outcome::Success(42));
    assert_eq!(mapper_calls, 0);
}

// =============================================================================
// Fatal Exits Carry Context
// =============================================================================

#[rstest]
fn unwrap_fatality_renders_the_stored_error() {
    let result = catch_unwind(AssertUnwindSafe(|| {
        let failure: Outcome<i32, &str> = Outcome::Failure("boom");
        failure.unwrap()
    }));
    let payload = result.unwrap_err();
    let message = payload.downcast_ref::<String>().unwrap();
    assert!(message.contains("Outcome::unwrap()"));
    assert!(message.contains("boom"));
}

#[rstest]
fn expect_fatality_contains_context_and_error() {
    let result = catch_unwind(AssertUnwindSafe(|| {
        let failure: Outcome<i32, &str> = Outcome::Failure("boom");
        failure.expect("ctx")
    }));
    let payload = result.unwrap_err();
    let message = payload.downcast_ref::<String>().unwrap();
    assert!(message.contains("ctx"));
    assert!(message.contains("boom"));
}

#[rstest]
fn absent_unwrap_is_fatal() {
    use outcomars::outcome::Maybe;

    let result = catch_unwind(|| {
        let absent: Maybe<i32> = Maybe::Absent;
        absent.unwrap()
    });
    assert!(result.is_err());
}
