//! Unit tests for the Maybe<T> type.
//!
//! Maybe represents a value that may or may not be present:
//! - `Present(T)`: a value exists
//! - `Absent`: no value
//!
//! Tests cover construction, predicates, mapping, folding, chaining,
//! extraction, and the conversion layer to Outcome and std Option.

#![cfg(feature = "outcome")]

use outcomars::outcome::{Maybe, Outcome};
use rstest::rstest;

// =============================================================================
// Construction and Type Checking
// =============================================================================

#[rstest]
fn maybe_present_is_present() {
    let value = Maybe::Present(42);
    assert!(value.is_present());
    assert!(!value.is_absent());
}

#[rstest]
fn maybe_absent_is_absent() {
    let value: Maybe<i32> = Maybe::Absent;
    assert!(value.is_absent());
    assert!(!value.is_present());
}

#[rstest]
fn maybe_default_is_absent() {
    let value: Maybe<i32> = Maybe::default();
    assert!(value.is_absent());
}

// =============================================================================
// Mapping Operations
// =============================================================================

#[rstest]
fn maybe_map_on_present() {
    let value = Maybe::Present("hello");
    assert_eq!(value.map(|s| s.len()), Maybe::Present(5));
}

#[rstest]
fn maybe_map_on_absent() {
    let value: Maybe<&str> = Maybe::Absent;
    assert_eq!(value.map(|s| s.len()), Maybe::Absent);
}

#[rstest]
fn maybe_map_never_invokes_function_on_absent() {
    let mut calls = 0;
    let value: Maybe<i32> = Maybe::Absent;
    let _ = value.map(|n| {
        calls += 1;
        n
    });
    assert_eq!(calls, 0);
}

#[rstest]
fn maybe_map_or_folds_both_channels() {
    assert_eq!(Maybe::Present("hello").map_or(0, |s| s.len()), 5);

    let absent: Maybe<&str> = Maybe::Absent;
    assert_eq!(absent.map_or(0, |s| s.len()), 0);
}

#[rstest]
fn maybe_map_or_else_defers_the_default() {
    let mut default_calls = 0;
    let result = Maybe::Present(3).map_or_else(
        || {
            default_calls += 1;
            0
        },
        |n| n * 2,
    );
    assert_eq!(result, 6);
    assert_eq!(default_calls, 0);

    let absent: Maybe<i32> = Maybe::Absent;
    assert_eq!(absent.map_or_else(|| 99, |n| n * 2), 99);
}

// =============================================================================
// Monadic Bind and Inspection
// =============================================================================

#[rstest]
fn maybe_and_then_chains_present() {
    let result = Maybe::Present(4).and_then(|n| {
        if n % 2 == 0 {
            Maybe::Present(n / 2)
        } else {
            Maybe::Absent
        }
    });
    assert_eq!(result, Maybe::Present(2));
}

#[rstest]
fn maybe_and_then_propagates_absent_without_invoking() {
    let mut calls = 0;
    let absent: Maybe<i32> = Maybe::Absent;
    let result = absent.and_then(|n| {
        calls += 1;
        Maybe::Present(n)
    });
    assert_eq!(result, Maybe::Absent);
    assert_eq!(calls, 0);
}

#[rstest]
fn maybe_inspect_peeks_and_returns_original() {
    let mut seen = None;
    let result = Maybe::Present(42).inspect(|value| seen = Some(*value));
    assert_eq!(result, Maybe::Present(42));
    assert_eq!(seen, Some(42));
}

#[rstest]
fn maybe_inspect_skips_absent() {
    let mut calls = 0;
    let absent: Maybe<i32> = Maybe::Absent;
    let result = absent.inspect(|_| calls += 1);
    assert_eq!(result, Maybe::Absent);
    assert_eq!(calls, 0);
}

// =============================================================================
// Value Extraction
// =============================================================================

#[rstest]
fn maybe_unwrap_on_present() {
    assert_eq!(Maybe::Present(42).unwrap(), 42);
}

#[rstest]
#[should_panic(expected = "called `Maybe::unwrap()` on an `Absent` value")]
fn maybe_unwrap_on_absent_panics() {
    let absent: Maybe<i32> = Maybe::Absent;
    let _ = absent.unwrap();
}

#[rstest]
fn maybe_unwrap_or_is_total() {
    assert_eq!(Maybe::Present(42).unwrap_or(7), 42);

    let absent: Maybe<i32> = Maybe::Absent;
    assert_eq!(absent.unwrap_or(7), 7);
}

#[rstest]
fn maybe_unwrap_or_else_is_total() {
    assert_eq!(Maybe::Present(42).unwrap_or_else(|| 7), 42);

    let absent: Maybe<i32> = Maybe::Absent;
    assert_eq!(absent.unwrap_or_else(|| 7), 7);
}

// =============================================================================
// Conversion Layer
// =============================================================================

#[rstest]
fn maybe_require_converts_absence_to_failure() {
    assert_eq!(Maybe::Present(42).require("missing"), Outcome::Success(42));

    let absent: Maybe<i32> = Maybe::Absent;
    assert_eq!(absent.require("missing"), Outcome::Failure("missing"));
}

#[rstest]
fn maybe_require_with_builds_error_lazily() {
    let mut calls = 0;
    let result = Maybe::Present(42).require_with(|| {
        calls += 1;
        "missing"
    });
    assert_eq!(result, Outcome::Success(42));
    assert_eq!(calls, 0);

    let absent: Maybe<i32> = Maybe::Absent;
    assert_eq!(absent.require_with(|| "missing"), Outcome::Failure("missing"));
}

#[rstest]
fn maybe_option_conversion_roundtrip() {
    let maybe: Maybe<i32> = Some(42).into();
    assert_eq!(maybe, Maybe::Present(42));
    let option: Option<i32> = maybe.into();
    assert_eq!(option, Some(42));

    let maybe: Maybe<i32> = None.into();
    assert_eq!(maybe, Maybe::Absent);
}

#[rstest]
fn maybe_debug_rendering() {
    assert_eq!(format!("{:?}", Maybe::Present(42)), "Present(42)");
    let absent: Maybe<i32> = Maybe::Absent;
    assert_eq!(format!("{absent:?}"), "Absent");
}
