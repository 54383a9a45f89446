//! Synchronous panic bridge.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::outcome::Outcome;

/// The payload carried by a caught panic.
///
/// This is the type produced by `std::panic::catch_unwind`; a plain
/// `panic!("...")` carries a `String` or `&'static str`, while
/// `std::panic::panic_any` can carry any sendable value.
pub type PanicPayload = Box<dyn Any + Send + 'static>;

/// Runs a closure, converting any panic into a `Failure`.
///
/// A normal return becomes `Success(value)`; a panic of any payload
/// shape (string, custom value, anything) becomes
/// `Failure(payload)`. The panic never propagates past this call.
///
/// # Examples
///
/// ```rust
/// use outcomars::bridge::{panic_message, try_catch};
///
/// let fine = try_catch(|| 42);
/// assert_eq!(fine.unwrap_or(0), 42);
///
/// let caught = try_catch(|| -> i32 { panic!("boom") });
/// let payload = caught.failure().unwrap();
/// assert_eq!(panic_message(&payload), Some("boom"));
/// ```
pub fn try_catch<T, F>(operation: F) -> Outcome<T, PanicPayload>
where
    F: FnOnce() -> T,
{
    catch_unwind(AssertUnwindSafe(operation)).into()
}

/// Runs a closure, converting any panic into a `Failure` mapped
/// through the given error mapper.
///
/// # Examples
///
/// ```rust
/// use outcomars::bridge::{panic_message, try_catch_with};
/// use outcomars::outcome::Outcome;
///
/// let caught = try_catch_with(
///     || -> i32 { panic!("boom") },
///     |payload| panic_message(&payload).unwrap_or("unknown panic").to_string(),
/// );
/// assert_eq!(caught, Outcome::Failure("boom".to_string()));
/// ```
pub fn try_catch_with<T, E, F, M>(operation: F, map_error: M) -> Outcome<T, E>
where
    F: FnOnce() -> T,
    M: FnOnce(PanicPayload) -> E,
{
    try_catch(operation).map_failure(map_error)
}

/// Views the textual message of a panic payload, if it has one.
///
/// Returns the string for payloads produced by `panic!` with a string
/// message (`&'static str` or formatted `String`); returns `None` for
/// any other payload type.
///
/// # Examples
///
/// ```rust
/// use outcomars::bridge::{panic_message, try_catch};
///
/// let caught = try_catch(|| -> () { panic!("boom {}", 7) });
/// let payload = caught.failure().unwrap();
/// assert_eq!(panic_message(&payload), Some("boom 7"));
/// ```
#[must_use]
pub fn panic_message(payload: &PanicPayload) -> Option<&str> {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}
