//! Bridges between the outcome algebra and the host fault idiom.
//!
//! Rust's native fault path is the panic, and its asynchronous
//! computation is the future; a rejecting promise corresponds to a
//! panicking future. The functions in this module are the only
//! sanctioned crossing points between that world and the
//! [`Outcome`](crate::outcome::Outcome) algebra:
//!
//! - [`try_catch`] / [`try_catch_with`]: run a closure, converting any
//!   panic into a `Failure`
//! - `from_future`, `async_try_catch`, `from_future_all` (behind the
//!   `async` feature): the same for futures
//! - `to_future`: materialize an `Outcome` back into a future that
//!   resolves or panics
//! - `try_map_stream`: map a stream with a caught asynchronous step
//!
//! The bridges catch unconditionally: any panic payload is captured,
//! not just `Error`-shaped ones. To give payloads a consistent shape,
//! compose with [`normalize`](crate::error::normalize):
//!
//! ```rust
//! use outcomars::bridge::try_catch_with;
//! use outcomars::error::normalize;
//!
//! let outcome = try_catch_with(
//!     || -> i32 { panic!("boom") },
//!     |payload| normalize(payload, "computation failed"),
//! );
//! assert_eq!(outcome.failure().unwrap().message(), "boom");
//! ```

mod catch;

#[cfg(feature = "async")]
mod future;

#[cfg(feature = "async")]
mod stream;

pub use catch::{PanicPayload, panic_message, try_catch, try_catch_with};

#[cfg(feature = "async")]
pub use future::{
    and_then_async, async_try_catch, async_try_catch_with, from_future, from_future_all,
    from_future_all_with, from_future_with, map_async, map_failure_async, or_else_async,
    to_future,
};

#[cfg(feature = "async")]
pub use stream::try_map_stream;
