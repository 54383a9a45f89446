//! Sequence combinators for fallible operations.
//!
//! This module applies a fallible operation across an ordered sequence
//! of inputs, short-circuiting on the first failure:
//!
//! - [`try_map`], [`try_filter`], [`try_find`], [`try_for_each`],
//!   [`try_reduce`]: synchronous combinators over any `IntoIterator`
//! - [`collect`], [`partition`]: aggregate a sequence of outcomes
//! - `try_map_async` and friends (behind the `async` feature): the
//!   same contract with each step awaited to settlement before the
//!   next begins
//!
//! All combinators visit elements in input order; once an element
//! yields a `Failure`, no later element is visited and that failure is
//! returned unchanged.
//!
//! # Examples
//!
//! ```rust
//! use outcomars::outcome::Outcome;
//! use outcomars::seq::try_map;
//!
//! let parsed = try_map(["1", "2", "3"], |raw| {
//!     Outcome::from(raw.parse::<i32>()).map_failure(|e| e.to_string())
//! });
//! assert_eq!(parsed, Outcome::Success(vec![1, 2, 3]));
//! ```

mod sequence;

#[cfg(feature = "async")]
mod sequence_async;

pub use sequence::{collect, partition, try_filter, try_find, try_for_each, try_map, try_reduce};

#[cfg(feature = "async")]
pub use sequence_async::{
    try_filter_async, try_find_async, try_for_each_async, try_map_async, try_reduce_async,
};
