//! # outcomars
//!
//! Explicit outcome types for Rust-style error handling without panics
//! or sentinel values as control flow.
//!
//! ## Overview
//!
//! This library provides a small algebra of outcome types and a closed
//! set of combinators for composing computations that may be absent or
//! may fail:
//!
//! - **Core algebras**: [`Maybe`](outcome::Maybe) (a value that may be
//!   absent) and [`Outcome`](outcome::Outcome) (a value or an error
//!   payload), with map/chain/fold/recovery combinators and a
//!   conversion layer between the two
//! - **Sequence combinators**: apply a fallible operation across an
//!   ordered sequence, short-circuiting on the first failure, with
//!   synchronous and asynchronous variants
//! - **Bridges**: adapt panicking functions, futures, and streams into
//!   the `Outcome` algebra, and materialize an `Outcome` back into the
//!   panic/future idiom
//! - **Error normalization**: give arbitrary caught panic payloads a
//!   consistent message-plus-cause shape
//!
//! ## Feature Flags
//!
//! - `outcome`: The `Maybe` and `Outcome` algebras
//! - `seq`: Sequence combinators (`try_map`, `try_filter`, ...)
//! - `bridge`: Panic bridge (`try_catch`)
//! - `async`: Future and stream bridges, async sequence combinators
//! - `normalize`: Panic payload normalization
//! - `serde`: `Serialize`/`Deserialize` for the core types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use outcomars::prelude::*;
//!
//! let doubled = try_map([1, 2, 3], |n| {
//!     if n < 10 {
//!         Outcome::Success(n * 2)
//!     } else {
//!         Outcome::Failure("too large")
//!     }
//! });
//! assert_eq!(doubled, Outcome::Success(vec![2, 4, 6]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use outcomars::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "outcome")]
    pub use crate::outcome::*;

    #[cfg(feature = "seq")]
    pub use crate::seq::*;

    #[cfg(feature = "bridge")]
    pub use crate::bridge::*;

    #[cfg(feature = "normalize")]
    pub use crate::error::*;
}

#[cfg(feature = "outcome")]
pub mod outcome;

#[cfg(feature = "seq")]
pub mod seq;

#[cfg(feature = "bridge")]
pub mod bridge;

#[cfg(feature = "normalize")]
pub mod error;
