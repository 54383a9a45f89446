//! Core outcome algebras.
//!
//! This module provides the two tagged-union types at the heart of the
//! library:
//!
//! - [`Maybe`]: a value that may or may not be present
//! - [`Outcome`]: a computed value or a failure carrying an error payload
//!
//! Both types are immutable: every combinator consumes its receiver and
//! produces a new value. The conversion layer between the two lives on
//! the types themselves ([`Outcome::success`], [`Outcome::failure`],
//! [`Maybe::require`]).
//!
//! # Examples
//!
//! ## Branching on an Outcome
//!
//! ```rust
//! use outcomars::outcome::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Outcome::Success(port),
//!         Err(error) => Outcome::Failure(error.to_string()),
//!     }
//! }
//!
//! let port = parse_port("8080").map(|port| port + 1);
//! assert_eq!(port, Outcome::Success(8081));
//! ```
//!
//! ## Recovering a missing value
//!
//! ```rust
//! use outcomars::outcome::Maybe;
//!
//! let absent: Maybe<i32> = Maybe::Absent;
//! assert_eq!(absent.unwrap_or(7), 7);
//! ```

mod maybe;
#[allow(clippy::module_inception)]
mod outcome;

pub use maybe::Maybe;
pub use outcome::Outcome;
