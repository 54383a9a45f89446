//! Outcome type - a computed value or a failure carrying an error.
//!
//! This module provides the `Outcome<T, E>` type, a tagged union of
//! exactly two variants: `Success(T)` and `Failure(E)`. It is the
//! success-or-failure half of the core algebra; failures flow through
//! the combinators as ordinary data and are never thrown.
//!
//! # Examples
//!
//! ```rust
//! use outcomars::outcome::Outcome;
//!
//! fn halve(n: i32) -> Outcome<i32, String> {
//!     if n % 2 == 0 {
//!         Outcome::Success(n / 2)
//!     } else {
//!         Outcome::Failure(format!("{} is odd", n))
//!     }
//! }
//!
//! let result = halve(8).and_then(halve);
//! assert_eq!(result, Outcome::Success(2));
//!
//! let result = halve(8).and_then(halve).and_then(halve).and_then(halve);
//! assert_eq!(result, Outcome::Failure("1 is odd".to_string()));
//! ```

use std::fmt;
use std::hash::Hash;

use super::Maybe;

/// A computed value or a failure carrying an error payload.
///
/// `Outcome<T, E>` is either `Success(value)` or `Failure(error)`.
/// Exactly one payload slot is populated and the tag is the single
/// source of truth for which one. Every combinator consumes the
/// receiver and produces a new value; nothing is mutated in place.
///
/// Only [`unwrap`](Self::unwrap) and [`expect`](Self::expect) abandon
/// the algebra by panicking; every other operation is total over its
/// stated domain.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error payload
///
/// # Examples
///
/// ```rust
/// use outcomars::outcome::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::Success(42);
/// let doubled = success.map(|x| x * 2);
/// assert_eq!(doubled, Outcome::Success(84));
/// ```
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with an error payload.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert!(success.is_success());
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    /// assert!(!failure.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    /// assert!(failure.is_failure());
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert!(!success.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value, leaving a failure
    /// untouched.
    ///
    /// A `Failure` passes through with its original error; it is not
    /// re-wrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(21);
    /// assert_eq!(success.map(|x| x * 2), Outcome::Success(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    /// assert_eq!(failure.map(|x| x * 2), Outcome::Failure("oops".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, operation: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(operation(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a function to the error payload, leaving a success
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    /// assert_eq!(failure.map_failure(|e| e.len()), Outcome::Failure(4));
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.map_failure(|e| e.len()), Outcome::Success(42));
    /// ```
    #[inline]
    pub fn map_failure<F, G>(self, operation: G) -> Outcome<T, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(operation(error)),
        }
    }

    /// Applies exactly one of two functions depending on the tag,
    /// producing a new `Outcome` with both channels potentially
    /// retyped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(21);
    /// let result = success.bimap(|x| x * 2, |e: String| e.len());
    /// assert_eq!(result, Outcome::Success(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    /// let result = failure.bimap(|x: i32| x * 2, |e| e.len());
    /// assert_eq!(result, Outcome::Failure(4));
    /// ```
    #[inline]
    pub fn bimap<U, F, G, H>(self, success_operation: G, failure_operation: H) -> Outcome<U, F>
    where
        G: FnOnce(T) -> U,
        H: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(success_operation(value)),
            Self::Failure(error) => Outcome::Failure(failure_operation(error)),
        }
    }

    /// Folds into a plain value: `operation(value)` on success,
    /// otherwise the given default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Outcome;
    ///
    /// let success: Outcome<&str, String> = Outcome::Success("hello");
    /// assert_eq!(success.map_or(0, |s| s.len()), 5);
    ///
    /// let failure: Outcome<&str, String> = Outcome::Failure("oops".to_string());
    /// assert_eq!(failure.map_or(0, |s| s.len()), 0);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, operation: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => operation(value),
            Self::Failure(_) => default,
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Outcome` by applying one of two functions.
    ///
    /// This is the canonical eliminator; both channels fold into the
    /// same output type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.fold(|x| x.to_string(), |e| e), "42");
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    /// assert_eq!(failure.fold(|x| x.to_string(), |e| e), "oops");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, success_operation: F, failure_operation: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Self::Success(value) => success_operation(value),
            Self::Failure(error) => failure_operation(error),
        }
    }

    // =========================================================================
    // Monadic Bind and Recovery
    // =========================================================================

    /// Chains a computation that may itself fail.
    ///
    /// If this is `Success(value)`, returns `operation(value)`.
    /// If this is `Failure`, short-circuits without invoking the
    /// function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Outcome;
    ///
    /// fn checked_double(n: i32) -> Outcome<i32, String> {
    ///     if n < 100 {
    ///         Outcome::Success(n * 2)
    ///     } else {
    ///         Outcome::Failure("overflow".to_string())
    ///     }
    /// }
    ///
    /// let result: Outcome<i32, String> = Outcome::Success(21).and_then(checked_double);
    /// assert_eq!(result, Outcome::Success(42));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, operation: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => operation(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a recovery computation on the failure channel.
    ///
    /// If this is `Failure(error)`, returns `operation(error)` - the
    /// recovery may itself fail with a new error type. If this is
    /// `Success`, short-circuits without invoking the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    /// let recovered: Outcome<i32, usize> = failure.or_else(|e| {
    ///     if e == "oops" {
    ///         Outcome::Success(0)
    ///     } else {
    ///         Outcome::Failure(e.len())
    ///     }
    /// });
    /// assert_eq!(recovered, Outcome::Success(0));
    /// ```
    #[inline]
    pub fn or_else<F, G>(self, operation: G) -> Outcome<T, F>
    where
        G: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => operation(error),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Invokes a function for its side effect on the success value,
    /// returning the original `Outcome` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Outcome;
    ///
    /// let mut seen = None;
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// let result = success.inspect(|value| seen = Some(*value));
    /// assert_eq!(result, Outcome::Success(42));
    /// assert_eq!(seen, Some(42));
    /// ```
    #[inline]
    pub fn inspect<F>(self, operation: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            operation(value);
        }
        self
    }

    /// Invokes a function for its side effect on the error payload,
    /// returning the original `Outcome` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Outcome;
    ///
    /// let mut seen = None;
    /// let failure: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    /// let result = failure.inspect_failure(|error| seen = Some(error.clone()));
    /// assert_eq!(result, Outcome::Failure("oops".to_string()));
    /// assert_eq!(seen, Some("oops".to_string()));
    /// ```
    #[inline]
    pub fn inspect_failure<F>(self, operation: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            operation(error);
        }
        self
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the success value or the given default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.unwrap_or(7), 42);
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    /// assert_eq!(failure.unwrap_or(7), 7);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Outcome;
    ///
    /// let failure: Outcome<usize, String> = Outcome::Failure("oops".to_string());
    /// assert_eq!(failure.unwrap_or_else(|e| e.len()), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, operation: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => operation(error),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts the success channel to a [`Maybe`], discarding the
    /// error.
    ///
    /// `Success(value)` becomes `Present(value)`; `Failure` becomes
    /// `Absent`. The error payload is dropped, never invented back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::{Maybe, Outcome};
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.success(), Maybe::Present(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    /// assert_eq!(failure.success(), Maybe::Absent);
    /// ```
    #[inline]
    pub fn success(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Present(value),
            Self::Failure(_) => Maybe::Absent,
        }
    }

    /// Converts the failure channel to a [`Maybe`], discarding the
    /// value.
    ///
    /// `Failure(error)` becomes `Present(error)`; `Success` becomes
    /// `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::{Maybe, Outcome};
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    /// assert_eq!(failure.failure(), Maybe::Present("oops".to_string()));
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.failure(), Maybe::Absent);
    /// ```
    #[inline]
    pub fn failure(self) -> Maybe<E> {
        match self {
            Self::Success(_) => Maybe::Absent,
            Self::Failure(error) => Maybe::Present(error),
        }
    }

    /// Converts a standard `Option` to an `Outcome`, treating `None`
    /// as failure with the given error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::from_option(Some(42), "missing"), Outcome::Success(42));
    /// assert_eq!(Outcome::<i32, _>::from_option(None, "missing"), Outcome::Failure("missing"));
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>, error: E) -> Self {
        match option {
            Some(value) => Self::Success(value),
            None => Self::Failure(error),
        }
    }
}

// =============================================================================
// Default-based Extraction
// =============================================================================

impl<T: Default, E> Outcome<T, E> {
    /// Returns the success value, or `T::default()` on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.unwrap_or_default(), 42);
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("oops".to_string());
    /// assert_eq!(failure.unwrap_or_default(), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }
}

// =============================================================================
// Fatal Extraction (requires a renderable error)
// =============================================================================

impl<T, E: fmt::Debug> Outcome<T, E> {
    /// Returns the success value, consuming the `Outcome`.
    ///
    /// Reserved for call sites that have already proven success; this
    /// operation abandons the algebra on failure, rendering the stored
    /// error into the panic message so the cause is never lost.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`, with the error rendered via
    /// `Debug`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.unwrap(), 42);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("called `Outcome::unwrap()` on a `Failure` value: {error:?}")
            }
        }
    }

    /// Returns the success value, panicking with a caller-supplied
    /// message on failure.
    ///
    /// The panic message is the given message followed by the stored
    /// error rendered via `Debug`; the error is never silently
    /// discarded.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`, with `message` prefixed to the
    /// rendered error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.expect("port must parse"), 42);
    /// ```
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("{message}: {error:?}"),
        }
    }
}

// =============================================================================
// Flatten (statically restricted to nested outcomes)
// =============================================================================

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting from an `Outcome` whose success
    /// value is itself an `Outcome` with the same error type.
    ///
    /// This method only exists on `Outcome<Outcome<T, E>, E>`, so a
    /// call on a non-nested outcome is a compile-time error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::Success(Outcome::Success(5));
    /// assert_eq!(nested.flatten(), Outcome::Success(5));
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::Success(Outcome::Failure("x"));
    /// assert_eq!(nested.flatten(), Outcome::Failure("x"));
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::Failure("y");
    /// assert_eq!(nested.flatten(), Outcome::Failure("y"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Converts a standard `Result` to an `Outcome`.
    ///
    /// `Ok(value)` becomes `Success(value)`, and `Err(error)` becomes
    /// `Failure(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Outcome;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let outcome: Outcome<i32, String> = ok.into();
    /// assert_eq!(outcome, Outcome::Success(42));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// Converts an `Outcome` to a standard `Result`.
    ///
    /// `Success(value)` becomes `Ok(value)`, and `Failure(error)`
    /// becomes `Err(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(42);
    /// let result: Result<i32, String> = outcome.into();
    /// assert_eq!(result, Ok(42));
    /// ```
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
