//! Maybe type - a value that may or may not be present.
//!
//! This module provides the `Maybe<T>` type, a tagged union of exactly
//! two variants: `Present(T)` and `Absent`. It carries no error
//! context; when a reason for the absence matters, convert to an
//! [`Outcome`] with [`Maybe::require`].
//!
//! # Examples
//!
//! ```rust
//! use outcomars::outcome::Maybe;
//!
//! // Creating Maybe values
//! let present = Maybe::Present(42);
//! let absent: Maybe<i32> = Maybe::Absent;
//!
//! // Pattern matching
//! match present {
//!     Maybe::Present(n) => println!("Got value: {}", n),
//!     Maybe::Absent => println!("Nothing there"),
//! }
//!
//! // Folding into a plain value
//! let length = Maybe::Present("hello").map_or(0, |s| s.len());
//! assert_eq!(length, 5);
//! ```

use std::fmt;
use std::hash::Hash;

use super::Outcome;

/// A value that may or may not be present.
///
/// `Maybe<T>` is either `Present(value)` or `Absent`. There is no other
/// state, and the tag is the single source of truth. Every combinator
/// consumes the receiver and produces a new value; nothing is mutated
/// in place.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use outcomars::outcome::Maybe;
///
/// let present = Maybe::Present(21);
/// let doubled = present.map(|n| n * 2);
/// assert_eq!(doubled, Maybe::Present(42));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A value is present.
    Present(T),
    /// No value.
    Absent,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Maybe;
    ///
    /// assert!(Maybe::Present(42).is_present());
    ///
    /// let absent: Maybe<i32> = Maybe::Absent;
    /// assert!(!absent.is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::Absent;
    /// assert!(absent.is_absent());
    ///
    /// assert!(!Maybe::Present(42).is_absent());
    /// ```
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the contained value if present.
    ///
    /// If this is `Present(value)`, returns `Present(operation(value))`.
    /// If this is `Absent`, returns `Absent` and the function is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Maybe;
    ///
    /// let present = Maybe::Present("hello");
    /// assert_eq!(present.map(|s| s.len()), Maybe::Present(5));
    ///
    /// let absent: Maybe<&str> = Maybe::Absent;
    /// assert_eq!(absent.map(|s| s.len()), Maybe::Absent);
    /// ```
    #[inline]
    pub fn map<U, F>(self, operation: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(operation(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Folds into a plain value: `operation(value)` if present,
    /// otherwise the given default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Maybe;
    ///
    /// assert_eq!(Maybe::Present("hello").map_or(0, |s| s.len()), 5);
    ///
    /// let absent: Maybe<&str> = Maybe::Absent;
    /// assert_eq!(absent.map_or(0, |s| s.len()), 0);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, operation: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => operation(value),
            Self::Absent => default,
        }
    }

    /// Folds into a plain value: `operation(value)` if present,
    /// otherwise the result of the default thunk.
    ///
    /// The thunk is only invoked on `Absent`, so an expensive default
    /// is never computed needlessly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Maybe;
    ///
    /// let absent: Maybe<&str> = Maybe::Absent;
    /// assert_eq!(absent.map_or_else(|| 99, |s| s.len()), 99);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, operation: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => operation(value),
            Self::Absent => default(),
        }
    }

    // =========================================================================
    // Monadic Bind
    // =========================================================================

    /// Chains a computation that itself may produce no value.
    ///
    /// If this is `Present(value)`, returns `operation(value)`.
    /// If this is `Absent`, propagates `Absent` without invoking the
    /// function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Maybe;
    ///
    /// fn first_char(s: &str) -> Maybe<char> {
    ///     match s.chars().next() {
    ///         Some(c) => Maybe::Present(c),
    ///         None => Maybe::Absent,
    ///     }
    /// }
    ///
    /// assert_eq!(Maybe::Present("hi").and_then(first_char), Maybe::Present('h'));
    /// assert_eq!(Maybe::Present("").and_then(first_char), Maybe::Absent);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, operation: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => operation(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Invokes a function for its side effect if present, returning
    /// the original `Maybe` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Maybe;
    ///
    /// let mut seen = None;
    /// let result = Maybe::Present(42).inspect(|value| seen = Some(*value));
    /// assert_eq!(result, Maybe::Present(42));
    /// assert_eq!(seen, Some(42));
    /// ```
    #[inline]
    pub fn inspect<F>(self, operation: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            operation(value);
        }
        self
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value, consuming the `Maybe`.
    ///
    /// Reserved for call sites that have already proven presence; this
    /// is the one operation on `Maybe` that abandons the algebra.
    ///
    /// # Panics
    ///
    /// Panics if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Maybe;
    ///
    /// assert_eq!(Maybe::Present(42).unwrap(), 42);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("called `Maybe::unwrap()` on an `Absent` value"),
        }
    }

    /// Returns the contained value or the given default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Maybe;
    ///
    /// assert_eq!(Maybe::Present(42).unwrap_or(7), 42);
    ///
    /// let absent: Maybe<i32> = Maybe::Absent;
    /// assert_eq!(absent.unwrap_or(7), 7);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the contained value or computes one from the thunk.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::Absent;
    /// assert_eq!(absent.unwrap_or_else(|| 6 + 1), 7);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => default(),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts to an [`Outcome`], treating absence as failure with the
    /// given error.
    ///
    /// `Present(value)` becomes `Success(value)`; `Absent` becomes
    /// `Failure(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::{Maybe, Outcome};
    ///
    /// assert_eq!(Maybe::Present(42).require("missing"), Outcome::Success(42));
    ///
    /// let absent: Maybe<i32> = Maybe::Absent;
    /// assert_eq!(absent.require("missing"), Outcome::Failure("missing"));
    /// ```
    #[inline]
    pub fn require<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(error),
        }
    }

    /// Converts to an [`Outcome`], building the error lazily.
    ///
    /// The thunk is only invoked on `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::{Maybe, Outcome};
    ///
    /// let absent: Maybe<i32> = Maybe::Absent;
    /// let outcome = absent.require_with(|| format!("missing at {}", 3));
    /// assert_eq!(outcome, Outcome::Failure("missing at 3".to_string()));
    /// ```
    #[inline]
    pub fn require_with<E, F>(self, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(error()),
        }
    }
}

// =============================================================================
// Default-based Extraction
// =============================================================================

impl<T: Default> Maybe<T> {
    /// Returns the contained value, or `T::default()` if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Maybe;
    ///
    /// assert_eq!(Maybe::Present(42).unwrap_or_default(), 42);
    ///
    /// let absent: Maybe<i32> = Maybe::Absent;
    /// assert_eq!(absent.unwrap_or_default(), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => T::default(),
        }
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<T> Default for Maybe<T> {
    /// Returns `Absent`.
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts a standard `Option` to a `Maybe`.
    ///
    /// `Some(value)` becomes `Present(value)`, and `None` becomes
    /// `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Maybe;
    ///
    /// let maybe: Maybe<i32> = Some(42).into();
    /// assert_eq!(maybe, Maybe::Present(42));
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts a `Maybe` to a standard `Option`.
    ///
    /// `Present(value)` becomes `Some(value)`, and `Absent` becomes
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomars::outcome::Maybe;
    ///
    /// let option: Option<i32> = Maybe::Present(42).into();
    /// assert_eq!(option, Some(42));
    /// ```
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}
