//! Panic payload normalization.
//!
//! The bridge combinators capture panic payloads of any shape. This
//! module gives those payloads a consistent, inspectable form: a
//! [`NormalizedError`] carries a human-readable message, a coarse
//! [`ErrorKind`], and optionally the original payload as a diagnostic
//! cause. The core algebra never requires this shape; it is a
//! convenience for the bridge entry points.
//!
//! # Examples
//!
//! ```rust
//! use outcomars::error::normalize;
//!
//! let payload: Box<dyn std::any::Any + Send> = Box::new("boom".to_string());
//! let error = normalize(payload, "computation failed");
//! assert_eq!(error.message(), "boom");
//! ```

use std::any::Any;
use std::error;
use std::fmt;

/// Coarse classification for a [`NormalizedError`].
///
/// Mirrors the categories commonly needed when surfacing failures to
/// callers; `Unknown` is the catch-all for payloads with no better
/// classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid input arguments.
    InvalidArgument,
    /// A requested resource was not found.
    NotFound,
    /// Required permissions were missing.
    PermissionDenied,
    /// An operation timed out.
    Timeout,
    /// An unexpected or uncategorized error.
    Unknown,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidArgument => "invalid argument",
            Self::NotFound => "not found",
            Self::PermissionDenied => "permission denied",
            Self::Timeout => "timeout",
            Self::Unknown => "unknown",
        };
        formatter.write_str(name)
    }
}

/// A caught value given a consistent shape: a message, a kind, and
/// optionally the original payload as cause.
///
/// The cause is held for diagnostic traversal only; it is never
/// mutated and nothing beyond its identity should be relied upon.
///
/// # Examples
///
/// ```rust
/// use outcomars::error::{ErrorKind, NormalizedError};
///
/// let error = NormalizedError::new("port out of range")
///     .with_kind(ErrorKind::InvalidArgument);
/// assert_eq!(format!("{}", error), "port out of range");
/// assert_eq!(error.kind(), ErrorKind::InvalidArgument);
/// ```
pub struct NormalizedError {
    message: String,
    kind: ErrorKind,
    cause: Option<Box<dyn Any + Send + 'static>>,
}

impl fmt::Debug for NormalizedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NormalizedError")
            .field("message", &self.message)
            .field("kind", &self.kind)
            .field("cause", &self.cause.as_ref().map(|_| "<payload>"))
            .finish()
    }
}

impl NormalizedError {
    /// Creates a message-only error of kind `Unknown`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Unknown,
            cause: None,
        }
    }

    /// Creates an error carrying the original payload as cause.
    #[must_use]
    pub fn with_cause(message: impl Into<String>, cause: Box<dyn Any + Send + 'static>) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Unknown,
            cause: Some(cause),
        }
    }

    /// Reclassifies this error under the given kind.
    #[must_use]
    pub fn with_kind(mut self, kind: ErrorKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the original payload, if one was attached.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn Any + Send + 'static)> {
        self.cause.as_deref()
    }
}

impl fmt::Display for NormalizedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl error::Error for NormalizedError {}

/// Gives a caught panic payload a consistent shape.
///
/// - A payload that is already a [`NormalizedError`] is returned
///   unchanged.
/// - A plain text payload (`String` or `&'static str`, the shapes
///   `panic!` produces) becomes a message-only error.
/// - Anything else becomes `default_message` with the payload attached
///   as cause.
///
/// Pure and total: never panics, for any payload.
///
/// # Examples
///
/// ```rust
/// use outcomars::bridge::try_catch_with;
/// use outcomars::error::normalize;
///
/// let outcome = try_catch_with(
///     || -> i32 { std::panic::panic_any(vec![1, 2, 3]) },
///     |payload| normalize(payload, "computation failed"),
/// );
/// let error = outcome.failure().unwrap();
/// assert_eq!(error.message(), "computation failed");
/// assert!(error.cause().is_some());
/// ```
#[must_use]
pub fn normalize(caught: Box<dyn Any + Send + 'static>, default_message: &str) -> NormalizedError {
    let caught = match caught.downcast::<NormalizedError>() {
        Ok(already) => return *already,
        Err(other) => other,
    };
    let caught = match caught.downcast::<String>() {
        Ok(message) => return NormalizedError::new(*message),
        Err(other) => other,
    };
    let caught = match caught.downcast::<&'static str>() {
        Ok(message) => return NormalizedError::new(*message),
        Err(other) => other,
    };
    NormalizedError::with_cause(default_message, caught)
}
