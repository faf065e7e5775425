//! Error types.
//!
//! There are two primary error kinds. A [`SyntaxError`] comes from the
//! reader (or from JSON text parsing) and carries a source location. A
//! [`PathError`] comes from [`crate::PathParser`] and carries the
//! rendered navigation path. [`ValueError`] is the path-less variant
//! raised by direct accessors on [`crate::Value`].
//!
//! All of them render as complete sentences suitable for showing to a
//! user, and [`Error`] unifies them so callers can use `?` freely.

use thiserror::Error;

use crate::reader::Location;
use crate::value::ValueKind;

/// Result type defaulting to the umbrella [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A GDVN (or JSON) syntax error at a specific location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{location}: GDV syntax error: {message}")]
pub struct SyntaxError {
    /// Where the error occurred.
    pub location: Location,

    /// What is wrong with the syntax at that location.
    pub message: String,
}

impl SyntaxError {
    pub fn new(location: Location, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }

    /// Prepend "context: " to the message.
    pub fn prepend_context(&mut self, context: &str) {
        self.message = format!("{}: {}", context, self.message);
    }
}

/// A shape mismatch found while navigating a value with a
/// [`crate::PathParser`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("At GDV path {path}: {message}")]
pub struct PathError {
    /// Rendered path from the top-level value, e.g. `<top>.seq[3]`.
    pub path: String,

    /// What was expected versus what was found.
    pub message: String,
}

impl PathError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A kind mismatch or missing element found by a direct accessor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValueError {
    pub message: String,
}

impl ValueError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// "expected {expected}, not {actual}".
    pub(crate) fn wrong_kind(expected: &str, actual: ValueKind) -> Self {
        Self::new(format!(
            "expected {}, not {}",
            expected,
            actual.common_name()
        ))
    }
}

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Value(#[from] ValueError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The syntax error, if that is what this is.
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            Error::Syntax(e) => Some(e),
            _ => None,
        }
    }

    /// The path error, if that is what this is.
    pub fn as_path(&self) -> Option<&PathError> {
        match self {
            Error::Path(e) => Some(e),
            _ => None,
        }
    }
}
