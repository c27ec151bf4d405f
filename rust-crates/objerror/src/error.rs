// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Error values raised by object file parsing code.

use crate::kind::ErrorKind;
use std::fmt;

/// Result type shorthand.
pub type Result<T = (), E = Error> = std::result::Result<T, E>;

/// A single object file parsing error.
///
/// Display text and classification are independent: a [`Error::Generic`]
/// error is always rendered with its own message, even if it carries an
/// [`ErrorKind`] for callers that want to match on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Error identified by its kind alone, rendered via [`ErrorKind::message`].
    #[error("{0}")]
    Classified(ErrorKind),

    /// Error with a free-form message.
    #[error("{0}")]
    Generic(GenericError),
}

impl Error {
    /// Create an error for the given kind.
    pub fn classified(kind: ErrorKind) -> Self {
        Self::Classified(kind)
    }

    /// Create an unclassified error with a free-form message.
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic(GenericError::new(message, None))
    }

    /// Create an error with a free-form message that classifies as `kind`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use objerror::{Error, ErrorKind};
    /// let err = Error::generic_with_kind("symbol 12 out of range", ErrorKind::ParseFailed);
    /// assert_eq!(err.to_string(), "symbol 12 out of range");
    /// assert_eq!(err.classify(), Some(ErrorKind::ParseFailed));
    /// ```
    pub fn generic_with_kind(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self::Generic(GenericError::new(message, Some(kind)))
    }

    /// Kind of this error, or [`None`] if it is unclassified.
    pub fn classify(&self) -> Option<ErrorKind> {
        match self {
            Self::Classified(kind) => Some(*kind),
            Self::Generic(generic) => generic.kind(),
        }
    }

    /// Text this error is displayed with.
    pub fn message(&self) -> &str {
        match self {
            Self::Classified(kind) => kind.message(),
            Self::Generic(generic) => generic.message(),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::Classified(kind)
    }
}

impl From<GenericError> for Error {
    fn from(generic: GenericError) -> Self {
        Self::Generic(generic)
    }
}

/// Conversion of [`object`] errors into ours.
///
/// [`object`] only reports malformed input through its errors, so these are
/// classified as [`ErrorKind::ParseFailed`] while keeping the original text.
impl From<object::Error> for Error {
    fn from(e: object::Error) -> Self {
        Self::generic_with_kind(e.to_string(), ErrorKind::ParseFailed)
    }
}

/// Free-form error message with an optional classification.
///
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericError {
    message: Box<str>,
    kind: Option<ErrorKind>,
}

impl GenericError {
    /// Create a new generic error.
    pub fn new(message: impl Into<String>, kind: Option<ErrorKind>) -> Self {
        Self {
            message: message.into().into_boxed_str(),
            kind,
        }
    }

    /// The message, verbatim.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Classification override, if any.
    pub fn kind(&self) -> Option<ErrorKind> {
        self.kind
    }
}

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
