//! Crate-wide error kinds.
//!
//! Two families that must never be conflated:
//!
//! - [`ArgumentError`] — programmer misuse of a builder or constructor
//!   (a required argument never supplied, or a supplied argument that is
//!   unusable). These fail fast and are not retried.
//! - [`ConfigError`] — rejection of a candidate configuration value by a
//!   checker or by canonical-text parsing. These are per-value outcomes,
//!   recoverable by fixing the input, and are the only errors expected to
//!   reach an end user.

use thiserror::Error;

/// Result type for builder and constructor operations.
pub type ArgumentResult<T> = Result<T, ArgumentError>;

/// Result type for value validation and canonical-text parsing.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Misuse of a builder or model constructor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// A required argument was never supplied.
    #[error("{0} is required but was never supplied")]
    Missing(&'static str),

    /// A supplied argument is present but unusable.
    #[error("{0}")]
    Illegal(String),
}

impl ArgumentError {
    /// Create an illegal-argument error.
    pub fn illegal(reason: impl Into<String>) -> Self {
        Self::Illegal(reason.into())
    }

    /// Shorthand for the common empty-string rejection.
    pub(crate) fn empty(what: &str) -> Self {
        Self::Illegal(format!("{} must not be empty", what))
    }
}

/// A candidate configuration value was rejected.
///
/// Carries a human-readable reason so callers can collect failures and
/// report them against the offending setting key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ConfigError {
    reason: String,
}

impl ConfigError {
    /// Create a validation error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Create a validation error for a specific setting key.
    pub fn rejected(key: &str, reason: impl std::fmt::Display) -> Self {
        Self {
            reason: format!("value for `{}` rejected: {}", key, reason),
        }
    }

    /// The human-readable reason for the rejection.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
