//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level validation error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The best-effort remote save failed; never surfaced as a blocking
    /// failure, only logged and reported through the diagnostics hook
    #[error("remote save failed: {0}")]
    RemoteSave(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Internal error (storage, task join, ...)
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is a validation failure the caller can fix by
    /// re-submitting corrected input
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}
