//! Domain error taxonomy.
//!
//! Every fallible domain operation returns one of four outcomes:
//! bad input ([`DomainError::Validation`]), a missing referenced id
//! ([`DomainError::NotFound`]), a uniqueness violation
//! ([`DomainError::Conflict`]), or a storage failure
//! ([`DomainError::Storage`]). Nothing is retried internally; errors
//! surface directly to the caller.

use thiserror::Error;

/// Result alias using [`DomainError`].
pub type Result<T> = std::result::Result<T, DomainError>;

/// Errors produced by domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Bad or missing input.
    #[error("{0}")]
    Validation(String),

    /// A referenced entity does not exist.
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// Entity kind, e.g. `"account"` or `"group"`.
        entity: &'static str,
        /// The id that was looked up.
        id: String,
    },

    /// A uniqueness constraint was violated (duplicate email).
    #[error("{0}")]
    Conflict(String),

    /// Underlying SQLite failure.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Infrastructure failure (connection pool, I/O).
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Bad or missing input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// A referenced entity does not exist.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// A uniqueness constraint was violated.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Infrastructure failure.
    pub fn internal(message: impl std::fmt::Display) -> Self {
        Self::Internal(message.to_string())
    }

    /// Whether this is a [`DomainError::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
