//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The store itself never returns these: its operations are total. They are
/// raised by value-object constructors and identifier parsing, which the form
/// layer uses to reject caller input before it reaches the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A decimal amount was outside the range allowed for its value object.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
