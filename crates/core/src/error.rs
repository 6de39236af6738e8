//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Aging an item never fails on its own; the only failures come from how the
/// aging rules themselves were configured.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A rule set was built with a parameter it cannot honor
    /// (e.g. a negative sell rate).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl DomainError {
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
