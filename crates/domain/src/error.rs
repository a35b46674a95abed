//! Unified error types for the domain layer
//!
//! Provides a common error type for domain operations so adapters never
//! have to fall back to `String` or `anyhow`.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A spoken phrase has no entry in the kingdom alias table
    #[error("Unknown kingdom alias: {0}")]
    UnknownAlias(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when a stored or supplied value breaks a domain invariant:
    /// - Required fields are empty
    /// - Identifiers are not positive
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("Moon name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an unknown alias error for the phrase that failed to resolve
    pub fn unknown_alias(phrase: impl Into<String>) -> Self {
        Self::UnknownAlias(phrase.into())
    }
}
