//! Unified error types for the domain layer
//!
//! Provides a common error type for character model operations, so the engine
//! can report edit failures without resorting to String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A stat holds a value of a different shape than the operation expects
    #[error("Stat '{stat}' holds {found}, expected {expected}")]
    KindMismatch {
        stat: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Parse error (for user-entered values)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when domain invariants or constraints are violated:
    /// - Required names are empty
    /// - A label category name is not one of the known categories
    /// - Spent mana exceeds an item's capacity
    ///
    /// # Example
    /// ```ignore
    /// if name.trim().is_empty() {
    ///     return Err(DomainError::validation("Merit name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create a stat shape mismatch error
    pub fn kind_mismatch(
        stat: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::KindMismatch {
            stat: stat.into(),
            expected,
            found,
        }
    }

    /// Creates a parse error for text-to-value conversion failures.
    ///
    /// Use this when text pushed back from a front end does not fit the
    /// stat it targets, e.g. letters typed into an integer stat.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("merit name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: merit name cannot be empty"
        );
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("Stat", "sorcery");
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(err.to_string().contains("Stat"));
        assert!(err.to_string().contains("sorcery"));
    }

    #[test]
    fn test_kind_mismatch_error() {
        let err = DomainError::kind_mismatch("health", "a health track", "text");
        assert_eq!(
            err.to_string(),
            "Stat 'health' holds text, expected a health track"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("gnosis expects a whole number");
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error:"));
    }
}
