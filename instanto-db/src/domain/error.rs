use serde::Serialize;
use thiserror::Error;

/// A single user-correctable problem with one input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    /// Bad user input, either rejected locally or reclassified from a
    /// constraint violation reported by the database.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("resource not found: {0}")]
    NotFound(String),

    /// Anything the database reported that is not a known constraint violation.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("unexpected domain error: {0}")]
    Unexpected(String),
}

impl DomainError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation(ValidationError::new(field, reason))
    }

    /// The structured validation error, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DomainError, ValidationError};

    #[test]
    fn validation_error_displays_field_and_reason() {
        let err = ValidationError::new("title", "cannot be empty");
        assert_eq!(err.to_string(), "title: cannot be empty");
    }

    #[test]
    fn validation_error_serializes_as_field_and_reason() {
        let err = ValidationError::new("scope", "value must be regional, national or international");
        let json = serde_json::to_value(&err).expect("must serialize");
        assert_eq!(json["field"], "scope");
        assert_eq!(json["reason"], "value must be regional, national or international");
    }

    #[test]
    fn as_validation_only_matches_validation_variant() {
        let err = DomainError::validation("web", "length cannot be greater than 200");
        assert_eq!(err.as_validation().map(|v| v.field.as_str()), Some("web"));

        let err = DomainError::Database(sqlx::Error::PoolTimedOut);
        assert!(err.as_validation().is_none());
    }
}
