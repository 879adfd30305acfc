//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure the product service can report maps onto exactly one of these
/// variants; the HTTP layer translates them into status codes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An inbound payload could not be decoded (malformed JSON, type mismatch).
    #[error("decode failed: {0}")]
    Decode(String),

    /// A decoded value violated one or more field rules.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The requested product does not exist.
    #[error("product not found")]
    NotFound,

    /// Anything else (poisoned lock, exhausted id space).
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_build_matching_variants() {
        assert_eq!(DomainError::decode("eof"), DomainError::Decode("eof".into()));
        assert_eq!(
            DomainError::validation("name: must not be empty"),
            DomainError::Validation("name: must not be empty".into())
        );
        assert_eq!(DomainError::invalid_id("x"), DomainError::InvalidId("x".into()));
        assert_eq!(DomainError::not_found(), DomainError::NotFound);
        assert_eq!(DomainError::internal("boom"), DomainError::Internal("boom".into()));
    }

    #[test]
    fn display_includes_detail() {
        let err = DomainError::validation("price: must be greater than zero");
        assert_eq!(err.to_string(), "validation failed: price: must be greater than zero");
        assert_eq!(DomainError::NotFound.to_string(), "product not found");
    }
}
