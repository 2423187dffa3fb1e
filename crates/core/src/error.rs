//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Message carried by every missing-product failure.
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Domain-level error.
///
/// Both variants carry a human-readable message that is also their `Display`
/// output, so an HTTP layer can forward it unchanged. Branch on the variant
/// (or [`DomainError::kind`]), never on the message text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input failed validation (missing required fields, malformed filters).
    #[error("{0}")]
    Validation(String),

    /// The referenced record does not exist.
    #[error("{0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn product_not_found() -> Self {
        Self::not_found(PRODUCT_NOT_FOUND)
    }

    /// Stable machine-readable code for the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => "validation_error",
            DomainError::NotFound(_) => "not_found",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            DomainError::Validation(msg) | DomainError::NotFound(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message() {
        let err = DomainError::product_not_found();
        assert_eq!(err.to_string(), "Product not found");
        assert_eq!(err.kind(), "not_found");

        let err = DomainError::validation("Product must have name, price, and category");
        assert_eq!(err.to_string(), "Product must have name, price, and category");
        assert_eq!(err.message(), err.to_string());
        assert_eq!(err.kind(), "validation_error");
    }
}
