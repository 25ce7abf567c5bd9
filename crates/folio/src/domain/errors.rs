//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Request payload is missing `message` or it is not a string
    #[error("Validation error: {0}")]
    Validation(String),

    /// Knowledge base broke one of its invariants; fatal at startup
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A template could not be filled from the knowledge base
    #[error("Render error: {0}")]
    Render(String),
}

impl DomainError {
    pub fn validation<T: AsRef<str>>(msg: T) -> Self {
        Self::Validation(msg.as_ref().to_string())
    }

    pub fn configuration<T: AsRef<str>>(msg: T) -> Self {
        Self::Configuration(msg.as_ref().to_string())
    }
}
