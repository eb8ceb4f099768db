//! Error types for sift.

use serde::Serialize;
use thiserror::Error;

/// A shared error type for the sift crates.
///
/// Only enumeration-level and configuration failures travel through this
/// type. Unreadable or malformed artifacts never do: the artifact reader
/// collapses them to absent values before they reach a repository, and an
/// unknown session is `Ok(None)` rather than an error.
#[derive(Error, Debug, Clone, Serialize)]
pub enum SiftError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (enumeration failure, timeout)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SiftError {
    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// A type alias for `Result<T, SiftError>`.
pub type Result<T> = std::result::Result<T, SiftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            SiftError::internal("boom").to_string(),
            "Internal error: boom"
        );
        assert_eq!(
            SiftError::config("bad key").to_string(),
            "Configuration error: bad key"
        );
    }

    #[test]
    fn test_serializes_as_tagged_variant() {
        let value = serde_json::to_value(SiftError::internal("boom")).unwrap();
        assert_eq!(value, serde_json::json!({ "Internal": "boom" }));
    }
}
