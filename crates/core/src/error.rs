//! Error types for the contract registry
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations. Note what is deliberately NOT an error: decoding an
//! absent or malformed record yields the zero-value record (see
//! [`crate::codec::decode`]), and deleting an unknown identifier succeeds
//! as a no-op.

use thiserror::Error;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the contract registry
#[derive(Debug, Error)]
pub enum Error {
    /// Ledger store failure (get/put/delete) - always propagated, never retried
    #[error("Store error: {0}")]
    Store(String),

    /// Create attempted on an identifier with a live record
    #[error("Contract already exists: {0}")]
    AlreadyExists(String),

    /// Record or index encoding failure
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_store() {
        let err = Error::Store("ledger write failed".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Store error"));
        assert!(msg.contains("ledger write failed"));
    }

    #[test]
    fn test_error_display_already_exists() {
        let err = Error::AlreadyExists("C1".to_string());
        let msg = err.to_string();
        assert!(msg.contains("already exists"));
        assert!(msg.contains("C1"));
    }

    #[test]
    fn test_error_display_serialization() {
        let err = Error::Serialization("invalid format".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Serialization error"));
        assert!(msg.contains("invalid format"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let result: std::result::Result<Vec<String>, serde_json::Error> =
            serde_json::from_str("not json");
        let err: Error = result.unwrap_err().into();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }

        fn returns_error() -> Result<i32> {
            Err(Error::Store("test".to_string()))
        }

        assert_eq!(returns_result().unwrap(), 42);
        assert!(returns_error().is_err());
    }
}
