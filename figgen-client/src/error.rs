//! # Client Error Types
//!
//! Unified error handling for document fetching and keyword compilation.

use std::path::PathBuf;

use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Error types for document client operations
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no figma files found")]
    NoDocument,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("invalid keyword pattern '{pattern}': {source}")]
    InvalidKeyword {
        pattern: String,
        source: regex::Error,
    },

    #[error("failed to write snapshot {path}: {source}")]
    Snapshot {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a snapshot write error for `path`
    pub fn snapshot(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Snapshot {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_constructor() {
        let err = ClientError::config_error("missing FIGMA_FILE_KEY");
        match err {
            ClientError::Config(msg) => assert_eq!(msg, "missing FIGMA_FILE_KEY"),
            _ => panic!("Expected Config variant"),
        }
    }

    #[test]
    fn test_no_document_message() {
        assert_eq!(ClientError::NoDocument.to_string(), "no figma files found");
    }

    #[test]
    fn test_snapshot_error_names_path() {
        let err = ClientError::snapshot(
            "/out/figma.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/out/figma.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ClientError = io.into();
        assert!(matches!(err, ClientError::Io(_)));
    }
}
