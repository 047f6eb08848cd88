// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for the interactive window
//!
//! Most user-facing paths degrade to a no-op instead of failing, so these
//! variants only surface for genuine host or I/O failures.

use thiserror::Error;

/// Main error type for interactive window operations
#[derive(Error, Debug)]
pub enum InteractiveError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Backup persistence errors
    #[error("Backup error: {0}")]
    Backup(String),

    /// Document registry errors
    #[error("Document error: {0}")]
    Document(String),

    /// Cell execution errors reported by the executor
    #[error("Execution failed: {0}")]
    Execution(String),

    /// Editor host errors
    #[error("Editor error: {0}")]
    Editor(String),
}

/// Result type alias for interactive window operations
pub type Result<T> = std::result::Result<T, InteractiveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_config() {
        let err = InteractiveError::Config("bad config".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_error_invalid_input() {
        let err = InteractiveError::InvalidInput("bad index".to_string());
        assert!(err.to_string().contains("Invalid input"));
        assert!(err.to_string().contains("bad index"));
    }

    #[test]
    fn test_error_backup() {
        let err = InteractiveError::Backup("disk full".to_string());
        assert!(err.to_string().contains("Backup error"));
    }

    #[test]
    fn test_error_execution() {
        let err = InteractiveError::Execution("kernel died".to_string());
        assert_eq!(err.to_string(), "Execution failed: kernel died");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: InteractiveError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: InteractiveError = json_err.into();
        assert!(matches!(err, InteractiveError::Json(_)));
    }

    #[test]
    fn test_result_error() {
        fn test_fn() -> Result<i32> {
            Err(InteractiveError::InvalidInput("test".to_string()))
        }

        assert!(test_fn().is_err());
    }
}
