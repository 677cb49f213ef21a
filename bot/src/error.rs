//! Bot error types

use std::path::Path;
use thiserror::Error;

/// Result type for bot operations
pub type BotResult<T> = Result<T, BotError>;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Transport error: {message}")]
    TransportError { message: String },

    #[error("Storage operation failed: {operation} on {path}")]
    StorageError {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl BotError {
    pub fn config(message: impl Into<String>) -> Self {
        BotError::ConfigError { message: message.into() }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        BotError::TransportError { message: message.into() }
    }

    pub fn storage(operation: &str, path: &Path, source: std::io::Error) -> Self {
        BotError::StorageError {
            operation: operation.to_string(),
            path: path.display().to_string(),
            source,
        }
    }
}
