//! Error types and error handling for tokchunk.
//!
//! This module defines the error types used throughout the
//! crate. The chunking core itself has a single failure mode
//! (an invalid window configuration); the remaining variants
//! belong to the configuration, corpus and CLI layers.

use thiserror::Error;

/// Result type alias for tokchunk operations
pub type Result<T> = std::result::Result<T, TokChunkError>;

/// Main error type for tokchunk
#[derive(Error, Debug)]
pub enum TokChunkError {
    #[error("Invalid window configuration (size={size}, overlap={overlap}): {reason}")]
    InvalidWindowConfiguration {
        size: i64,
        overlap: i64,
        reason: &'static str,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Corpus error: {0}")]
    CorpusError(String),

    #[error("Thread pool error: {0}")]
    ThreadPoolError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl TokChunkError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error was raised by window validation
    pub fn is_invalid_window(&self) -> bool {
        matches!(self, TokChunkError::InvalidWindowConfiguration { .. })
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            TokChunkError::InvalidWindowConfiguration { .. }
                | TokChunkError::ConfigError(_)
                | TokChunkError::CorpusError(_)
        )
    }
}
