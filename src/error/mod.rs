//! Error handling module for ytcut

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for ytcut operations outside the run pipeline
#[derive(Error, Debug)]
pub enum CutterError {
    /// Configuration file or value error
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file could not be parsed
    #[error("Invalid configuration file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Logging could not be initialized
    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },

    /// Domain layer error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for ytcut operations
pub type CutterResult<T> = std::result::Result<T, CutterError>;
