//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Score precision {0} is outside 0..=12")]
    InvalidScorePrecision(u8),

    #[error("Export header '{0}' must not be empty")]
    EmptyHeader(&'static str),

    #[error("Score and rank headers must differ")]
    DuplicateHeaders,

    #[error("Ingestion limit '{0}' must be at least 1")]
    InvalidIngestionLimit(&'static str),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
