//! Structured error types for the launchpad CLI

use thiserror::Error;

/// Launchpad CLI error types
#[derive(Error, Debug)]
pub enum CliError {
    // Configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to load config from {path}: {reason}")]
    ConfigLoadFailed { path: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    // Launch
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// The user-facing message has already been printed
    #[error("Token launch did not complete")]
    LaunchFailed,

    // Serialization
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
