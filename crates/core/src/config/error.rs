//! Error types for loading the default configuration.
//!
//! These errors happen before a run starts: the default configuration is
//! read once at process start and handed to the orchestrator.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the default configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read a configuration file from disk.
    #[error("Failed to read config file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse JSON configuration.
    #[error("Failed to parse JSON in {origin}: {source}")]
    JsonParse {
        origin: String,
        source: serde_json::Error,
    },

    /// The embedded default configuration is missing from the binary.
    #[error("Template file not found: {0}")]
    TemplateNotFound(String),

    /// Invalid configuration structure or missing required fields.
    #[error("Invalid configuration in {origin}: {reason}")]
    InvalidConfig { origin: String, reason: String },
}

/// Type alias for Result with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
