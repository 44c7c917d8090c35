//! Core error types for auraflow-core.
//!
//! The computational components never fail; they clamp out-of-range input.
//! Errors only arise at the edges: building events from user input, looking
//! up events that no longer exist, and reading or writing the config file.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for auraflow-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Could not determine where the configuration lives
    #[error("Configuration directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Duration must be strictly positive
    #[error("Invalid duration {0}: must be greater than zero hours")]
    InvalidDuration(f64),

    /// Intensity outside 1..=5
    #[error("Invalid intensity {0}: expected a value between 1 and 5")]
    InvalidIntensity(u8),

    /// Start time outside [0, 24) or off the half-hour grid
    #[error("Invalid start time {0}: expected hours in [0, 24) on a half-hour grid")]
    InvalidStartTime(f64),

    /// Event id not present in the collection
    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    /// Two events in one collection share an id
    #[error("Duplicate event id: {0}")]
    DuplicateEvent(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
