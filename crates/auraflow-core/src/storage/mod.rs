//! Configuration storage.
//!
//! Schedules and energy logs live only in memory; the configuration file is
//! the one thing written to disk.

mod config;

pub use config::{Config, LoggingConfig, PlannerConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Where the auraflow config directory lives, without touching the disk.
///
/// `AURAFLOW_HOME` overrides the location outright. Otherwise this is
/// `~/.config/auraflow`, or `~/.config/auraflow-dev` when `AURAFLOW_ENV=dev`.
pub fn resolve_data_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("AURAFLOW_HOME") {
        return PathBuf::from(home);
    }
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");
    let env = std::env::var("AURAFLOW_ENV").unwrap_or_else(|_| "production".to_string());
    if env == "dev" {
        base_dir.join("auraflow-dev")
    } else {
        base_dir.join("auraflow")
    }
}

/// Returns the auraflow config directory, creating it if needed.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = resolve_data_dir();
    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
