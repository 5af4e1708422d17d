//! Domain error types for wheeldate
//!
//! The picker itself never fails: out-of-range input is clamped. Errors only
//! come from the host around it:
//! - `ConfigError` for reading the config file
//! - `DateArgError` for the `--date` argument
//! - `WheelError` as the top-level error type

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for wheeldate
#[derive(Debug, Error)]
pub enum WheelError {
    #[error("Invalid date: {0}")]
    DateArg(#[from] DateArgError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0} requires a value")]
    MissingValue(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors related to the `--date` argument
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateArgError {
    #[error("'{0}' is not in YYYY-MM-DD form")]
    Format(String),

    #[error("'{0}' is not a calendar date")]
    NotADate(String),
}

/// Result type alias for WheelError
pub type Result<T> = std::result::Result<T, WheelError>;
