//! Checker configuration for the prose analyzer.
//!
//! Configuration lives in a `prosecheck.toml` (or `.prosecheck.toml`) file
//! discovered by walking up from the working directory. The model is small:
//! the look-around window (`num_paras_to_check`), the user-disabled rule
//! ids, and per-rule option tables handed to rules as JSON values.

use std::path::PathBuf;
use thiserror::Error;

mod config;
mod loader;

pub use config::CheckerConfig;
pub use loader::{find_config, load_config, load_config_from_str};

/// Errors from loading or validating checker configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML
    #[error("invalid config at {path}: {message}")]
    Parse {
        /// Path of the offending file
        path: PathBuf,
        /// Parser error message
        message: String,
    },

    /// The config parsed but violates the model's contract
    #[error("invalid configuration: {message}")]
    Invalid {
        /// What is wrong with the configuration
        message: String,
    },
}

/// Result alias for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;
