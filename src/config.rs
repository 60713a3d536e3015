//! Runtime configuration
//!
//! Settings are read from TOML. The defaults ship embedded in the binary
//! (`antipode.toml`); a user file only needs the keys it wants to change.

use std::fs;

use lazy_static::lazy_static;
use log::{debug, warn};

use crate::errors::{AntipodeError, AntipodeResult};

/// Largest supported number of decimal places
pub const MAX_PRECISION: usize = 15;

lazy_static! {
    // Parse the embedded defaults once
    static ref DEFAULT_CONFIG: Config = {
        let content = include_str!("../antipode.toml");
        Config::builtin().merge_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in configuration: {}", e);
            Config::builtin()
        })
    };
}

/// Settings for the CLI
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Decimal places used when printing coordinates
    pub precision: usize,
    /// Whether to validate coordinates before computing the antipode
    pub validate: bool,
    /// Path of the log file
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl Config {
    fn builtin() -> Self {
        Config {
            precision: 4,
            validate: false,
            log_file: "antipode.log".to_string(),
        }
    }

    /// Parse a configuration from a TOML string, starting from the defaults
    pub fn from_str(content: &str) -> AntipodeResult<Self> {
        Config::default().merge_str(content)
    }

    /// Load a configuration from a TOML file, starting from the defaults
    pub fn from_file(path: &str) -> AntipodeResult<Self> {
        let contents = fs::read_to_string(path)?;
        debug!("Loaded configuration from {}", path);
        Self::from_str(&contents)
    }

    /// Override the keys present in `content`, keeping the rest
    fn merge_str(mut self, content: &str) -> AntipodeResult<Self> {
        let table: toml::Table = toml::from_str(content)
            .map_err(|e| AntipodeError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        for (key, value) in &table {
            match key.as_str() {
                "precision" => {
                    let precision = value.as_integer().ok_or_else(|| {
                        AntipodeError::ConfigError("'precision' must be an integer".to_string())
                    })?;
                    self.precision = Self::check_precision(precision)?;
                }
                "validate" => {
                    self.validate = value.as_bool().ok_or_else(|| {
                        AntipodeError::ConfigError("'validate' must be a boolean".to_string())
                    })?;
                }
                "log_file" => {
                    self.log_file = value
                        .as_str()
                        .ok_or_else(|| {
                            AntipodeError::ConfigError("'log_file' must be a string".to_string())
                        })?
                        .to_string();
                }
                other => warn!("Ignoring unknown configuration key '{}'", other),
            }
        }

        Ok(self)
    }

    /// Check a requested precision is within 0..=MAX_PRECISION
    pub fn check_precision(precision: i64) -> AntipodeResult<usize> {
        if precision < 0 || precision > MAX_PRECISION as i64 {
            return Err(AntipodeError::ConfigError(format!(
                "precision must be between 0 and {}, got {}",
                MAX_PRECISION, precision
            )));
        }
        Ok(precision as usize)
    }
}
