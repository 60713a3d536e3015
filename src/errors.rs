//! Custom error types for antipode computation

use std::fmt;
use std::io;

/// Errors produced by coordinate handling and the CLI
#[derive(Debug)]
pub enum AntipodeError {
    /// Latitude or longitude outside its valid range
    InvalidArgument {
        latitude: f64,
        longitude: f64,
    },
    /// Malformed coordinate text
    ParseError(String),
    /// I/O error
    IoError(io::Error),
    /// Malformed or out-of-range configuration
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for AntipodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AntipodeError::InvalidArgument { latitude, longitude } => write!(
                f,
                "Invalid coordinates: latitude={:.4}, longitude={:.4}",
                latitude, longitude
            ),
            AntipodeError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AntipodeError::IoError(e) => write!(f, "I/O error: {}", e),
            AntipodeError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AntipodeError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AntipodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AntipodeError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for AntipodeError {
    fn from(error: io::Error) -> Self {
        AntipodeError::IoError(error)
    }
}

impl From<String> for AntipodeError {
    fn from(msg: String) -> Self {
        AntipodeError::GenericError(msg)
    }
}

/// Result type for antipode operations
pub type AntipodeResult<T> = Result<T, AntipodeError>;
