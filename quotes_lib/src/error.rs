//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding serialization, configuration and input validation failures.
#[derive(Debug)]
pub enum QuotesError {
    /// An error from the underlying API client.
    Api(quotes_api::Error),
    /// JSON or TOML serialization failed.
    Serialization(String),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// A configuration value could not be used.
    Config(String),
    /// Reading or writing a local file failed.
    Io(std::io::Error),
}

impl fmt::Display for QuotesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for QuotesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<quotes_api::Error> for QuotesError {
    fn from(e: quotes_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for QuotesError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for QuotesError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
