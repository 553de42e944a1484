//! Error types for emergence_core.
//!
//! The engine itself never fails at runtime: out-of-range values are clamped
//! and degenerate geometry is skipped. Errors only arise where configuration
//! crosses the host boundary as text or files.

use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML syntax or type mismatch
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML encoding failure
    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// File system errors
    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    /// Value outside its valid range
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Creates a new validation error.
    #[must_use]
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Self::Invalid(msg.into())
    }
}
