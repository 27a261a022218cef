//! Error types for the collection extensions

use thiserror::Error;

/// Result type alias for extension operations.
pub type ExtensionResult<T> = Result<T, ExtensionError>;

/// Errors raised while configuring the collection extensions.
///
/// The removal and insertion helpers themselves never fail.
#[derive(Error, Debug)]
pub enum ExtensionError {
    /// Configuration was invalid or malformed.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// TOML deserialisation error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ExtensionError {
    /// Helper for creating an invalid configuration error with a message.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}
