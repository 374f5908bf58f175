//! Configuration errors.

use thiserror::Error;

/// Failure to load or accept a binder configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Binder config not found: {0}")]
    NotFound(String),

    #[error("Rejected config value {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Config references unset environment variable: {0}")]
    EnvVarNotSet(String),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    TomlParse(#[from] toml::de::Error),
}
