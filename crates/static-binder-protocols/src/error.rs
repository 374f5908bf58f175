//! Binding-related errors.

use thiserror::Error;

/// Result alias for registry operations.
pub type BinderResult<T> = Result<T, BinderError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BinderError {
    #[error("Binding already registered for key: {0}")]
    DuplicateBinding(String),

    #[error("No binding found for key: {0}")]
    UnboundKey(String),

    #[error("Invalid binding key: {0}")]
    InvalidKey(String),

    #[error("Invalid implementation for {key}: {reason}")]
    InvalidImplementation { key: String, reason: String },
}

impl BinderError {
    /// The key the failed operation was called with.
    pub fn key(&self) -> &str {
        match self {
            BinderError::DuplicateBinding(key)
            | BinderError::UnboundKey(key)
            | BinderError::InvalidKey(key)
            | BinderError::InvalidImplementation { key, .. } => key,
        }
    }

    /// Shorthand for [`BinderError::InvalidImplementation`].
    pub fn invalid_implementation(key: impl Into<String>, reason: impl Into<String>) -> Self {
        BinderError::InvalidImplementation {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
