//! Configuration errors.

use thiserror::Error;

/// A setting that is missing or cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("{variable} is not set")]
    MissingVariable { variable: String },

    /// A variable is set but its value is unusable.
    #[error("{variable}={value:?} is invalid: {reason}")]
    InvalidValue {
        variable: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn missing(variable: &str) -> Self {
        ConfigError::MissingVariable {
            variable: variable.to_string(),
        }
    }

    pub fn invalid(variable: &str, value: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            variable: variable.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
