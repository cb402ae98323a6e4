//! Error types for the portal.
//!
//! - [`FetchError`] - the single error kind of the data fetch facade
//! - [`ConfigError`] - invalid or missing configuration
//! - [`PortalError`] - umbrella type for library entry points
//!
//! Fetch errors never reach the user: the initial loader logs them and the
//! affected screen shows its empty state instead.

mod config;
mod fetch;

pub use config::ConfigError;
pub use fetch::FetchError;

pub use crate::schedule::SelectionError;

use thiserror::Error;

/// Any error the library can return.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for library operations.
pub type PortalResult<T> = Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_keep_message() {
        let err: PortalError = FetchError::decode("FAQ", "bad json").into();
        assert_eq!(err.to_string(), "could not decode FAQ rows: bad json");

        let err: PortalError = ConfigError::missing("PORTAL_SHEET_URL").into();
        assert!(matches!(err, PortalError::Config(_)));

        let err: PortalError = SelectionError::CourseNotChosen.into();
        assert_eq!(err.to_string(), "a course must be chosen before a shift");
    }
}
