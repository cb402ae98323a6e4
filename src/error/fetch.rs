//! Errors raised by the data fetch facade.
//!
//! Every failure to obtain or decode one of the three sheet collections ends
//! up as a [`FetchError`]. The initial loader logs these and carries on with
//! an empty collection.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure to fetch or decode one sheet collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The sheet service could not be reached.
    #[error("connection to '{url}' failed: {message}")]
    Connection { url: String, message: String },

    /// The request did not complete in time.
    #[error("request to '{url}' timed out: {message}")]
    Timeout { url: String, message: String },

    /// The service answered with a non-2xx status.
    #[error("'{url}' answered HTTP {status}: {message}")]
    HttpStatus {
        url: String,
        status: u16,
        message: String,
    },

    /// The response body was not a sheet payload we understand.
    #[error("could not decode {sheet} rows: {message}")]
    Decode { sheet: String, message: String },

    /// Anything else reported by the HTTP layer.
    #[error("fetching '{url}' failed: {message}")]
    Other { url: String, message: String },
}

impl FetchError {
    /// Build a fetch error from a transport failure for `url`.
    pub fn from_http(err: HttpError, url: &str) -> Self {
        let url = url.to_string();
        match err {
            HttpError::ConnectionFailed(message) => FetchError::Connection { url, message },
            HttpError::Timeout(message) => FetchError::Timeout { url, message },
            HttpError::ServerError { status, message } => FetchError::HttpStatus {
                url,
                status,
                message,
            },
            HttpError::InvalidUrl(message) => FetchError::Other {
                url,
                message: format!("invalid URL: {}", message),
            },
            HttpError::Io(message) | HttpError::Other(message) => FetchError::Other { url, message },
        }
    }

    /// Build a decode error for the named sheet.
    pub fn decode(sheet: &str, message: impl Into<String>) -> Self {
        FetchError::Decode {
            sheet: sheet.to_string(),
            message: message.into(),
        }
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Connection { .. } => "E_FETCH_CONN",
            FetchError::Timeout { .. } => "E_FETCH_TIMEOUT",
            FetchError::HttpStatus { .. } => "E_FETCH_HTTP",
            FetchError::Decode { .. } => "E_FETCH_DECODE",
            FetchError::Other { .. } => "E_FETCH_OTHER",
        }
    }
}
