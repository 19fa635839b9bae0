// --- File: crates/planetwatcher_common/src/error.rs ---
use std::time::Duration;
use thiserror::Error;

/// The base error type for all Planetwatcher client errors.
///
/// Public transport and registration calls never hand these out; they log
/// them and return a sentinel instead. The `try_*` paths and construction
/// code return them directly.
#[derive(Error, Debug)]
pub enum PlanetwatcherError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// The request did not complete before its deadline
    #[error("Request to {endpoint} timed out after {timeout:?}")]
    TimeoutError { endpoint: String, timeout: Duration },

    /// The backend answered with a non-success status
    #[error("Unexpected status {status}: {body}")]
    StatusError { status: u16, body: String },

    /// Error occurred while serializing or parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl PlanetwatcherError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, PlanetwatcherError::TimeoutError { .. })
    }
}

impl From<reqwest::Error> for PlanetwatcherError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PlanetwatcherError::ParseError(err.to_string())
        } else {
            PlanetwatcherError::HttpError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PlanetwatcherError {
    fn from(err: serde_json::Error) -> Self {
        PlanetwatcherError::ParseError(err.to_string())
    }
}

impl From<planetwatcher_config::ConfigError> for PlanetwatcherError {
    fn from(err: planetwatcher_config::ConfigError) -> Self {
        PlanetwatcherError::ConfigError(err.to_string())
    }
}

pub fn config_error<T: std::fmt::Display>(message: T) -> PlanetwatcherError {
    PlanetwatcherError::ConfigError(message.to_string())
}
