//! Error types for confee-api

use std::time::Duration;

use thiserror::Error;

use crate::types::ErrorBody;

/// Result type alias using confee-api Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the chat endpoint
#[derive(Error, Debug)]
pub enum Error {
    /// The endpoint could not be reached at all (refused, DNS, offline)
    #[error("Connection failed: {0}")]
    Connect(String),

    /// The request exceeded its timeout budget and was aborted
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The endpoint answered with a non-2xx status.
    ///
    /// `detail` is the `error` field of the JSON body, or `HTTP <status>`
    /// when the body is missing or unparseable.
    #[error("{detail}")]
    Status { status: u16, detail: String },

    /// A 2xx response whose body was not a valid chat response
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Any other request failure
    #[error("Request failed: {0}")]
    Request(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Build a status error from the raw response body
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| format!("HTTP {}", status));
        Self::Status { status, detail }
    }

    /// Map a reqwest failure onto the taxonomy.
    ///
    /// Timeouts win over connect errors: a connect attempt that ran out the
    /// clock was aborted by our own budget.
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }

    /// HTTP status, if the endpoint produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
