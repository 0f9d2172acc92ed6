//! Error types for the order service gateway.

use thiserror::Error;

/// Failures talking to the submission or retrieval endpoint.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GatewayError {
    /// The service could not be reached (refused, unreachable, connect timeout).
    #[error("Connection failed: {0}")]
    Connect(String),

    /// The service answered with a status outside the accepted set.
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// The service accepted the connection but did not answer in time.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The response body could not be decoded.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Any other transport failure.
    #[error("Request failed: {0}")]
    Request(String),
}

impl GatewayError {
    /// True when the service was unreachable, as opposed to answering badly.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, GatewayError::Connect(_))
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        // Connect timeouts report both flags; they count as unreachable.
        if e.is_connect() {
            GatewayError::Connect(e.to_string())
        } else if e.is_timeout() {
            GatewayError::Timeout(e.to_string())
        } else if e.is_decode() {
            GatewayError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            GatewayError::Status(status.as_u16())
        } else {
            GatewayError::Request(e.to_string())
        }
    }
}
