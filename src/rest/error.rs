//! Error types for the request executor.

use thiserror::Error;

/// Error type for raw HTTP operations.
///
/// Describes a request that never produced a response.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error returned by every webhook API call.
///
/// Calls are single-attempt; the caller decides whether to retry.
#[derive(Debug, Error)]
pub enum RestError {
    /// The API answered with a non-2xx status.
    #[error("Webhook API returned {status}: {body}")]
    Transport {
        /// HTTP status code of the response
        status: http::StatusCode,
        /// Raw response body
        body: String,
    },

    /// The request could not reach the API at all.
    #[error("Network error: {0}")]
    Network(#[from] HttpError),

    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body did not match the expected shape.
    #[error("Failed to decode response body: {source}")]
    Decode {
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
        /// Raw response body
        body: String,
    },

    /// The request target could not be turned into a URL.
    #[error("Invalid request target: {0}")]
    InvalidTarget(#[source] url::ParseError),
}

impl RestError {
    /// Returns the HTTP status for [`RestError::Transport`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the API was reached and rejected the request.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Returns true if the request never reached the API.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
