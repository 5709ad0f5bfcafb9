//! Error types for webhook construction.

use thiserror::Error;

/// Error raised while constructing a [`Webhook`](super::Webhook).
///
/// Construction either fully succeeds or fails with one of these;
/// no partially initialized client is ever returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The supplied URL does not contain `/api/webhooks/{id}/{token}`.
    #[error("'{url}' is not a valid webhook URL; supply an id and token instead")]
    InvalidWebhookUrl {
        /// The rejected URL
        url: String,
    },

    /// Neither a URL nor a complete id/token pair was supplied.
    #[error("a webhook URL or both a webhook id and token must be supplied")]
    MissingCredentials,

    /// The API root override is not a valid URL.
    #[error("invalid API URL '{url}': {reason}")]
    InvalidApiUrl {
        /// The rejected URL
        url: String,
        /// Reason for invalidity
        reason: String,
    },
}
