//! Webhook identity and the options it is built from.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::ConfigurationError;

/// Matches `<scheme>://<host>/api[/v<N>]/webhooks/{id}/{token}`, optionally
/// followed by a path, query or fragment.
static WEBHOOK_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^/\s]+/api(?:/v\d+)?/webhooks/([^/?#\s]+)/([^/?#\s]+)(?:[/?#]\S*)?$")
        .expect("webhook URL pattern is valid")
});

/// Options accepted when constructing a [`Webhook`](super::Webhook).
///
/// Supply either `url`, or both `id` and `token`. When `url` is present
/// it takes precedence and `id`/`token` are ignored.
///
/// # Example
///
/// ```
/// use discord_webhook::LoginOptions;
///
/// let by_url = LoginOptions::from_url("https://discord.com/api/webhooks/1/abc");
/// let by_credentials = LoginOptions::from_credentials("1", "abc")
///     .with_api_url("https://canary.discord.com/api/webhooks");
/// # let _ = (by_url, by_credentials);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginOptions {
    /// Full webhook URL
    pub url: Option<String>,
    /// Webhook id
    pub id: Option<String>,
    /// Webhook token
    pub token: Option<String>,
    /// Override of the API root (default: [`API_BASE`](crate::constants::API_BASE))
    pub api_url: Option<String>,
}

impl LoginOptions {
    /// Options identifying the webhook by its full URL.
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Options identifying the webhook by id and token.
    #[must_use]
    pub fn from_credentials(id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Sets the API root override.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }
}

impl fmt::Debug for LoginOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginOptions")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("id", &self.id)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// Immutable identity of a webhook: id, token, and URL.
#[derive(Clone, PartialEq, Eq)]
pub struct WebhookIdentity {
    id: String,
    token: String,
    url: String,
}

impl WebhookIdentity {
    /// Extracts id and token from a webhook URL.
    ///
    /// The stored URL is the matched `.../webhooks/{id}/{token}` prefix, so
    /// a trailing slash, query or fragment on the input is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidWebhookUrl`] if the URL does not
    /// contain `/api/webhooks/{id}/{token}`.
    pub fn parse_url(url: &str) -> Result<Self, ConfigurationError> {
        let invalid = || ConfigurationError::InvalidWebhookUrl {
            url: url.to_string(),
        };
        let trimmed = url.trim();
        let captures = WEBHOOK_URL.captures(trimmed).ok_or_else(invalid)?;

        match (captures.get(1), captures.get(2)) {
            (Some(id), Some(token)) => Ok(Self {
                id: id.as_str().to_string(),
                token: token.as_str().to_string(),
                url: trimmed[..token.end()].to_string(),
            }),
            _ => Err(invalid()),
        }
    }

    /// Builds an identity from id and token, deriving the URL from `base_url`.
    #[must_use]
    pub fn from_credentials(
        id: impl Into<String>,
        token: impl Into<String>,
        base_url: &str,
    ) -> Self {
        let id = id.into();
        let token = token.into();
        let url = format!("{}/{id}/{token}", base_url.trim_end_matches('/'));
        Self { id, token, url }
    }

    /// Resolves login options into an identity.
    ///
    /// Empty strings count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the URL is malformed or neither a
    /// URL nor a complete id/token pair is present.
    pub fn resolve(options: &LoginOptions, base_url: &str) -> Result<Self, ConfigurationError> {
        let present = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

        if let Some(url) = present(&options.url) {
            return Self::parse_url(&url);
        }

        match (present(&options.id), present(&options.token)) {
            (Some(id), Some(token)) => Ok(Self::from_credentials(id, token, base_url)),
            _ => Err(ConfigurationError::MissingCredentials),
        }
    }

    /// Webhook id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Webhook token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Full webhook URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Path of this webhook relative to the API root: `/{id}/{token}`.
    #[must_use]
    pub fn route(&self) -> String {
        format!("/{}/{}", self.id, self.token)
    }
}

impl fmt::Debug for WebhookIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookIdentity")
            .field("id", &self.id)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}
