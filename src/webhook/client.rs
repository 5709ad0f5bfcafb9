//! The webhook client.

use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use crate::constants;
use crate::rest::{HttpClient, ReqwestClient, RestError, RestHandler};

use super::{
    ConfigurationError, FetchWebhookResponse, LoginOptions, MessageContent, MessagePayload,
    MessageRef, PartialMessage, RemoteMessage, WebhookIdentity, WebhookMetadata,
};

/// Client for a single Discord webhook.
///
/// Holds an immutable [`WebhookIdentity`] and a metadata cell that only
/// [`Webhook::fetch`] writes. Every operation issues exactly one request;
/// errors from the API are returned unchanged and never retried.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use discord_webhook::{Embed, LoginOptions, Webhook};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let webhook = Webhook::new(LoginOptions::from_url(
///     "https://discord.com/api/webhooks/123/token",
/// ))?;
///
/// webhook.send("Hello!").await?;
/// webhook.send(Embed::new().with_title("Status").with_description("ok")).await?;
///
/// let name = webhook.fetch().await?.name();
/// println!("posting as {name:?}");
/// # Ok(())
/// # }
/// ```
pub struct Webhook<H = ReqwestClient> {
    identity: WebhookIdentity,
    rest: RestHandler<H>,
    /// `None` until the first successful fetch.
    metadata: RwLock<Option<WebhookMetadata>>,
}

impl Webhook<ReqwestClient> {
    /// Creates a webhook client using the default reqwest HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the options name no webhook,
    /// the URL is malformed, or the API URL override is invalid.
    pub fn new(options: LoginOptions) -> Result<Self, ConfigurationError> {
        Self::with_client(ReqwestClient::new(), options)
    }
}

impl<H> Webhook<H> {
    /// Creates a webhook client sending requests through `client`.
    ///
    /// `options.api_url` replaces [`API_BASE`](constants::API_BASE) for
    /// every relative request and for the URL derived from an id/token pair.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the options name no webhook,
    /// the URL is malformed, or the API URL override is invalid.
    pub fn with_client(client: H, options: LoginOptions) -> Result<Self, ConfigurationError> {
        let base_url = resolve_base_url(options.api_url.as_deref())?;
        let identity = WebhookIdentity::resolve(&options, &base_url)?;

        Ok(Self {
            identity,
            rest: RestHandler::new(client, base_url),
            metadata: RwLock::new(None),
        })
    }

    /// Returns the immutable identity.
    #[must_use]
    pub const fn identity(&self) -> &WebhookIdentity {
        &self.identity
    }

    #[must_use]
    pub fn id(&self) -> &str {
        self.identity.id()
    }

    #[must_use]
    pub fn token(&self) -> &str {
        self.identity.token()
    }

    /// Full webhook URL, as supplied or derived from id and token.
    #[must_use]
    pub fn url(&self) -> &str {
        self.identity.url()
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &H {
        self.rest.client()
    }

    /// API root used for relative requests.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.rest.base_url()
    }

    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.read_metadata().as_ref().and_then(|m| m.name.clone())
    }

    #[must_use]
    pub fn channel_id(&self) -> Option<String> {
        self.read_metadata()
            .as_ref()
            .and_then(|m| m.channel_id.clone())
    }

    #[must_use]
    pub fn guild_id(&self) -> Option<String> {
        self.read_metadata().as_ref().and_then(|m| m.guild_id.clone())
    }

    #[must_use]
    pub fn avatar_url(&self) -> Option<String> {
        self.read_metadata()
            .as_ref()
            .and_then(|m| m.avatar_url.clone())
    }

    /// Snapshot of the cached metadata (all `None` before a fetch).
    #[must_use]
    pub fn metadata(&self) -> WebhookMetadata {
        self.read_metadata().clone().unwrap_or_default()
    }

    /// Returns true once a fetch has succeeded.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.read_metadata().is_some()
    }

    fn read_metadata(&self) -> RwLockReadGuard<'_, Option<WebhookMetadata>> {
        // Writers replace the value in one assignment, so a poisoned lock
        // still holds consistent data.
        self.metadata.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<H: HttpClient> Webhook<H> {
    /// Posts a message to the webhook's channel.
    ///
    /// The returned [`PartialMessage`] is built from `content` and the cached
    /// channel/guild ids, not from the API response. Use
    /// [`Webhook::send_and_wait`] to get the message as stored by Discord.
    ///
    /// # Errors
    ///
    /// Returns the [`RestError`] of the underlying request.
    pub async fn send(
        &self,
        content: impl Into<MessageContent> + Send,
    ) -> Result<PartialMessage, RestError> {
        let payload = MessagePayload::from(content.into());
        tracing::debug!(webhook_id = %self.id(), embeds = payload.embeds.len(), "Sending message");

        self.rest.post(&self.identity.route(), &payload).await?;

        let metadata = self.metadata();
        Ok(PartialMessage {
            content: payload.content,
            channel_id: metadata.channel_id,
            guild_id: metadata.guild_id,
            embeds: payload.embeds,
        })
    }

    /// Posts a message and returns it as stored by Discord, including its id.
    ///
    /// # Errors
    ///
    /// Returns the [`RestError`] of the underlying request.
    pub async fn send_and_wait(
        &self,
        content: impl Into<MessageContent> + Send,
    ) -> Result<RemoteMessage, RestError> {
        let payload = MessagePayload::from(content.into());
        tracing::debug!(webhook_id = %self.id(), embeds = payload.embeds.len(), "Sending message and waiting");

        let target = format!("{}?wait=true", self.identity.route());
        self.rest.post_json(&target, &payload).await
    }

    /// Replaces the content of a message previously sent by this webhook.
    ///
    /// # Errors
    ///
    /// Returns the [`RestError`] of the underlying request.
    pub async fn edit_message(
        &self,
        message: impl Into<MessageRef> + Send,
        new_content: impl Into<MessageContent> + Send,
    ) -> Result<RemoteMessage, RestError> {
        let message = message.into();
        let payload = MessagePayload::from(new_content.into());
        tracing::debug!(webhook_id = %self.id(), message_id = %message.as_str(), "Editing message");

        let target = format!("{}/messages/{}", self.identity.url(), message.as_str());
        self.rest.patch(&target, &payload).await
    }

    /// Fetches the webhook's details and caches them.
    ///
    /// Returns `self` so the refreshed fields can be read in the same
    /// expression. On failure the cached metadata is left untouched.
    /// Overlapping fetches each replace the whole cache; the last one to
    /// complete wins.
    ///
    /// # Errors
    ///
    /// Returns the [`RestError`] of the underlying request.
    pub async fn fetch(&self) -> Result<&Self, RestError> {
        let response: FetchWebhookResponse = self.rest.get(&self.identity.route()).await?;
        let metadata = WebhookMetadata::from_response(self.identity.id(), response);
        tracing::debug!(webhook_id = %self.id(), name = ?metadata.name, "Fetched webhook");

        *self
            .metadata
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(metadata);
        Ok(self)
    }
}

impl<H> fmt::Debug for Webhook<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Webhook")
            .field("identity", &self.identity)
            .field("base_url", &self.rest.base_url())
            .field("metadata", &*self.read_metadata())
            .finish_non_exhaustive()
    }
}

/// Validates the API root override, falling back to the default root.
fn resolve_base_url(api_url: Option<&str>) -> Result<String, ConfigurationError> {
    let Some(api_url) = api_url.filter(|url| !url.is_empty()) else {
        return Ok(constants::API_BASE.to_string());
    };

    let parsed = url::Url::parse(api_url).map_err(|e| ConfigurationError::InvalidApiUrl {
        url: api_url.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigurationError::InvalidApiUrl {
            url: api_url.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    Ok(api_url.trim_end_matches('/').to_string())
}
