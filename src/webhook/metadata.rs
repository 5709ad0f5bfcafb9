//! Webhook metadata populated by fetch.

use serde::Deserialize;

use crate::constants;

/// Body of `GET /webhooks/{id}/{token}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FetchWebhookResponse {
    #[serde(rename = "type", default)]
    pub kind: u8,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar hash
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub guild_id: Option<String>,
    #[serde(default)]
    pub application_id: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Cached webhook details. Every field is `None` until a fetch succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookMetadata {
    pub name: Option<String>,
    pub channel_id: Option<String>,
    pub guild_id: Option<String>,
    pub avatar_url: Option<String>,
}

impl WebhookMetadata {
    pub(crate) fn from_response(webhook_id: &str, response: FetchWebhookResponse) -> Self {
        Self {
            name: response.name,
            channel_id: response.channel_id,
            guild_id: response.guild_id,
            avatar_url: response
                .avatar
                .map(|hash| avatar_url(constants::CDN, webhook_id, &hash)),
        }
    }
}

/// Builds `{cdn}/avatars/{webhook_id}/{hash}`.
#[must_use]
pub fn avatar_url(cdn: &str, webhook_id: &str, hash: &str) -> String {
    format!("{}/avatars/{webhook_id}/{hash}", cdn.trim_end_matches('/'))
}
