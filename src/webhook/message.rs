//! Message projections returned by send and edit.

use serde::{Deserialize, Serialize};

use super::{Attachment, Embed};

/// Message reconstructed locally after [`Webhook::send`](super::Webhook::send).
///
/// The execute endpoint does not return the message unless asked to wait,
/// so this carries only what was sent plus the cached channel and guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialMessage {
    pub content: String,
    pub channel_id: Option<String>,
    pub guild_id: Option<String>,
    pub embeds: Vec<Embed>,
}

/// A message as returned by the API.
///
/// Fields this crate does not model are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteMessage {
    pub id: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub embeds: Vec<Embed>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_timestamp: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Identifies the message to edit: a bare id or a fetched message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRef(String);

impl MessageRef {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MessageRef {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MessageRef {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&RemoteMessage> for MessageRef {
    fn from(message: &RemoteMessage) -> Self {
        Self(message.id.clone())
    }
}
