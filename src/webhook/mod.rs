//! Webhook client layer.
//!
//! This module provides:
//! - Construction options and identity parsing ([`LoginOptions`], [`WebhookIdentity`])
//! - Message content and the Discord objects it carries ([`MessageContent`], [`Embed`], [`Attachment`])
//! - Message projections ([`PartialMessage`], [`RemoteMessage`], [`MessageRef`])
//! - Cached webhook details ([`WebhookMetadata`])
//! - The client itself ([`Webhook`])

mod client;
mod content;
mod error;
mod identity;
mod message;
mod metadata;


pub use client::Webhook;
pub use content::{
    Attachment, Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedMedia, MessageContent,
    MessagePayload,
};
pub use error::ConfigurationError;
pub use identity::{LoginOptions, WebhookIdentity};
pub use message::{MessageRef, PartialMessage, RemoteMessage};
pub use metadata::{FetchWebhookResponse, WebhookMetadata, avatar_url};
