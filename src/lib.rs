//! Discord webhook client.
//!
//! Builds a webhook identity from a URL or an id/token pair and exposes
//! the three webhook operations (send, edit, fetch) over the Discord REST
//! API. Calls are single-attempt; rate limits and retries are left to the
//! caller.
//!
//! ```no_run
//! use discord_webhook::{LoginOptions, Webhook};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let webhook = Webhook::new(LoginOptions::from_credentials("123", "token"))?;
//! let message = webhook.send_and_wait("first draft").await?;
//! webhook.edit_message(&message, "final text").await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod rest;
pub mod webhook;

pub use rest::RestError;
pub use webhook::{
    Attachment, ConfigurationError, Embed, LoginOptions, MessageContent, MessageRef,
    PartialMessage, RemoteMessage, Webhook, WebhookMetadata,
};
