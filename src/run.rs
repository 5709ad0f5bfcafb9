//! Application execution logic.
//!
//! Builds the webhook client from validated config and runs one
//! subcommand against it.

use serde_json::json;
use thiserror::Error;

use discord_webhook::config::{Command, ConfigError, ValidatedConfig, message_content};
use discord_webhook::rest::{HttpClient, HttpError, ReqwestClient, RestError};
use discord_webhook::{ConfigurationError, Webhook};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The options do not name a valid webhook.
    #[error("{0}")]
    Webhook(#[from] ConfigurationError),

    /// Message content could not be assembled.
    #[error("{0}")]
    Content(#[from] ConfigError),

    /// The HTTP client could not be created.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] HttpError),

    /// The webhook API call failed.
    #[error("Webhook request failed: {0}")]
    Request(#[from] RestError),

    /// The result could not be rendered.
    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

impl RunError {
    /// Returns true for errors caused by user input rather than the network.
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Webhook(_) | Self::Content(_))
    }
}

/// Creates the webhook client and runs `command`, returning the text to print.
pub async fn execute(config: ValidatedConfig, command: &Command) -> Result<String, RunError> {
    let client = ReqwestClient::with_timeout(config.timeout).map_err(RunError::Client)?;
    let webhook = Webhook::with_client(client, config.login)?;

    execute_with(&webhook, command).await
}

/// Runs `command` against an existing client.
pub async fn execute_with<H: HttpClient>(
    webhook: &Webhook<H>,
    command: &Command,
) -> Result<String, RunError> {
    match command {
        Command::Send { content, wait } => {
            let content = message_content(content)?;
            let output = if *wait {
                let message = webhook.send_and_wait(content).await?;
                tracing::info!(message_id = %message.id, "Message sent");
                serde_json::to_string_pretty(&message)?
            } else {
                let message = webhook.send(content).await?;
                tracing::info!("Message sent");
                serde_json::to_string_pretty(&message)?
            };
            Ok(output)
        }
        Command::Edit {
            message_id,
            content,
        } => {
            let content = message_content(content)?;
            let message = webhook.edit_message(message_id.as_str(), content).await?;
            tracing::info!(message_id = %message.id, "Message edited");
            Ok(serde_json::to_string_pretty(&message)?)
        }
        Command::Fetch => {
            let webhook = webhook.fetch().await?;
            let metadata = webhook.metadata();
            let details = json!({
                "id": webhook.id(),
                "name": metadata.name,
                "channel_id": metadata.channel_id,
                "guild_id": metadata.guild_id,
                "avatar_url": metadata.avatar_url,
            });
            Ok(serde_json::to_string_pretty(&details)?)
        }
        // Handled before the runtime starts.
        Command::Init { .. } => Ok(String::new()),
    }
}
