//! Message content supplied on the command line.

use std::path::Path;

use crate::webhook::{Embed, MessageContent};

use super::{ConfigError, ContentArgs};

/// Reads a JSON array of embeds from `path`.
///
/// # Errors
///
/// Returns [`ConfigError::EmbedsRead`] if the file cannot be read and
/// [`ConfigError::EmbedsParse`] if it is not an array of embeds.
pub fn load_embeds(path: &Path) -> Result<Vec<Embed>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::EmbedsRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&raw).map_err(|e| ConfigError::EmbedsParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Turns the content arguments into message content.
///
/// # Errors
///
/// Returns [`ConfigError::EmptyContent`] if neither text nor an embeds
/// file was given, or an embeds loading error.
pub fn message_content(args: &ContentArgs) -> Result<MessageContent, ConfigError> {
    if let Some(path) = &args.embeds {
        return load_embeds(path).map(MessageContent::embeds);
    }

    args.text
        .clone()
        .map(MessageContent::PlainText)
        .ok_or(ConfigError::EmptyContent)
}
