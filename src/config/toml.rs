//! TOML configuration file parsing.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Webhook configuration section
    #[serde(default)]
    pub webhook: WebhookSection,

    /// HTTP client configuration section
    #[serde(default)]
    pub http: HttpSection,
}

/// Webhook configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Full webhook URL
    pub url: Option<String>,

    /// Webhook id
    pub id: Option<String>,

    /// Webhook token
    pub token: Option<String>,

    /// Override of the webhook API root
    pub api_url: Option<String>,
}

/// HTTP client configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpSection {
    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# discord-webhook configuration file

[webhook]
# Full webhook URL (copied from the channel's integration settings)
# url = "https://discord.com/api/webhooks/123456789012345678/your-token"

# Alternatively, the webhook id and token
# id = "123456789012345678"
# token = "your-token"

# Override of the API root (default: https://discord.com/api/webhooks)
# api_url = "https://canary.discord.com/api/webhooks"

[http]
# Request timeout in seconds (default: 30)
# timeout = 30
"#
    .to_string()
}
