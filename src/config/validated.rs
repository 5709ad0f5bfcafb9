//! Validated configuration after merging CLI and TOML sources.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::webhook::LoginOptions;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the binary.
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional
/// TOML config. Whether the URL actually names a webhook is checked when
/// the [`Webhook`](crate::Webhook) is constructed.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Options for constructing the webhook client
    pub login: LoginOptions,

    /// Request timeout
    pub timeout: Duration,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = if self.login.url.is_some() {
            "url"
        } else {
            "id/token"
        };
        let id = self.login.id.as_deref().unwrap_or("-");
        let api_url = self.login.api_url.as_deref().unwrap_or("default");

        write!(
            f,
            "Config {{ webhook: {source}, id: {id}, api_url: {api_url}, timeout: {}s }}",
            self.timeout.as_secs(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values. When the CLI
    /// names a webhook (`--url`, or both `--id` and `--token`), the file's
    /// credentials are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Neither a URL nor an id/token pair is available
    /// - The API URL override is not a valid URL
    /// - The timeout is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let login = Self::resolve_login(cli, toml)?;
        let timeout = Self::resolve_timeout(cli, toml)?;

        Ok(Self {
            login,
            timeout,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_login(cli: &Cli, toml: Option<&TomlConfig>) -> Result<LoginOptions, ConfigError> {
        let section = toml.map(|t| &t.webhook);

        // A webhook named on the command line replaces the file's credentials
        // as a whole; otherwise a file URL would outrank `--id/--token`.
        let cli_complete = cli.url.is_some() || (cli.id.is_some() && cli.token.is_some());
        let section_credentials = section.filter(|_| !cli_complete);

        let url = pick(cli.url.as_ref(), section_credentials.and_then(|s| s.url.as_ref()));
        let id = pick(cli.id.as_ref(), section_credentials.and_then(|s| s.id.as_ref()));
        let token = pick(
            cli.token.as_ref(),
            section_credentials.and_then(|s| s.token.as_ref()),
        );
        let api_url = pick(cli.api_url.as_ref(), section.and_then(|s| s.api_url.as_ref()));

        if url.is_none() && (id.is_none() || token.is_none()) {
            return Err(ConfigError::missing(
                field::CREDENTIALS,
                "Use --url (or --id and --token) or set them in the [webhook] section of the config file",
            ));
        }

        if let Some(ref api_url) = api_url {
            Url::parse(api_url).map_err(|e| ConfigError::InvalidUrl {
                url: api_url.clone(),
                reason: e.to_string(),
            })?;
        }

        Ok(LoginOptions {
            url,
            id,
            token,
            api_url,
        })
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        let timeout = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.http.timeout))
            .map_or_else(defaults::timeout, Duration::from_secs);

        if timeout.is_zero() {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(timeout)
    }
}

/// CLI value if present, else the TOML value.
fn pick(cli: Option<&String>, toml: Option<&String>) -> Option<String> {
    cli.or(toml).cloned()
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
