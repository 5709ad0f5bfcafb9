//! Tests for validated configuration.

use std::io::Write;

use tempfile::{NamedTempFile, tempdir};

use super::cli::Cli;
use super::defaults;
use super::toml::TomlConfig;
use super::validated::{ValidatedConfig, write_default_config};
use super::{ConfigError, field};

/// Helper to create CLI args from a slice; `fetch` is appended as the subcommand.
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["discord-webhook"];
    full_args.extend(args);
    full_args.push("fetch");
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

mod credentials {
    use super::*;

    #[test]
    fn missing_everything_returns_error() {
        let result = ValidatedConfig::from_raw(&cli(&[]), None);

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequired { field: f, .. }) if f == field::CREDENTIALS
        ));
    }

    #[test]
    fn id_without_token_returns_error() {
        let result = ValidatedConfig::from_raw(&cli(&["--id", "1"]), None);

        assert!(matches!(result, Err(ConfigError::MissingRequired { .. })));
    }

    #[test]
    fn url_from_cli() {
        let config = ValidatedConfig::from_raw(
            &cli(&["--url", "https://discord.com/api/webhooks/1/abc"]),
            None,
        )
        .unwrap();

        assert_eq!(
            config.login.url.as_deref(),
            Some("https://discord.com/api/webhooks/1/abc")
        );
        assert_eq!(config.timeout, defaults::timeout());
    }

    #[test]
    fn id_and_token_split_across_sources() {
        let file = toml(
            r#"
            [webhook]
            token = "from-file"
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli(&["--id", "1"]), Some(&file)).unwrap();

        assert_eq!(config.login.id.as_deref(), Some("1"));
        assert_eq!(config.login.token.as_deref(), Some("from-file"));
    }

    #[test]
    fn cli_overrides_toml() {
        let file = toml(
            r#"
            [webhook]
            url = "https://discord.com/api/webhooks/1/file"
            api_url = "https://file.example.com/api/webhooks"
        "#,
        );

        let config = ValidatedConfig::from_raw(
            &cli(&[
                "--url",
                "https://discord.com/api/webhooks/2/cli",
                "--api-url",
                "https://cli.example.com/api/webhooks",
            ]),
            Some(&file),
        )
        .unwrap();

        assert_eq!(
            config.login.url.as_deref(),
            Some("https://discord.com/api/webhooks/2/cli")
        );
        assert_eq!(
            config.login.api_url.as_deref(),
            Some("https://cli.example.com/api/webhooks")
        );
    }

    #[test]
    fn cli_id_and_token_replace_file_url() {
        let file = toml(
            r#"
            [webhook]
            url = "https://discord.com/api/webhooks/1/file-token"
            api_url = "https://file.example.com/api/webhooks"
        "#,
        );

        let config = ValidatedConfig::from_raw(
            &cli(&["--id", "2", "--token", "cli-token"]),
            Some(&file),
        )
        .unwrap();
        let webhook =
            crate::Webhook::with_client(crate::rest::ReqwestClient::new(), config.login.clone())
                .unwrap();

        assert_eq!(config.login.url, None);
        assert_eq!(webhook.id(), "2");
        assert_eq!(webhook.token(), "cli-token");
        assert_eq!(
            config.login.api_url.as_deref(),
            Some("https://file.example.com/api/webhooks")
        );
    }

    #[test]
    fn cli_url_replaces_file_id_and_token() {
        let file = toml(
            r#"
            [webhook]
            id = "1"
            token = "file-token"
        "#,
        );

        let config = ValidatedConfig::from_raw(
            &cli(&["--url", "https://discord.com/api/webhooks/2/cli-token"]),
            Some(&file),
        )
        .unwrap();

        assert_eq!(config.login.id, None);
        assert_eq!(config.login.token, None);
    }

    #[test]
    fn invalid_api_url_returns_error() {
        let result = ValidatedConfig::from_raw(
            &cli(&["--id", "1", "--token", "abc", "--api-url", "not a url"]),
            None,
        );

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }
}

mod timeout {
    use super::*;

    #[test]
    fn toml_timeout_used_without_cli() {
        let file = toml(
            r#"
            [webhook]
            url = "https://discord.com/api/webhooks/1/abc"

            [http]
            timeout = 7
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&file)).unwrap();

        assert_eq!(config.timeout.as_secs(), 7);
    }

    #[test]
    fn cli_timeout_wins() {
        let file = toml(
            r#"
            [http]
            timeout = 7
        "#,
        );

        let config = ValidatedConfig::from_raw(
            &cli(&["--id", "1", "--token", "abc", "--timeout", "3"]),
            Some(&file),
        )
        .unwrap();

        assert_eq!(config.timeout.as_secs(), 3);
    }

    #[test]
    fn zero_timeout_returns_error() {
        let result =
            ValidatedConfig::from_raw(&cli(&["--id", "1", "--token", "abc", "--timeout", "0"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidDuration {
                field: "timeout",
                ..
            })
        ));
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_reads_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[webhook]\nid = \"1\"\ntoken = \"abc\"").unwrap();
        let path = file.path().to_str().unwrap();

        let cli = cli(&["--config", path]);
        let config = ValidatedConfig::load(&cli).unwrap();

        assert_eq!(config.login.id.as_deref(), Some("1"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let cli = cli(&["--config", path.to_str().unwrap()]);
        let result = ValidatedConfig::load(&cli);

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn display_does_not_leak_token() {
        let config = ValidatedConfig::from_raw(
            &cli(&["--url", "https://discord.com/api/webhooks/1/secret-token"]),
            None,
        )
        .unwrap();

        let shown = config.to_string();
        assert!(shown.contains("webhook: url"));
        assert!(!shown.contains("secret-token"));
    }

    #[test]
    fn write_default_config_creates_parsable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("discord-webhook.toml");

        write_default_config(&path).unwrap();

        let loaded = TomlConfig::load(&path).unwrap();
        assert!(loaded.webhook.url.is_none());
    }
}
