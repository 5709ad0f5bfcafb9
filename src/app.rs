//! Exit codes, log setup and config hints for the binary.

use discord_webhook::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    use std::process::ExitCode;

    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Bad arguments, missing credentials or an unusable webhook URL.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// The request failed or the API rejected it.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Points at `init` when no usable config was found.
pub fn print_config_hint(error: &ConfigError) {
    let suggest_init = match error {
        ConfigError::MissingRequired { field: f, .. } => *f == field::CREDENTIALS,
        ConfigError::FileRead { .. } => true,
        _ => false,
    };

    if suggest_init {
        eprintln!("\nRun 'discord-webhook init' to write a config template.");
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the level.
pub fn setup_tracing(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
