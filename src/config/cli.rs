//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::defaults;

/// Send, edit and inspect messages through a Discord webhook.
///
/// The webhook is named by `--url`, or by `--id` and `--token`, on the
/// command line or in the config file.
#[derive(Debug, Parser)]
#[command(name = "discord-webhook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Full webhook URL
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Webhook id (used with --token)
    #[arg(long, global = true)]
    pub id: Option<String>,

    /// Webhook token (used with --id)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Override of the webhook API root
    #[arg(long = "api-url", global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for discord-webhook
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a message
    Send {
        #[command(flatten)]
        content: ContentArgs,

        /// Wait for the stored message and print it
        #[arg(long)]
        wait: bool,
    },

    /// Edit a message previously sent by the webhook
    Edit {
        /// Id of the message to edit
        message_id: String,

        #[command(flatten)]
        content: ContentArgs,
    },

    /// Fetch and print the webhook's details
    Fetch,

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// Message content: text, or a JSON file holding an array of embeds.
#[derive(Debug, Clone, Args)]
pub struct ContentArgs {
    /// Message text
    #[arg(conflicts_with = "embeds")]
    pub text: Option<String>,

    /// JSON file containing an array of embeds
    #[arg(long, value_name = "FILE")]
    pub embeds: Option<PathBuf>,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
