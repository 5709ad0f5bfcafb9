//! Configuration layer for the `discord-webhook` binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Loading message content from the command line ([`message_content`])
//!
//! # Priority
//!
//! Each option is resolved independently, highest priority first:
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file**
//! 3. **Built-in defaults**
//!
//! The webhook itself must be named by a URL or by an id/token pair. A URL
//! from either source wins over any id/token pair, matching [`Webhook`]
//! construction.
//!
//! [`Webhook`]: crate::Webhook

mod cli;
mod content;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, ContentArgs};
pub use content::{load_embeds, message_content};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
