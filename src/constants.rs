//! Fixed endpoints of the Discord API.

/// Default root of the webhook REST API.
pub const API_BASE: &str = "https://discord.com/api/webhooks";

/// Host prefix for avatar images.
pub const CDN: &str = "https://cdn.discordapp.com";

/// User agent sent with every API request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
