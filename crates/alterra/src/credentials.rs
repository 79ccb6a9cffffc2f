//! Bot token lookup.

use alterra_error::{AlterraResult, ConfigError};

/// Environment variables searched for the bot token, in order.
pub const TOKEN_VARS: [&str; 2] = ["DISCORD_TOKEN", "TOKEN"];

/// Read the bot token from the process environment.
///
/// # Errors
///
/// Returns a config error if none of [`TOKEN_VARS`] holds a non-empty value.
pub fn discord_token() -> AlterraResult<String> {
    token_from(|name| std::env::var(name).ok())
}

/// Resolve the bot token through `lookup`.
pub fn token_from(lookup: impl Fn(&str) -> Option<String>) -> AlterraResult<String> {
    TOKEN_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .map(|token| token.trim().to_string())
        .find(|token| !token.is_empty())
        .ok_or_else(|| {
            ConfigError::new(format!(
                "Bot token not found: set {} or {}",
                TOKEN_VARS[0], TOKEN_VARS[1]
            ))
            .into()
        })
}
