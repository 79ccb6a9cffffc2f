//! Process setup errors.
//!
//! Raised before the bot connects: an unreadable or invalid `alterra.toml`,
//! an unparsable log filter, or no bot token in `DISCORD_TOKEN` / `TOKEN`.

/// Startup failure in settings, logging or credentials.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Startup Error: {} ({}:{})", message, file, line)]
pub struct ConfigError {
    /// What was wrong, naming the file, key or variable involved
    pub message: String,
    /// Line that raised it
    pub line: u32,
    /// Source file that raised it
    pub file: &'static str,
}

impl ConfigError {
    /// Record `message` at the caller's location.
    ///
    /// ```
    /// use alterra_error::ConfigError;
    ///
    /// let err = ConfigError::new("Bot token not found: set DISCORD_TOKEN or TOKEN");
    /// assert!(err.to_string().starts_with("Startup Error: Bot token not found"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
