//! Discord bot client setup and lifecycle management.

use super::AlterraHandler;
use alterra_error::{AlterraResult, DiscordError, DiscordErrorKind};
use alterra_storage::ConfigStore;
use serenity::Client;
use std::sync::Arc;
use tracing::{info, instrument};

/// The verification bot's gateway connection.
///
/// # Example
/// ```no_run
/// use alterra_storage::ConfigStore;
/// use alterra_verify::AlterraBot;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let token = std::env::var("DISCORD_TOKEN")?;
///     let store = Arc::new(ConfigStore::load("config.json")?);
///
///     let mut bot = AlterraBot::new(&token, store, true).await?;
///     bot.start().await?;
///     Ok(())
/// }
/// ```
pub struct AlterraBot {
    client: Client,
}

impl AlterraBot {
    /// Build the Serenity client.
    ///
    /// # Errors
    /// Returns a connection error if the token is rejected by the client
    /// builder.
    #[instrument(skip(token, store), fields(token_len = token.len()))]
    pub async fn new(
        token: &str,
        store: Arc<ConfigStore>,
        register_commands: bool,
    ) -> AlterraResult<Self> {
        info!(store = %store.path().display(), "Initializing verification bot");

        let intents = AlterraHandler::intents();
        let handler = AlterraHandler::new(store, register_commands);

        let client = Client::builder(token, intents)
            .event_handler(handler)
            .await
            .map_err(|e| {
                DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                    "Failed to build client: {}",
                    e
                )))
            })?;

        info!("Serenity client built successfully");
        Ok(Self { client })
    }

    /// Run until the gateway connection ends.
    ///
    /// # Errors
    /// Returns an error if the client fails to start or hits a fatal error.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> AlterraResult<()> {
        info!("Starting Discord bot");

        self.client.start().await.map_err(|e| {
            DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                "Client error: {}",
                e
            )))
        })?;

        Ok(())
    }
}
