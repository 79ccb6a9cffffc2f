//! Bot startup.

use alterra::{AlterraSettings, discord_token};
use alterra_error::AlterraResult;
use alterra_storage::ConfigStore;
use alterra_verify::AlterraBot;
use std::sync::Arc;
use tracing::{info, instrument};

/// Load the store, connect and serve until the gateway closes.
#[instrument(skip_all, fields(store = %settings.store_path().display()))]
pub async fn run_bot(settings: &AlterraSettings) -> AlterraResult<()> {
    let token = discord_token()?;
    let store = Arc::new(ConfigStore::load(settings.store_path())?);
    info!(guilds = store.len(), "Configuration store loaded");

    let mut bot = AlterraBot::new(&token, store, *settings.register_commands()).await?;
    bot.start().await
}
