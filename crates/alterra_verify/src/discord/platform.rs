//! Serenity-backed verification platform.

use crate::{VerificationMessage, VerificationPlatform};
use alterra_error::{AlterraResult, DiscordError, DiscordErrorKind};
use alterra_storage::Snowflake;
use async_trait::async_trait;
use serenity::all::{
    ButtonStyle, ChannelId, Colour, CreateActionRow, CreateButton, CreateEmbed, CreateMessage,
    GuildId, ReactionType,
};
use serenity::http::Http;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Posts and resolves channels through Serenity's HTTP client.
#[derive(Clone)]
pub struct SerenityPlatform {
    http: Arc<Http>,
}

impl SerenityPlatform {
    /// Share an existing HTTP client, so rate limits are coordinated with the
    /// running bot.
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    fn build_message(message: &VerificationMessage) -> CreateMessage {
        let embed = CreateEmbed::new()
            .title(message.title())
            .description(message.description())
            .colour(Colour::new(*message.colour()));

        let button = CreateButton::new(message.button_id())
            .label(message.button_label())
            .style(ButtonStyle::Primary)
            .emoji(ReactionType::Unicode(message.button_emoji().clone()));

        CreateMessage::new()
            .embed(embed)
            .components(vec![CreateActionRow::Buttons(vec![button])])
    }
}

#[async_trait]
impl VerificationPlatform for SerenityPlatform {
    #[instrument(skip(self))]
    async fn channel_exists(&self, guild: Snowflake, channel: Snowflake) -> AlterraResult<bool> {
        // Serenity ids panic on zero
        if guild.get() == 0 || channel.get() == 0 {
            return Ok(false);
        }

        let channels = self
            .http
            .get_channels(GuildId::new(guild.get()))
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch guild channels");
                DiscordError::new(DiscordErrorKind::SerenityError(format!(
                    "Failed to fetch channels: {}",
                    e
                )))
            })?;

        let found = channels.iter().any(|c| c.id.get() == channel.get());
        debug!(channel_count = channels.len(), found, "Resolved bound channel");
        Ok(found)
    }

    #[instrument(skip(self, message))]
    async fn post_verification(
        &self,
        channel: Snowflake,
        message: &VerificationMessage,
    ) -> AlterraResult<()> {
        let posted = ChannelId::new(channel.get())
            .send_message(&self.http, Self::build_message(message))
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to post verification message");
                DiscordError::new(DiscordErrorKind::MessageSendFailed(e.to_string()))
            })?;

        info!(message_id = %posted.id, "Verification message posted");
        Ok(())
    }
}
