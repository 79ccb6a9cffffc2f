//! Serenity event handler for the verification bot.
//!
//! Registers the slash commands once the gateway is ready and routes every
//! command and button interaction through [`dispatch`](crate::dispatch).

use super::commands::{command_invocation, component_invocation, create_commands, response};
use super::SerenityPlatform;
use crate::{VerificationWorkflow, dispatch};
use alterra_storage::ConfigStore;
use serenity::all::{Command, Interaction, Ready};
use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::gateway::GatewayIntents;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Event handler for the verification bot.
pub struct AlterraHandler {
    store: Arc<ConfigStore>,
    register_commands: bool,
}

impl AlterraHandler {
    /// Create a handler over `store`.
    ///
    /// With `register_commands` unset the global command list is left as is.
    pub fn new(store: Arc<ConfigStore>, register_commands: bool) -> Self {
        Self {
            store,
            register_commands,
        }
    }

    /// Required gateway intents for the bot.
    ///
    /// Interactions arrive without any privileged intent.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
    }

    fn workflow(&self, ctx: &Context) -> VerificationWorkflow<SerenityPlatform> {
        VerificationWorkflow::new(self.store.clone(), SerenityPlatform::new(ctx.http.clone()))
    }
}

#[async_trait]
impl EventHandler for AlterraHandler {
    /// Called when the bot successfully connects to Discord.
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            bot_user = %ready.user.name,
            bot_id = %ready.user.id,
            guilds = ready.guilds.len(),
            "Bot connected to Discord"
        );

        if !self.register_commands {
            debug!("Skipping slash command registration");
            return;
        }

        match Command::set_global_commands(&ctx.http, create_commands()).await {
            Ok(commands) => info!(count = commands.len(), "Registered slash commands"),
            Err(e) => error!(error = %e, "Failed to register slash commands"),
        }
    }

    /// Called for every slash command and component interaction.
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) => {
                let reply = dispatch(&self.workflow(&ctx), command_invocation(&command)).await;
                if let Err(e) = command.create_response(&ctx.http, response(&reply)).await {
                    error!(
                        command = %command.data.name,
                        error = %e,
                        "Failed to respond to command"
                    );
                }
            }
            Interaction::Component(component) => {
                let reply = dispatch(&self.workflow(&ctx), component_invocation(&component)).await;
                if let Err(e) = component.create_response(&ctx.http, response(&reply)).await {
                    error!(
                        custom_id = %component.data.custom_id,
                        error = %e,
                        "Failed to respond to component"
                    );
                }
            }
            other => warn!(kind = ?other.kind(), "Ignoring unsupported interaction"),
        }
    }
}
