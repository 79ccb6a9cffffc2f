//! Slash command definitions and interaction conversion.

use crate::{Invocation, Reply, RoleArg, SETUP_CHANNEL, SETUP_ROLE, SETUP_VERIFY};
use alterra_storage::Snowflake;
use serenity::all::{
    CommandInteraction, CommandOptionType, ComponentInteraction, CreateCommand,
    CreateCommandOption, CreateInteractionResponse, CreateInteractionResponseMessage,
    Permissions, ResolvedValue,
};

/// Create all slash commands for registration.
///
/// Commands are guild-only and default to members who can manage the guild.
pub fn create_commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(SETUP_CHANNEL)
            .description("Set the verification channel.")
            .default_member_permissions(Permissions::MANAGE_GUILD)
            .dm_permission(false),
        CreateCommand::new(SETUP_ROLE)
            .description("Select the role given to verified members.")
            .default_member_permissions(Permissions::MANAGE_GUILD)
            .dm_permission(false)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Role,
                    "role",
                    "Role to give after verification",
                )
                .required(true),
            ),
        CreateCommand::new(SETUP_VERIFY)
            .description("Deploy the verification message.")
            .default_member_permissions(Permissions::MANAGE_GUILD)
            .dm_permission(false),
    ]
}

/// Convert a slash command interaction.
pub(super) fn command_invocation(command: &CommandInteraction) -> Invocation {
    let role = command
        .data
        .options()
        .into_iter()
        .find(|option| option.name == "role")
        .and_then(|option| match option.value {
            ResolvedValue::Role(role) => Some(RoleArg {
                id: Snowflake::new(role.id.get()),
                name: role.name.clone(),
            }),
            _ => None,
        });

    Invocation::command(
        &command.data.name,
        command.guild_id.map(|id| Snowflake::new(id.get())),
        Snowflake::new(command.channel_id.get()),
        role,
    )
}

/// Convert a button click.
pub(super) fn component_invocation(component: &ComponentInteraction) -> Invocation {
    Invocation::component(
        &component.data.custom_id,
        component.guild_id.map(|id| Snowflake::new(id.get())),
        Snowflake::new(component.user.id.get()),
    )
}

/// Interaction response carrying `reply`.
pub(super) fn response(reply: &Reply) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(reply.content())
            .ephemeral(*reply.ephemeral()),
    )
}
