//! Routing of user interactions onto the workflow.
//!
//! Platform adapters turn incoming events into an [`Invocation`] and send
//! back whatever [`dispatch`] returns. `dispatch` never fails: incomplete
//! setup becomes guidance text, and any other error is logged with the
//! invocation and reduced to [`INTERNAL_ERROR_REPLY`].

use crate::{Reply, VERIFY_BUTTON_ID, VerificationPlatform, VerificationWorkflow};
use alterra_error::AlterraResult;
use alterra_storage::Snowflake;
use tracing::{error, info, instrument, warn};

/// Binds the invoking channel as the verification channel.
pub const SETUP_CHANNEL: &str = "setup-channel";
/// Binds the role given in the `role` option.
pub const SETUP_ROLE: &str = "setup-role";
/// Deploys the verification message.
pub const SETUP_VERIFY: &str = "setup-verify";

/// Reply when an unhandled fault escapes an operation.
pub const INTERNAL_ERROR_REPLY: &str = "Internal error occurred.";
/// Reply when a guild command is used outside a guild.
pub const GUILD_ONLY_REPLY: &str = "This command can only be used in a server.";
/// Reply for a command or button this bot does not know.
pub const UNKNOWN_COMMAND_REPLY: &str = "Unknown command.";

/// Role picked in the `setup-role` option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleArg {
    /// Role id.
    pub id: Snowflake,
    /// Display name, echoed in the acknowledgement.
    pub name: String,
}

/// One user interaction, stripped of platform types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// `setup-channel`, run in `channel_id`.
    SetupChannel {
        /// Guild the command ran in, if any.
        guild_id: Option<Snowflake>,
        /// Channel the command ran in.
        channel_id: Snowflake,
    },
    /// `setup-role`.
    SetupRole {
        /// Guild the command ran in, if any.
        guild_id: Option<Snowflake>,
        /// The `role` option, if the platform delivered it.
        role: Option<RoleArg>,
    },
    /// `setup-verify`.
    SetupVerify {
        /// Guild the command ran in, if any.
        guild_id: Option<Snowflake>,
    },
    /// Click on the "Verify" button.
    VerifyClick {
        /// Guild the message lives in, if any.
        guild_id: Option<Snowflake>,
        /// Member who clicked.
        member_id: Snowflake,
    },
    /// A command name or component id this bot does not handle.
    Unknown {
        /// The unrecognised name or custom id.
        name: String,
    },
}

impl Invocation {
    /// Build the invocation for a slash command by name.
    pub fn command(
        name: &str,
        guild_id: Option<Snowflake>,
        channel_id: Snowflake,
        role: Option<RoleArg>,
    ) -> Self {
        match name {
            SETUP_CHANNEL => Self::SetupChannel {
                guild_id,
                channel_id,
            },
            SETUP_ROLE => Self::SetupRole { guild_id, role },
            SETUP_VERIFY => Self::SetupVerify { guild_id },
            other => Self::Unknown {
                name: other.to_string(),
            },
        }
    }

    /// Build the invocation for a button click by custom id.
    pub fn component(custom_id: &str, guild_id: Option<Snowflake>, member_id: Snowflake) -> Self {
        if custom_id == VERIFY_BUTTON_ID {
            Self::VerifyClick {
                guild_id,
                member_id,
            }
        } else {
            Self::Unknown {
                name: custom_id.to_string(),
            }
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &str {
        match self {
            Self::SetupChannel { .. } => SETUP_CHANNEL,
            Self::SetupRole { .. } => SETUP_ROLE,
            Self::SetupVerify { .. } => SETUP_VERIFY,
            Self::VerifyClick { .. } => VERIFY_BUTTON_ID,
            Self::Unknown { name } => name,
        }
    }
}

/// Run `invocation` against `workflow`, returning the reply or the fault.
///
/// Incomplete setup on deploy is already turned into guidance here; the
/// errors left are storage and platform faults.
pub async fn execute<P: VerificationPlatform>(
    workflow: &VerificationWorkflow<P>,
    invocation: &Invocation,
) -> AlterraResult<Reply> {
    match invocation {
        Invocation::SetupChannel {
            guild_id: Some(guild),
            channel_id,
        } => workflow.bind_channel(*guild, *channel_id),
        Invocation::SetupRole {
            guild_id: Some(guild),
            role: Some(role),
        } => workflow.bind_role(*guild, role.id, &role.name),
        Invocation::SetupRole {
            guild_id: Some(_),
            role: None,
        } => Ok(Reply::private("Missing required option: role.")),
        Invocation::SetupVerify {
            guild_id: Some(guild),
        } => match workflow.deploy(*guild).await {
            Ok(deployment) => Ok(deployment.reply()),
            Err(e) => match e.as_setup() {
                Some(setup) => {
                    info!(guild_id = %guild, reason = %setup.kind(), "Deploy refused");
                    Ok(Reply::private(setup.guidance()))
                }
                None => Err(e),
            },
        },
        Invocation::VerifyClick {
            guild_id,
            member_id,
        } => Ok(workflow.on_verify_click(*guild_id, *member_id)),
        Invocation::SetupChannel { guild_id: None, .. }
        | Invocation::SetupRole { guild_id: None, .. }
        | Invocation::SetupVerify { guild_id: None } => Ok(Reply::private(GUILD_ONLY_REPLY)),
        Invocation::Unknown { name } => {
            warn!(name = %name, "Unknown interaction");
            Ok(Reply::private(UNKNOWN_COMMAND_REPLY))
        }
    }
}

/// Run `invocation`, reducing any fault to [`INTERNAL_ERROR_REPLY`].
#[instrument(skip(workflow), fields(command = %invocation.name()))]
pub async fn dispatch<P: VerificationPlatform>(
    workflow: &VerificationWorkflow<P>,
    invocation: Invocation,
) -> Reply {
    match execute(workflow, &invocation).await {
        Ok(reply) => reply,
        Err(e) => {
            error!(?invocation, error = %e, "Interaction handler failed");
            Reply::private(INTERNAL_ERROR_REPLY)
        }
    }
}
