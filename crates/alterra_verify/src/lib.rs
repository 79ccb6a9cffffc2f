//! Guild verification workflow for the Alterra bot.
//!
//! Administrators bind a channel and a role with slash commands, then deploy
//! a message carrying a "Verify" button into the bound channel. Members click
//! the button to verify.
//!
//! # Architecture
//!
//! - **state**: per-guild setup state derived from the stored record
//! - **workflow**: the four operations, generic over a [`VerificationPlatform`]
//! - **commands**: routes platform-neutral [`Invocation`]s onto the workflow
//!   and reduces faults to a generic reply
//! - **discord**: Serenity adapter (requires the `discord` feature)
//!
//! The decision logic never touches the network directly. Everything the
//! platform has to do goes through [`VerificationPlatform`], so the workflow
//! runs against an in-memory platform in tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod commands;
mod message;
mod platform;
mod reply;
mod state;
mod workflow;

#[cfg(feature = "discord")]
mod discord;

pub use commands::{
    GUILD_ONLY_REPLY, INTERNAL_ERROR_REPLY, Invocation, RoleArg, SETUP_CHANNEL, SETUP_ROLE,
    SETUP_VERIFY, UNKNOWN_COMMAND_REPLY, dispatch, execute,
};
pub use message::{
    VERIFY_BUTTON_ID, VerificationMessage, VerificationMessageBuilder,
    VerificationMessageBuilderError,
};
pub use platform::VerificationPlatform;
pub use reply::Reply;
pub use state::{VerificationState, check_ready};
pub use workflow::{Deployment, VERIFIED_REPLY, VerificationWorkflow};

#[cfg(feature = "discord")]
pub use discord::{AlterraBot, AlterraHandler, SerenityPlatform, create_commands};
