//! Verification workflow operations.

use crate::{Reply, VerificationMessage, VerificationPlatform, VerificationState, check_ready};
use alterra_error::{AlterraResult, SetupError, SetupErrorKind};
use alterra_storage::{ConfigStore, Snowflake};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Acknowledgement for a click on the "Verify" button.
pub const VERIFIED_REPLY: &str = "Well done.";

/// A verification message that was posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    /// Channel the message went to.
    pub channel: Snowflake,
    /// What was posted.
    pub message: VerificationMessage,
}

impl Deployment {
    /// Acknowledgement for the administrator who deployed.
    pub fn reply(&self) -> Reply {
        Reply::private(format!("Verification message deployed in <#{}>.", self.channel))
    }
}

/// The setup commands and the button click, bound to one store and platform.
///
/// Holds no guild state of its own. Every operation reads the store afresh,
/// so edits made by one command are visible to the next.
pub struct VerificationWorkflow<P> {
    store: Arc<ConfigStore>,
    platform: P,
}

impl<P: VerificationPlatform> VerificationWorkflow<P> {
    /// Create a workflow over `store` and `platform`.
    pub fn new(store: Arc<ConfigStore>, platform: P) -> Self {
        Self { store, platform }
    }

    /// The configuration store.
    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    /// The platform.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Current setup state of `guild`.
    pub fn state(&self, guild: Snowflake) -> VerificationState {
        VerificationState::of(self.store.get(guild).as_ref())
    }

    /// Bind the channel the verification message will be posted into.
    ///
    /// The channel is not checked for being postable; deploy finds out.
    #[instrument(skip(self))]
    pub fn bind_channel(&self, guild: Snowflake, channel: Snowflake) -> AlterraResult<Reply> {
        self.store.upsert(guild, |config| config.set_verify_channel(channel))?;
        info!("Verification channel bound");
        Ok(Reply::private(format!("Verification channel set to: <#{}>", channel)))
    }

    /// Bind the role meant to be granted on verification.
    #[instrument(skip(self))]
    pub fn bind_role(
        &self,
        guild: Snowflake,
        role: Snowflake,
        role_name: &str,
    ) -> AlterraResult<Reply> {
        self.store.upsert(guild, |config| config.set_verify_role(role))?;
        info!("Verification role bound");
        Ok(Reply::private(format!("Verification role set to: **{}**", role_name)))
    }

    /// Post the verification message into the bound channel.
    ///
    /// The store is read once, before any platform call. Only the channel
    /// binding is required; see [`check_ready`].
    ///
    /// # Errors
    ///
    /// Returns a setup error when the guild has no record, no bound channel,
    /// or the bound channel no longer resolves (nothing is posted then), and
    /// a platform error if posting fails.
    #[instrument(skip(self))]
    pub async fn deploy(&self, guild: Snowflake) -> AlterraResult<Deployment> {
        let channel = check_ready(self.store.get(guild).as_ref())?;
        debug!(%channel, "Resolving bound channel");

        if !self.platform.channel_exists(guild, channel).await? {
            return Err(SetupError::new(SetupErrorKind::ChannelUnresolvable(channel.get())).into());
        }

        let message = VerificationMessage::default();
        self.platform.post_verification(channel, &message).await?;
        info!(%channel, "Verification message deployed");

        Ok(Deployment { channel, message })
    }

    /// Acknowledge a member's click on the "Verify" button.
    ///
    /// This only confirms receipt. The configured `verify_role` is neither
    /// looked up nor granted; granting it would need the guild resolved from
    /// the interaction, a store lookup and a role-add call on the platform.
    #[instrument(skip(self))]
    pub fn on_verify_click(&self, guild: Option<Snowflake>, member: Snowflake) -> Reply {
        info!("Verify button clicked");
        Reply::private(VERIFIED_REPLY)
    }
}
