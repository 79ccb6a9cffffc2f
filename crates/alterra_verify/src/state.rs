//! Per-guild setup state.

use alterra_error::{SetupError, SetupErrorKind};
use alterra_storage::{GuildConfig, Snowflake};

/// How far a guild has got through setup.
///
/// Derived from the stored record on demand, never stored itself. Whether a
/// message has been deployed is not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum VerificationState {
    /// No channel and no role bound.
    #[display("unconfigured")]
    Unconfigured,
    /// Channel bound, role not.
    #[display("channel only")]
    ChannelOnly,
    /// Role bound, channel not.
    #[display("role only")]
    RoleOnly,
    /// Both bound.
    #[display("ready")]
    Ready,
}

impl VerificationState {
    /// State of a guild given its record, if any.
    pub fn of(config: Option<&GuildConfig>) -> Self {
        let Some(config) = config else {
            return Self::Unconfigured;
        };

        match (config.verify_channel(), config.verify_role()) {
            (Some(_), Some(_)) => Self::Ready,
            (Some(_), None) => Self::ChannelOnly,
            (None, Some(_)) => Self::RoleOnly,
            (None, None) => Self::Unconfigured,
        }
    }
}

/// Channel a deploy should post into, judged from the stored record alone.
///
/// Only the channel binding is checked. A guild with a channel but no role
/// passes, which mirrors the behaviour the bot has always had rather than
/// what [`VerificationState::Ready`] would suggest.
pub fn check_ready(config: Option<&GuildConfig>) -> Result<Snowflake, SetupError> {
    let config = config.ok_or_else(|| SetupError::new(SetupErrorKind::NotConfigured))?;
    (*config.verify_channel()).ok_or_else(|| SetupError::new(SetupErrorKind::ChannelNotBound))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHANNEL: Snowflake = Snowflake::new(10);
    const ROLE: Snowflake = Snowflake::new(20);

    #[test]
    fn test_states() {
        assert_eq!(VerificationState::of(None), VerificationState::Unconfigured);
        assert_eq!(
            VerificationState::of(Some(&GuildConfig::default())),
            VerificationState::Unconfigured
        );
        assert_eq!(
            VerificationState::of(Some(&GuildConfig::with_bindings(Some(CHANNEL), None))),
            VerificationState::ChannelOnly
        );
        assert_eq!(
            VerificationState::of(Some(&GuildConfig::with_bindings(None, Some(ROLE)))),
            VerificationState::RoleOnly
        );
        assert_eq!(
            VerificationState::of(Some(&GuildConfig::with_bindings(Some(CHANNEL), Some(ROLE)))),
            VerificationState::Ready
        );
    }

    #[test]
    fn test_check_ready_reasons() {
        let err = check_ready(None).unwrap_err();
        assert_eq!(*err.kind(), SetupErrorKind::NotConfigured);

        let role_only = GuildConfig::with_bindings(None, Some(ROLE));
        let err = check_ready(Some(&role_only)).unwrap_err();
        assert_eq!(*err.kind(), SetupErrorKind::ChannelNotBound);
    }

    #[test]
    fn test_check_ready_ignores_role() {
        let channel_only = GuildConfig::with_bindings(Some(CHANNEL), None);
        assert_eq!(check_ready(Some(&channel_only)).unwrap(), CHANNEL);
    }
}
