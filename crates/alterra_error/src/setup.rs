//! Incomplete verification setup.
//!
//! Raised when a guild asks to deploy the verification message before the
//! store holds enough to do so. These are recovered into guidance replies for
//! the administrator and never surface as faults.

use derive_getters::Getters;

/// Reason a deploy was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum SetupErrorKind {
    /// The guild has no record in the store at all.
    #[display("No configuration exists for this guild")]
    NotConfigured,

    /// The guild has a record but no verification channel.
    #[display("Verification channel not bound")]
    ChannelNotBound,

    /// The bound channel id no longer resolves to a channel of the guild.
    #[display("Verification channel {_0} no longer resolves")]
    ChannelUnresolvable(u64),
}

impl SetupErrorKind {
    /// Text shown to the administrator who attempted the deploy.
    pub fn guidance(&self) -> &'static str {
        match self {
            Self::NotConfigured => "Missing setup: channel and role must be configured.",
            Self::ChannelNotBound => "Missing setup: /setup-channel has not been run.",
            Self::ChannelUnresolvable(_) => "Channel missing or invalid.",
        }
    }
}

/// Setup error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Setup Error: {} at line {} in {}", kind, line, file)]
pub struct SetupError {
    kind: SetupErrorKind,
    line: u32,
    file: &'static str,
}

impl SetupError {
    /// Create a new SetupError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use alterra_error::{SetupError, SetupErrorKind};
    ///
    /// let err = SetupError::new(SetupErrorKind::ChannelNotBound);
    /// assert_eq!(err.guidance(), "Missing setup: /setup-channel has not been run.");
    /// ```
    #[track_caller]
    pub fn new(kind: SetupErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Guidance text for the error kind.
    pub fn guidance(&self) -> &'static str {
        self.kind.guidance()
    }
}
