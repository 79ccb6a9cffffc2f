//! Per-guild verification settings.

use crate::Snowflake;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Verification settings of one guild.
///
/// Either field may be unset; a record holding only one of them is a valid
/// intermediate state between the two setup commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
pub struct GuildConfig {
    /// Channel the verification message is posted into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    verify_channel: Option<Snowflake>,

    /// Role meant to be granted on verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    verify_role: Option<Snowflake>,

    /// Fields written by other tools or later versions, kept verbatim.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl GuildConfig {
    /// Bind the verification channel.
    pub fn set_verify_channel(&mut self, channel: Snowflake) {
        self.verify_channel = Some(channel);
    }

    /// Bind the verification role.
    pub fn set_verify_role(&mut self, role: Snowflake) {
        self.verify_role = Some(role);
    }

    /// Record with the given bindings and no extra fields.
    pub fn with_bindings(channel: Option<Snowflake>, role: Option<Snowflake>) -> Self {
        Self {
            verify_channel: channel,
            verify_role: role,
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_record_omits_unset_fields() {
        let mut config = GuildConfig::default();
        config.set_verify_channel(Snowflake::new(7));

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json, serde_json::json!({ "verify_channel": 7 }));
    }

    #[test]
    fn test_unknown_fields_survive() {
        let json = serde_json::json!({
            "verify_role": "99",
            "welcome_message": "hi",
            "flags": [1, 2]
        });

        let config: GuildConfig = serde_json::from_value(json).unwrap();
        assert_eq!(*config.verify_role(), Some(Snowflake::new(99)));
        assert_eq!(config.verify_channel(), &None);
        assert_eq!(config.extra().len(), 2);

        let written = serde_json::to_value(&config).unwrap();
        assert_eq!(written["welcome_message"], "hi");
        assert_eq!(written["verify_role"], 99);
    }
}
