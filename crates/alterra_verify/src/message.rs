//! The verification message posted into the bound channel.

use derive_builder::Builder;
use derive_getters::Getters;

/// Custom id carried by the "Verify" button.
///
/// Clicks are routed by this id alone, so buttons posted before a restart
/// keep working.
pub const VERIFY_BUTTON_ID: &str = "alterra:verify";

/// Embed plus one button, as posted by a deploy.
///
/// Nothing about a posted message is remembered; deploying again posts
/// another copy.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder)]
#[builder(setter(into), default)]
pub struct VerificationMessage {
    /// Embed title.
    title: String,
    /// Embed body.
    description: String,
    /// Embed accent colour as `0xRRGGBB`.
    colour: u32,
    /// Button label.
    button_label: String,
    /// Unicode emoji shown on the button.
    button_emoji: String,
    /// Button custom id.
    button_id: String,
}

impl Default for VerificationMessage {
    fn default() -> Self {
        Self {
            title: "Alterra Verification".to_string(),
            description: "Please complete the verification process to access the server. \
                          This procedure ensures compliance with Alterra protocols."
                .to_string(),
            colour: 0xE67E22,
            button_label: "Verify".to_string(),
            button_emoji: "\u{2714}\u{fe0f}".to_string(),
            button_id: VERIFY_BUTTON_ID.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message() {
        let message = VerificationMessage::default();
        assert_eq!(message.title(), "Alterra Verification");
        assert_eq!(message.button_label(), "Verify");
        assert_eq!(message.button_id(), VERIFY_BUTTON_ID);
        assert_eq!(*message.colour(), 0xE67E22);
        assert!(message.description().starts_with("Please complete"));
    }

    #[test]
    fn test_builder_keeps_unset_defaults() {
        let message = VerificationMessageBuilder::default()
            .title("Gatehouse")
            .build()
            .expect("Valid message");

        assert_eq!(message.title(), "Gatehouse");
        assert_eq!(message.button_id(), VERIFY_BUTTON_ID);
        assert_eq!(message.button_label(), "Verify");
    }
}
