//! Acknowledgements sent back to the user who triggered an interaction.

use derive_getters::Getters;

/// Text response to an interaction.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Reply {
    /// Message body.
    content: String,
    /// Whether only the invoking user can see it.
    ephemeral: bool,
}

impl Reply {
    /// Reply visible only to the invoking user.
    pub fn private(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
        }
    }
}
