//! The chat-platform side of the workflow.

use crate::VerificationMessage;
use alterra_error::AlterraResult;
use alterra_storage::Snowflake;
use async_trait::async_trait;

/// Live platform operations the workflow depends on.
///
/// # Example Implementation
///
/// ```rust,ignore
/// struct NullPlatform;
///
/// #[async_trait]
/// impl VerificationPlatform for NullPlatform {
///     async fn channel_exists(&self, _guild: Snowflake, _channel: Snowflake) -> AlterraResult<bool> {
///         Ok(true)
///     }
///
///     async fn post_verification(
///         &self,
///         _channel: Snowflake,
///         _message: &VerificationMessage,
///     ) -> AlterraResult<()> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait VerificationPlatform: Send + Sync {
    /// Whether `channel` currently resolves to a channel of `guild`.
    ///
    /// A stored binding can outlive the channel it names, so this is always
    /// asked of the platform rather than the store.
    async fn channel_exists(&self, guild: Snowflake, channel: Snowflake) -> AlterraResult<bool>;

    /// Post `message` publicly into `channel`.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform rejects the post (missing
    /// permissions, network failure).
    async fn post_verification(
        &self,
        channel: Snowflake,
        message: &VerificationMessage,
    ) -> AlterraResult<()>;
}
