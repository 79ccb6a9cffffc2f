//! Top-level error wrapper types.

use crate::{ConfigError, DiscordError, SetupError, StorageError};

/// Every error the bot can raise, by layer.
///
/// # Examples
///
/// ```
/// use alterra_error::{AlterraError, AlterraErrorKind, SetupError, SetupErrorKind};
///
/// let err: AlterraError = SetupError::new(SetupErrorKind::NotConfigured).into();
/// assert!(matches!(err.kind(), AlterraErrorKind::Setup(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum AlterraErrorKind {
    /// Configuration store error
    #[from(StorageError)]
    Storage(StorageError),
    /// Incomplete verification setup
    #[from(SetupError)]
    Setup(SetupError),
    /// Discord platform error
    #[from(DiscordError)]
    Discord(DiscordError),
    /// Settings or credential error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Alterra error with kind discrimination.
///
/// # Examples
///
/// ```
/// use alterra_error::{AlterraResult, ConfigError};
///
/// fn might_fail() -> AlterraResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Alterra Error: {}", _0)]
pub struct AlterraError(Box<AlterraErrorKind>);

impl AlterraError {
    /// Create a new error from a kind.
    pub fn new(kind: AlterraErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AlterraErrorKind {
        &self.0
    }

    /// Incomplete setup carried by this error, if that is what it is.
    pub fn as_setup(&self) -> Option<&SetupError> {
        match self.kind() {
            AlterraErrorKind::Setup(err) => Some(err),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to AlterraErrorKind
impl<T> From<T> for AlterraError
where
    T: Into<AlterraErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Alterra operations.
pub type AlterraResult<T> = std::result::Result<T, AlterraError>;
