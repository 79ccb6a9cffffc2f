//! Error types for the Alterra verification bot.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Layer errors convert into [`AlterraError`] with `?`.
//!
//! # Examples
//!
//! ```
//! use alterra_error::{AlterraResult, StorageError, StorageErrorKind};
//!
//! fn read_store() -> AlterraResult<String> {
//!     Err(StorageError::new(StorageErrorKind::FileRead("config.json".to_string())))?
//! }
//!
//! assert!(read_store().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod discord;
mod error;
mod setup;
mod storage;

pub use config::ConfigError;
pub use discord::{DiscordError, DiscordErrorKind};
pub use error::{AlterraError, AlterraErrorKind, AlterraResult};
pub use setup::{SetupError, SetupErrorKind};
pub use storage::{StorageError, StorageErrorKind};
