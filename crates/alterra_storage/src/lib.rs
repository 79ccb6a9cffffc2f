//! Per-guild configuration store.
//!
//! Holds the verification settings of every guild the bot serves and keeps
//! them in a single JSON document on disk. The document is rewritten in full
//! on every mutation, atomically from the reader's point of view.
//!
//! # File Format
//!
//! ```json
//! {
//!     "123456789012345678": {
//!         "verify_channel": 234567890123456789,
//!         "verify_role": 345678901234567890
//!     }
//! }
//! ```
//!
//! Fields this crate does not know about are carried through rewrites.
//!
//! # Example
//!
//! ```no_run
//! use alterra_storage::{ConfigStore, Snowflake};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = ConfigStore::load("config.json")?;
//! store.upsert(Snowflake::new(1), |config| {
//!     config.set_verify_channel(Snowflake::new(2));
//! })?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod guild;
mod snowflake;
mod store;

pub use guild::GuildConfig;
pub use snowflake::Snowflake;
pub use store::ConfigStore;
