//! Discord integration using the Serenity library.
//!
//! # Architecture
//!
//! - **client**: Serenity client setup and lifecycle management
//! - **handler**: event handler registering commands and routing interactions
//! - **commands**: slash command definitions and interaction conversion
//! - **platform**: [`VerificationPlatform`](crate::VerificationPlatform) over Serenity's HTTP client
//!
//! # Usage
//!
//! Available with the `discord` feature.
//!
//! ```rust,ignore
//! use alterra_storage::ConfigStore;
//! use alterra_verify::AlterraBot;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(ConfigStore::load("config.json")?);
//!     let mut bot = AlterraBot::new(&std::env::var("DISCORD_TOKEN")?, store, true).await?;
//!     bot.start().await?;
//!     Ok(())
//! }
//! ```

mod client;
mod commands;
mod handler;
mod platform;

pub use client::AlterraBot;
pub use commands::create_commands;
pub use handler::AlterraHandler;
pub use platform::SerenityPlatform;
