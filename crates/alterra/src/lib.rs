//! Process bootstrap for the Alterra verification bot.
//!
//! Settings, credentials and log output. The bot itself lives in
//! `alterra_verify`, the store in `alterra_storage`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod credentials;
mod observability;
mod settings;

pub use credentials::{TOKEN_VARS, discord_token, token_from};
pub use observability::{ObservabilityConfig, init_observability};
pub use settings::{AlterraSettings, DEFAULT_SETTINGS_FILE};
