//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the alterra binary.

mod commands;
mod run;
mod store;

pub use commands::{Cli, Commands, StoreCommands};
pub use run::run_bot;
pub use store::handle_store_command;
