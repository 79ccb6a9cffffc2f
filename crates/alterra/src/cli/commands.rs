//! CLI command definitions.

use alterra_storage::Snowflake;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Alterra - Discord guild verification bot
#[derive(Parser, Debug)]
#[command(name = "alterra")]
#[command(about = "Discord guild verification bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (defaults to ./alterra.toml when present)
    #[arg(short, long, global = true, env = "ALTERRA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Guild configuration store, overriding the settings file
    #[arg(long, global = true, env = "ALTERRA_STORE")]
    pub store: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Connect to Discord and serve the verification commands
    Run {
        /// Emit JSON log lines
        #[arg(long)]
        json_logs: bool,
    },

    /// Inspect or edit the guild configuration store
    #[command(subcommand)]
    Store(StoreCommands),
}

/// Store maintenance subcommands
#[derive(Subcommand, Debug)]
pub enum StoreCommands {
    /// List every guild record and its setup state
    Show,

    /// Delete the record of one guild
    Reset {
        /// Guild id
        guild_id: Snowflake,
    },
}
