//! Alterra CLI binary.
//!
//! - Run the verification bot
//! - Show or reset guild records in the configuration store

use alterra::{AlterraSettings, ObservabilityConfig, init_observability};
use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_store_command, run_bot};

    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut settings = AlterraSettings::discover(cli.config.as_deref())?;
    if let Some(store) = cli.store {
        settings = settings.with_store_path(store);
    }
    if cli.verbose {
        settings = settings.with_log_level("debug");
    }
    if let Commands::Run { json_logs } = cli.command {
        settings = settings.with_json_logs(json_logs);
    }

    init_observability(
        &ObservabilityConfig::new(settings.log_level()).with_json_logs(*settings.json_logs()),
    )?;

    // Execute the requested command
    match cli.command {
        Commands::Run { .. } => {
            run_bot(&settings).await?;
        }

        Commands::Store(store_cmd) => {
            handle_store_command(store_cmd, &settings)?;
        }
    }

    Ok(())
}
