//! Store maintenance commands.

use super::StoreCommands;
use alterra::AlterraSettings;
use alterra_error::AlterraResult;
use alterra_storage::ConfigStore;
use alterra_verify::VerificationState;

fn describe(value: Option<impl std::fmt::Display>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Run a store subcommand against the configured store.
pub fn handle_store_command(
    command: StoreCommands,
    settings: &AlterraSettings,
) -> AlterraResult<()> {
    let store = ConfigStore::load(settings.store_path())?;

    match command {
        StoreCommands::Show => {
            if store.is_empty() {
                println!("No guilds configured in {}", store.path().display());
                return Ok(());
            }

            println!("{:<22} {:<22} {:<22} STATE", "GUILD", "CHANNEL", "ROLE");
            for (guild, config) in store.guilds() {
                println!(
                    "{:<22} {:<22} {:<22} {}",
                    guild,
                    describe(*config.verify_channel()),
                    describe(*config.verify_role()),
                    VerificationState::of(Some(&config))
                );
            }
        }
        StoreCommands::Reset { guild_id } => match store.remove(guild_id)? {
            Some(_) => println!("Removed configuration for guild {}", guild_id),
            None => println!("No configuration for guild {}", guild_id),
        },
    }

    Ok(())
}
