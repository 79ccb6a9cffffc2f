//! Bot settings file.

use alterra_error::{AlterraResult, ConfigError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings file read from the working directory when none is named.
pub const DEFAULT_SETTINGS_FILE: &str = "alterra.toml";

/// Settings for the bot process.
///
/// Every field is optional in the file.
///
/// ```toml
/// store_path = "/var/lib/alterra/config.json"
/// json_logs = true
/// log_level = "info,alterra_verify=debug"
/// register_commands = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default, deny_unknown_fields)]
pub struct AlterraSettings {
    /// Path of the guild configuration store
    store_path: PathBuf,
    /// Emit JSON log lines
    json_logs: bool,
    /// Log filter used when `RUST_LOG` is unset
    log_level: String,
    /// Overwrite the global slash commands on connect
    register_commands: bool,
}

impl Default for AlterraSettings {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("config.json"),
            json_logs: false,
            log_level: "info".to_string(),
            register_commands: true,
        }
    }
}

impl AlterraSettings {
    /// Load settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> AlterraResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read settings file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::parse(&content)
    }

    /// Parse settings from TOML text.
    pub fn parse(content: &str) -> AlterraResult<Self> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)).into())
    }

    /// Load `path` if given, else [`DEFAULT_SETTINGS_FILE`] if present, else
    /// the defaults.
    ///
    /// A named file that does not exist is an error.
    pub fn discover(path: Option<&Path>) -> AlterraResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_SETTINGS_FILE).exists() => {
                Self::from_file(DEFAULT_SETTINGS_FILE)
            }
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replace the store path.
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    /// Force JSON log output on.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = self.json_logs || enabled;
        self
    }

    /// Replace the log filter.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = AlterraSettings::parse("").unwrap();
        assert_eq!(settings, AlterraSettings::default());
        assert_eq!(settings.store_path(), Path::new("config.json"));
        assert!(*settings.register_commands());
    }

    #[test]
    fn test_json_logs_flag_only_enables() {
        let settings = AlterraSettings::parse("json_logs = true")
            .unwrap()
            .with_json_logs(false);
        assert!(*settings.json_logs());
    }
}
