//! JSON file-backed configuration store.

use crate::{GuildConfig, Snowflake};
use alterra_error::{AlterraResult, StorageError, StorageErrorKind};
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

type GuildMap = BTreeMap<String, GuildConfig>;

/// Mapping from guild id to [`GuildConfig`], mirrored to a JSON file.
///
/// The in-memory map always equals the last successfully written file:
/// mutations are applied to a copy, the copy is written, and only then does
/// it replace the map. The lock is held for the whole read-modify-write, and
/// that section never awaits, so concurrent commands cannot interleave
/// partial writes.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    guilds: Mutex<GuildMap>,
}

impl ConfigStore {
    /// Load the store from `path`, creating an empty one if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read, holds anything
    /// other than a guild mapping, or the empty store cannot be written. A
    /// malformed file is left untouched.
    #[instrument(skip(path))]
    pub fn load(path: impl Into<PathBuf>) -> AlterraResult<Self> {
        let path = path.into();
        debug!(path = %path.display(), "Loading configuration store");

        let guilds = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str::<GuildMap>(&contents).map_err(|e| {
                StorageError::new(StorageErrorKind::Malformed(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "No configuration store found, initializing");
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                            "{}: {}",
                            parent.display(),
                            e
                        )))
                    })?;
                }
                let empty = GuildMap::new();
                write_atomic(&path, &empty)?;
                empty
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
                .into());
            }
        };

        info!(path = %path.display(), guilds = guilds.len(), "Configuration store loaded");
        Ok(Self {
            path,
            guilds: Mutex::new(guilds),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record for `guild_id`, if one exists.
    pub fn get(&self, guild_id: Snowflake) -> Option<GuildConfig> {
        self.guilds.lock().get(&guild_id.to_string()).cloned()
    }

    /// Read-or-create the record for `guild_id`, apply `mutate`, and write the
    /// whole store back.
    ///
    /// Returns the record as written.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be written; the in-memory
    /// store is then left as it was.
    #[instrument(skip(self, mutate))]
    pub fn upsert<F>(&self, guild_id: Snowflake, mutate: F) -> AlterraResult<GuildConfig>
    where
        F: FnOnce(&mut GuildConfig),
    {
        let mut guilds = self.guilds.lock();

        let mut next = guilds.clone();
        let record = next.entry(guild_id.to_string()).or_default();
        mutate(record);
        let updated = record.clone();

        write_atomic(&self.path, &next)?;
        *guilds = next;

        debug!(?updated, "Guild configuration updated");
        Ok(updated)
    }

    /// Drop the record for `guild_id` and write the store back.
    ///
    /// Returns the removed record, or `None` (without writing) if there was none.
    #[instrument(skip(self))]
    pub fn remove(&self, guild_id: Snowflake) -> AlterraResult<Option<GuildConfig>> {
        let mut guilds = self.guilds.lock();
        let key = guild_id.to_string();
        if !guilds.contains_key(&key) {
            return Ok(None);
        }

        let mut next = guilds.clone();
        let removed = next.remove(&key);
        write_atomic(&self.path, &next)?;
        *guilds = next;

        info!("Guild configuration removed");
        Ok(removed)
    }

    /// Overwrite the backing file with the current contents.
    #[instrument(skip(self))]
    pub fn save(&self) -> AlterraResult<()> {
        let guilds = self.guilds.lock();
        write_atomic(&self.path, &guilds)
    }

    /// Snapshot of every record, ordered by guild id key.
    pub fn guilds(&self) -> Vec<(String, GuildConfig)> {
        self.guilds
            .lock()
            .iter()
            .map(|(id, config)| (id.clone(), config.clone()))
            .collect()
    }

    /// Number of guilds with a record.
    pub fn len(&self) -> usize {
        self.guilds.lock().len()
    }

    /// Whether no guild has a record.
    pub fn is_empty(&self) -> bool {
        self.guilds.lock().is_empty()
    }
}

/// Serialize with four-space indentation, write beside `path`, then rename over it.
fn write_atomic(path: &Path, guilds: &GuildMap) -> AlterraResult<()> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    guilds
        .serialize(&mut serializer)
        .map_err(|e| StorageError::new(StorageErrorKind::Serialize(e.to_string())))?;

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);
    std::fs::write(&temp_path, &buf).map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            temp_path.display(),
            e
        )))
    })?;

    if let Err(e) = std::fs::rename(&temp_path, path) {
        if std::fs::remove_file(&temp_path).is_err() {
            warn!(path = %temp_path.display(), "Failed to clean up temporary store file");
        }
        return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
            "rename {} to {}: {}",
            temp_path.display(),
            path.display(),
            e
        )))
        .into());
    }

    debug!(path = %path.display(), bytes = buf.len(), "Configuration store written");
    Ok(())
}
