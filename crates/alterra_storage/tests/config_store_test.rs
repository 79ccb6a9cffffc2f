//! Tests for the JSON file-backed configuration store.

use alterra_error::{AlterraErrorKind, StorageErrorKind};
use alterra_storage::{ConfigStore, GuildConfig, Snowflake};
use tempfile::TempDir;

const GUILD: Snowflake = Snowflake::new(1_100_000_000_000_000_001);
const CHANNEL: Snowflake = Snowflake::new(1_200_000_000_000_000_002);
const ROLE: Snowflake = Snowflake::new(1_300_000_000_000_000_003);

fn storage_kind(err: &alterra_error::AlterraError) -> Option<&StorageErrorKind> {
    match err.kind() {
        AlterraErrorKind::Storage(e) => Some(&e.kind),
        _ => None,
    }
}

#[test]
fn test_load_initializes_missing_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nested").join("config.json");

    let store = ConfigStore::load(&path).expect("load");

    assert!(store.is_empty());
    assert!(path.exists());
    let contents = std::fs::read_to_string(&path).expect("read");
    assert_eq!(contents, "{}");
}

#[test]
fn test_bind_channel_survives_reload_and_keeps_role() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.json");

    let store = ConfigStore::load(&path).expect("load");
    store
        .upsert(GUILD, |config| config.set_verify_role(ROLE))
        .expect("bind role");
    store
        .upsert(GUILD, |config| config.set_verify_channel(CHANNEL))
        .expect("bind channel");

    let reloaded = ConfigStore::load(&path).expect("reload");
    let config = reloaded.get(GUILD).expect("record exists");
    assert_eq!(*config.verify_channel(), Some(CHANNEL));
    assert_eq!(*config.verify_role(), Some(ROLE));
}

#[test]
fn test_bindings_are_idempotent_and_commutative() {
    let dir = TempDir::new().expect("temp dir");

    let first = ConfigStore::load(dir.path().join("a.json")).expect("load a");
    first.upsert(GUILD, |c| c.set_verify_channel(CHANNEL)).unwrap();
    first.upsert(GUILD, |c| c.set_verify_role(ROLE)).unwrap();

    let second = ConfigStore::load(dir.path().join("b.json")).expect("load b");
    second.upsert(GUILD, |c| c.set_verify_role(ROLE)).unwrap();
    second.upsert(GUILD, |c| c.set_verify_role(ROLE)).unwrap();
    second.upsert(GUILD, |c| c.set_verify_channel(CHANNEL)).unwrap();
    second.upsert(GUILD, |c| c.set_verify_channel(CHANNEL)).unwrap();

    assert_eq!(first.get(GUILD), second.get(GUILD));
    assert_eq!(
        first.get(GUILD),
        Some(GuildConfig::with_bindings(Some(CHANNEL), Some(ROLE)))
    );
}

#[test]
fn test_partial_record_is_valid() {
    let dir = TempDir::new().expect("temp dir");
    let store = ConfigStore::load(dir.path().join("config.json")).expect("load");

    let config = store
        .upsert(GUILD, |c| c.set_verify_role(ROLE))
        .expect("bind role");

    assert_eq!(config.verify_channel(), &None);
    assert_eq!(*config.verify_role(), Some(ROLE));
    assert_eq!(store.get(Snowflake::new(5)), None);
}

#[test]
fn test_round_trip_reproduces_mapping() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.json");
    let store = ConfigStore::load(&path).expect("load");

    for n in 1..=5u64 {
        store
            .upsert(Snowflake::new(n), |c| {
                c.set_verify_channel(Snowflake::new(n * 10));
                if n % 2 == 0 {
                    c.set_verify_role(Snowflake::new(n * 100));
                }
            })
            .expect("upsert");
    }
    store.save().expect("save");

    let reloaded = ConfigStore::load(&path).expect("reload");
    assert_eq!(store.guilds(), reloaded.guilds());
    assert_eq!(reloaded.len(), 5);
}

#[test]
fn test_file_layout_is_four_space_pretty_json() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.json");
    let store = ConfigStore::load(&path).expect("load");
    store
        .upsert(Snowflake::new(1), |c| c.set_verify_channel(Snowflake::new(2)))
        .unwrap();

    let contents = std::fs::read_to_string(&path).expect("read");
    assert_eq!(
        contents,
        "{\n    \"1\": {\n        \"verify_channel\": 2\n    }\n}"
    );
}

#[test]
fn test_unknown_fields_preserved_on_rewrite() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "1": { "verify_channel": 2, "welcome": { "enabled": true } } }"#,
    )
    .expect("seed");

    let store = ConfigStore::load(&path).expect("load");
    store
        .upsert(Snowflake::new(1), |c| c.set_verify_role(Snowflake::new(3)))
        .expect("bind role");

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["1"]["welcome"]["enabled"], true);
    assert_eq!(written["1"]["verify_channel"], 2);
    assert_eq!(written["1"]["verify_role"], 3);
}

#[test]
fn test_string_ids_load() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "1": { "verify_channel": "22", "verify_role": 33 } }"#)
        .expect("seed");

    let store = ConfigStore::load(&path).expect("load");
    let config = store.get(Snowflake::new(1)).expect("record");
    assert_eq!(*config.verify_channel(), Some(Snowflake::new(22)));
    assert_eq!(*config.verify_role(), Some(Snowflake::new(33)));
}

#[test]
fn test_malformed_file_fails_fast_and_is_untouched() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ \"1\": { \"verify_channel\": ").expect("seed");

    let err = ConfigStore::load(&path).expect_err("malformed file must not load");
    assert!(matches!(
        storage_kind(&err),
        Some(StorageErrorKind::Malformed(_))
    ));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "{ \"1\": { \"verify_channel\": "
    );
}

#[test]
fn test_failed_write_leaves_memory_unchanged() {
    let dir = TempDir::new().expect("temp dir");
    let store_dir = dir.path().join("store");
    let store = ConfigStore::load(store_dir.join("config.json")).expect("load");
    store.upsert(GUILD, |c| c.set_verify_role(ROLE)).unwrap();

    std::fs::remove_dir_all(&store_dir).expect("remove store dir");

    let err = store
        .upsert(GUILD, |c| c.set_verify_channel(CHANNEL))
        .expect_err("write must fail");
    assert!(matches!(
        storage_kind(&err),
        Some(StorageErrorKind::FileWrite(_))
    ));
    assert_eq!(
        store.get(GUILD),
        Some(GuildConfig::with_bindings(None, Some(ROLE)))
    );
}

#[test]
fn test_remove_record() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.json");
    let store = ConfigStore::load(&path).expect("load");
    store.upsert(GUILD, |c| c.set_verify_channel(CHANNEL)).unwrap();

    let removed = store.remove(GUILD).expect("remove");
    assert!(removed.is_some());
    assert!(store.remove(GUILD).expect("second remove").is_none());

    let reloaded = ConfigStore::load(&path).expect("reload");
    assert!(reloaded.is_empty());
}
