use notepad_core::store::schema::supported_version;
use notepad_core::{
    open_store, open_store_in_memory, KvStore, NoteMode, NotepadService, SqliteKvStore,
    StoreError,
};
use rusqlite::Connection;

#[test]
fn set_get_remove_roundtrip() {
    let conn = open_store_in_memory().unwrap();
    let mut store = SqliteKvStore::try_new(&conn).unwrap();

    assert_eq!(store.get("missing").unwrap(), None);
    store.set("k", "v1").unwrap();
    store.set("k", "v2").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    assert_eq!(store.keys().unwrap(), vec!["k".to_string()]);

    store.remove("k").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn upsert_keeps_one_row_and_stamps_updated_at() {
    let conn = open_store_in_memory().unwrap();
    let mut store = SqliteKvStore::try_new(&conn).unwrap();

    store.set("Default", "[]").unwrap();
    let first = store.updated_at("Default").unwrap().unwrap();
    assert!(first > 0);
    store.set("Default", "[1]").unwrap();

    let (rows, value): (i64, String) = conn
        .query_row(
            "SELECT COUNT(*), MAX(value) FROM kv_entries WHERE key = 'Default';",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(rows, 1);
    assert_eq!(value, "[1]");
    assert!(store.updated_at("Default").unwrap().unwrap() >= first);
    assert_eq!(store.updated_at("missing").unwrap(), None);
}

#[test]
fn raw_insert_gets_default_updated_at() {
    let conn = open_store_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv_entries(key, value) VALUES ('notepads', '[\"Default\"]');",
        [],
    )
    .unwrap();

    let store = SqliteKvStore::try_new(&conn).unwrap();
    assert!(store.updated_at("notepads").unwrap().unwrap() > 0);
}

#[test]
fn try_new_rejects_unupgraded_connection() {
    let conn = Connection::open_in_memory().unwrap();
    let err = SqliteKvStore::try_new(&conn).err().unwrap();
    assert!(matches!(err, StoreError::SchemaVersion { found: 0, .. }));
}

#[test]
fn reopening_a_file_keeps_schema_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notepad.sqlite3");

    {
        let conn = open_store(&path).unwrap();
        SqliteKvStore::try_new(&conn)
            .unwrap()
            .set("Default", "[]")
            .unwrap();
    }

    let conn = open_store(&path).unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, supported_version());
    let store = SqliteKvStore::try_new(&conn).unwrap();
    assert_eq!(store.keys().unwrap(), vec!["Default".to_string()]);
}

#[test]
fn newer_file_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");
    Connection::open(&path)
        .unwrap()
        .execute_batch("PRAGMA user_version = 999;")
        .unwrap();

    match open_store(&path).unwrap_err() {
        StoreError::SchemaVersion { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, supported_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn service_state_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notepad.sqlite3");

    {
        let conn = open_store(&path).unwrap();
        let store = SqliteKvStore::try_new(&conn).unwrap();
        let mut service = NotepadService::load(store).unwrap();
        service.create_notepad("Work").unwrap();
        service.select_notepad("Work").unwrap();
        service.append(NoteMode::Math, "|x| <= 1").unwrap();
    }

    let conn = open_store(&path).unwrap();
    let store = SqliteKvStore::try_new(&conn).unwrap();
    let mut service = NotepadService::load(store).unwrap();
    assert_eq!(
        service.list_notepads(),
        &["Default".to_string(), "Work".to_string()]
    );
    assert!(service.notes().is_empty());

    service.select_notepad("Work").unwrap();
    assert_eq!(service.notes().len(), 1);
    assert_eq!(service.notes()[0].content, "|x| <= 1");
}

#[test]
fn clear_all_deletes_row() {
    let conn = open_store_in_memory().unwrap();
    {
        let store = SqliteKvStore::try_new(&conn).unwrap();
        let mut service = NotepadService::load(store).unwrap();
        service.append(NoteMode::Text, "a").unwrap();
        service.clear_all().unwrap();
    }

    let rows: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM kv_entries WHERE key = 'Default';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(rows, 0);
}
