//! Versioning of the `kv_entries` table.
//!
//! The table layout is tracked through `PRAGMA user_version`. Each step runs
//! once, in order, inside a single transaction; a file written by a newer
//! binary is refused rather than downgraded.

use super::{StoreError, StoreResult};
use log::info;
use rusqlite::Connection;

/// `(version, sql)` pairs in strictly increasing version order.
const STEPS: &[(u32, &str)] = &[(1, include_str!("sql/0001_kv_entries.sql"))];

/// Version a fully upgraded connection reports.
pub fn supported_version() -> u32 {
    STEPS.last().map_or(0, |(version, _)| *version)
}

pub fn stored_version(conn: &Connection) -> StoreResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?)
}

/// Runs pending steps; a no-op on an up-to-date connection.
///
/// # Errors
/// - `SchemaVersion` when the file is newer than [`supported_version`].
pub fn upgrade(conn: &mut Connection) -> StoreResult<()> {
    let found = stored_version(conn)?;
    let supported = supported_version();
    if found > supported {
        return Err(StoreError::SchemaVersion { found, supported });
    }
    if found == supported {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, sql) in STEPS.iter().filter(|(version, _)| *version > found) {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
    }
    tx.commit()?;

    info!(
        "event=store_upgrade module=store status=ok from_version={} to_version={}",
        found, supported
    );
    Ok(())
}

/// Fails unless the connection is exactly at [`supported_version`].
pub fn ensure_current(conn: &Connection) -> StoreResult<()> {
    let found = stored_version(conn)?;
    let supported = supported_version();
    if found != supported {
        return Err(StoreError::SchemaVersion { found, supported });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ensure_current, stored_version, supported_version, upgrade};
    use crate::store::StoreError;
    use rusqlite::Connection;

    #[test]
    fn upgrade_brings_fresh_connection_to_supported_version() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert!(matches!(
            ensure_current(&conn),
            Err(StoreError::SchemaVersion { found: 0, .. })
        ));

        upgrade(&mut conn).unwrap();
        upgrade(&mut conn).unwrap();
        assert_eq!(stored_version(&conn).unwrap(), supported_version());
        ensure_current(&conn).unwrap();
    }

    #[test]
    fn upgrade_refuses_newer_file() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.pragma_update(None, "user_version", 999).unwrap();

        let err = upgrade(&mut conn).unwrap_err();
        assert!(err.to_string().contains("newer than supported"));
        assert_eq!(stored_version(&conn).unwrap(), 999);
    }
}
