use crate::errors::ServerError;
use crate::storage::connection::Database;
use rusqlite::{params, OptionalExtension};

/// Read one preference value. `None` when the key has never been written.
pub fn get(db: &Database, key: &str) -> Result<Option<String>, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(
            "SELECT value FROM prefs WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| ServerError::DbError(e.to_string()))
    })
}

/// Write one preference value, replacing any previous one.
pub fn set(db: &Database, key: &str, value: &str) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        conn.execute(
            r#"
            INSERT INTO prefs (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
            params![key, value],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })
}
