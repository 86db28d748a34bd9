//! Stored value model
//!
//! A named record in the key-value table.

use rusqlite::{params, Connection, Row};

use crate::db::DbResult;

#[derive(Debug, Clone)]
pub struct StoredValue {
    pub key: String,
    pub value: String,
    pub updated_at: String,
}

impl StoredValue {
    /// Create from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            key: row.get("key")?,
            value: row.get("value")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// Get a record by key
    pub fn get(conn: &Connection, key: &str) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM kv_store WHERE key = ?1")?;

        let result = stmt.query_row([key], Self::from_row);
        match result {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set or replace a record (upsert)
    pub fn set(conn: &Connection, key: &str, value: &str) -> DbResult<()> {
        conn.execute(
            r#"
            INSERT INTO kv_store (key, value)
            VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = datetime('now')
            "#,
            params![key, value],
        )?;
        Ok(())
    }

    /// Remove a record. Returns whether one existed.
    pub fn delete(conn: &Connection, key: &str) -> DbResult<bool> {
        let rows = conn.execute("DELETE FROM kv_store WHERE key = ?1", [key])?;
        Ok(rows > 0)
    }
}
