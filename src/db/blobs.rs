//! Named-blob storage: one row per persisted collection.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

#[derive(Debug, Clone)]
pub struct BlobInfo {
    pub name: String,
    pub bytes: i64,
    pub updated_at: String,
}

pub fn load_blob(conn: &Connection, name: &str) -> AppResult<Option<String>> {
    let payload = conn
        .query_row(
            "SELECT payload FROM blobs WHERE name = ?1",
            [name],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(payload)
}

pub fn save_blob(conn: &Connection, name: &str, payload: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO blobs (name, payload, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(name) DO UPDATE SET payload = excluded.payload, updated_at = excluded.updated_at",
        params![name, payload, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn list_blobs(conn: &Connection) -> AppResult<Vec<BlobInfo>> {
    let mut stmt =
        conn.prepare("SELECT name, LENGTH(payload), updated_at FROM blobs ORDER BY name ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(BlobInfo {
            name: row.get(0)?,
            bytes: row.get(1)?,
            updated_at: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
