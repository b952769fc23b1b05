//! SQLite connection wrapper (lightweight, one connection per CLI run).

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database file and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Open without running migrations (used by `db --migrate` and `db --check`).
    pub fn open_raw(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }
}
