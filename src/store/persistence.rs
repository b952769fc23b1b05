//! Storage backends for the planner state.
//!
//! State is kept as one opaque named blob per collection, plus an append-only
//! audit trail of the operations that changed it.

use crate::db::blobs;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use std::collections::HashMap;

pub trait Persistence {
    fn load(&mut self, name: &str) -> AppResult<Option<String>>;

    fn save(&mut self, name: &str, payload: &str) -> AppResult<()>;

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()>;
}

/// SQLite-backed storage (`blobs` + `log` tables).
pub struct SqliteBackend {
    pool: DbPool,
}

impl SqliteBackend {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }
}

impl Persistence for SqliteBackend {
    fn load(&mut self, name: &str) -> AppResult<Option<String>> {
        blobs::load_blob(&self.pool.conn, name)
    }

    fn save(&mut self, name: &str, payload: &str) -> AppResult<()> {
        blobs::save_blob(&self.pool.conn, name, payload)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.pool.conn, operation, target, message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// In-process storage, used by tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    blobs: HashMap<String, String>,
    audit: Vec<AuditEntry>,
    saves: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a named blob, e.g. to load a fixture.
    pub fn with_blob(mut self, name: &str, payload: &str) -> Self {
        self.blobs.insert(name.to_string(), payload.to_string());
        self
    }

    pub fn blob(&self, name: &str) -> Option<&str> {
        self.blobs.get(name).map(String::as_str)
    }

    pub fn audit_entries(&self) -> &[AuditEntry] {
        &self.audit
    }

    /// Total number of blob writes performed.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl Persistence for MemoryBackend {
    fn load(&mut self, name: &str) -> AppResult<Option<String>> {
        Ok(self.blobs.get(name).cloned())
    }

    fn save(&mut self, name: &str, payload: &str) -> AppResult<()> {
        self.saves += 1;
        self.blobs.insert(name.to_string(), payload.to_string());
        Ok(())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.audit.push(AuditEntry {
            date: Local::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}
