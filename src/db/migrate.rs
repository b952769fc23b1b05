use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

type Migration = (&'static str, &'static str, fn(&Connection) -> Result<()>);

/// Ordered list of schema migrations: (version, description, step).
const MIGRATIONS: &[Migration] = &[
    (
        "20250910_0001_create_blobs",
        "Created blobs table for planner collections",
        create_blobs_table,
    ),
    (
        "20251002_0002_blobs_updated_index",
        "Indexed blobs by update time",
        index_blobs_updated_at,
    ),
];

/// Ensure that the `log` table exists. It doubles as the audit trail and as
/// the registry of applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_blobs_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS blobs (
            name       TEXT PRIMARY KEY,
            payload    TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn index_blobs_updated_at(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_blobs_updated ON blobs(updated_at);")?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Versions already recorded in the `log` table.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Public entry point: run all pending migrations. Returns how many were applied.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for (version, description, step) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        step(conn).map_err(|e| AppError::Migration(format!("{}: {}", version, e)))?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [version, description],
        )?;

        success(format!("Migration applied: {} → {}", version, description));
        applied += 1;
    }

    Ok(applied)
}
