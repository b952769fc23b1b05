use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::blobs::{list_blobs, load_blob};
use crate::db::migrate::{applied_versions, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::models::allocation::Allocation;
use crate::models::project::Project;
use crate::models::time_log::TimeLog;
use crate::store::{Collection, snapshot};
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

/// Decode one stored collection; returns the item count or the decode error.
fn check_collection(pool: &DbPool, c: Collection) -> AppResult<Option<usize>> {
    let Some(payload) = load_blob(&pool.conn, c.name())? else {
        return Ok(None);
    };
    let count = match c {
        Collection::Allocations => snapshot::decode::<Allocation>(c.name(), &payload)?.len(),
        Collection::Logs => snapshot::decode::<TimeLog>(c.name(), &payload)?.len(),
        Collection::Projects => snapshot::decode::<Project>(c.name(), &payload)?.len(),
    };
    Ok(Some(count))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    else {
        return Ok(());
    };

    // migrations are explicit here, so open without running them
    let mut pool = DbPool::open_raw(&cfg.database)?;

    if *migrate {
        println!("{}▶ Running migrations…{}", CYAN, RESET);
        let applied = run_pending_migrations(&pool.conn)?;
        println!(
            "{}✔ {} migration(s) applied, schema at {}.{}\n",
            GREEN,
            applied,
            applied_versions(&pool.conn)?
                .last()
                .map(String::as_str)
                .unwrap_or("-"),
            RESET
        );
    }

    if *info {
        run_pending_migrations(&pool.conn)?;
        stats::print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        println!("{}▶ Running integrity check…{}", CYAN, RESET);

        let integrity: String = pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

        if integrity == "ok" {
            println!("{}✔ Integrity check passed.{}", GREEN, RESET);
        } else {
            println!("{}✘ Integrity check failed:{} {}", RED, RESET, integrity);
        }

        // stored collections must decode with this build
        let stored = list_blobs(&pool.conn).unwrap_or_default();
        for c in Collection::ALL {
            if !stored.iter().any(|b| b.name == c.name()) {
                continue;
            }
            match check_collection(&pool, c) {
                Ok(Some(n)) => println!("{}✔ {}: {} item(s){}", GREEN, c.name(), n, RESET),
                Ok(None) => {}
                Err(e) => println!("{}✘ {}:{} {}", RED, c.name(), RESET, e),
            }
        }
        println!();
    }

    if *vacuum {
        println!("{}▶ Running VACUUM…{}", CYAN, RESET);
        pool.conn.execute_batch("VACUUM;")?;
        println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
    }

    Ok(())
}
