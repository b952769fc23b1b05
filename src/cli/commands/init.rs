use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing rPlanner…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let pool = DbPool::open(&db_path)?;

    println!("✅ Database initialized at {}", &db_path);

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write audit log: {}", e);
    }

    println!("🎉 rPlanner initialization completed!");
    Ok(())
}
