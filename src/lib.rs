//! rPlanner library root.
//! Exposes the allocation store, the planning engines and the CLI dispatcher.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod planner;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Audit { .. } => cli::commands::audit::handle(&cli.command, cfg),
        Commands::Resources => cli::commands::resources::handle(cfg),
        Commands::Project { .. } => cli::commands::project::handle(&cli.command, cfg),
        Commands::Alloc { .. } => cli::commands::alloc::handle(&cli.command, cfg),
        Commands::Demand { .. } => cli::commands::demand::handle(&cli.command, cfg),
        Commands::Plan => cli::commands::plan::handle(cfg),
        Commands::Seed => cli::commands::seed::handle(cfg),
        Commands::Sync => cli::commands::sync::handle(cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once, then apply command-line overrides
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    if let Some(today) = &cli.today {
        cfg.today = Some(
            utils::date::parse_date(today).ok_or_else(|| AppError::InvalidDate(today.clone()))?,
        );
    }

    dispatch(&cli, &cfg)
}
