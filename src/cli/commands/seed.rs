use crate::config::Config;
use crate::errors::AppResult;
use crate::planner::Planner;
use crate::ui::messages::{info, success};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut planner = Planner::open(cfg)?;

    match planner.seed_demo()? {
        0 => info("Planner already has allocations; nothing seeded."),
        n => success(format!("Seeded {} demo allocation(s).", n)),
    }
    Ok(())
}
