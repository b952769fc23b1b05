use crate::config::Config;
use crate::errors::AppResult;
use crate::planner::Planner;
use crate::ui::messages::{info, success, warning};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut planner = Planner::open(cfg)?;
    let report = planner.sync_allocations_to_logs()?;

    success(format!("{} time log(s) created", report.created));

    if report.already_projected > 0 {
        info(format!(
            "{} allocation(s) already projected",
            report.already_projected
        ));
    }
    for (id, reason) in &report.rejected {
        warning(format!("Allocation #{} skipped: {}", id, reason));
    }
    for id in &report.unprojectable {
        warning(format!("Allocation #{} skipped: its day has no calendar date", id));
    }
    Ok(())
}
