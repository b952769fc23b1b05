use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::resource::display_name;
use crate::planner::Planner;
use crate::ui::messages::{rejected, success};
use crate::utils::formatting::hours as fmt_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Demand { hours, project } = cmd else {
        return Ok(());
    };

    let mut planner = Planner::open(cfg)?;

    match planner.create_demand(project, *hours) {
        Ok(placed) => {
            success(format!(
                "Allocated {} ({}) on {} day {} (span {} day(s)), allocation #{}.",
                project,
                fmt_hours(*hours),
                display_name(planner.resources(), &placed.slot.resource_id),
                placed.slot.day,
                placed.span_days,
                placed.id
            ));
            Ok(())
        }
        Err(AppError::NoCapacityAvailable { .. }) => {
            rejected(format!(
                "No capacity available for {} in the next {} days.",
                fmt_hours(*hours),
                planner.visible_days()
            ));
            Ok(())
        }
        Err(e) => Err(e),
    }
}
