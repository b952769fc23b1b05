use crate::cli::parser::{AllocAction, Commands, Target};
use crate::config::Config;
use crate::core::HOURS_PER_DAY;
use crate::core::gesture::{GestureEvent, GestureOutcome, GridGeometry};
use crate::errors::{AppError, AppResult};
use crate::models::resource::display_name;
use crate::planner::Planner;
use crate::store::persistence::Persistence;
use crate::ui::messages::{stale, success, warning};
use crate::utils::formatting::hours as fmt_hours;
use crate::utils::table::{Column, Table};

fn target_x(target: &Target, grid: &GridGeometry) -> f64 {
    match (target.day, target.x) {
        (Some(day), _) => grid.x_for_day(day),
        (None, Some(x)) => x,
        (None, None) => 0.0,
    }
}

/// Warn when the start cell of an allocation went over capacity.
fn warn_if_overbooked<P: Persistence>(planner: &Planner<P>, resource_id: &str, day: u32) {
    let used = planner.store().capacity().hours_used(resource_id, day);
    if used > HOURS_PER_DAY {
        warning(format!(
            "{} is overbooked on day {}: {} of {}",
            display_name(planner.resources(), resource_id),
            day,
            fmt_hours(used),
            fmt_hours(HOURS_PER_DAY)
        ));
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Alloc { action } = cmd else {
        return Ok(());
    };

    let mut planner = Planner::open(cfg)?;

    match action {
        AllocAction::Add {
            project,
            resource,
            day,
            hours,
            span,
        } => {
            if hours.is_nan() || *hours < 0.0 {
                return Err(AppError::InvalidHours(hours.to_string()));
            }
            let id = planner.create_allocation(project, resource, *day, *hours, *span)?;
            success(format!(
                "Allocation #{} created: {} on {} day {} ({})",
                id,
                project,
                display_name(planner.resources(), resource),
                day,
                fmt_hours(*hours)
            ));
            warn_if_overbooked(&planner, resource, *day);
        }

        AllocAction::List => {
            let allocations = planner.store().allocations();
            if allocations.is_empty() {
                println!("No allocations.");
                return Ok(());
            }
            let mut table = Table::new(vec![
                Column::new("ID", 5),
                Column::new("PROJECT", 20),
                Column::new("RESOURCE", 22),
                Column::new("DAY", 4),
                Column::new("SPAN", 5),
                Column::new("HOURS", 6),
            ]);
            for a in allocations {
                table.add_row(vec![
                    a.id.to_string(),
                    a.project.clone(),
                    display_name(planner.resources(), &a.resource_id).to_string(),
                    a.day.to_string(),
                    a.span_days.to_string(),
                    fmt_hours(a.hours),
                ]);
            }
            print!("{}", table.render());
        }

        AllocAction::Move {
            id,
            resource,
            target,
        } => {
            planner.resource(resource)?;
            if planner.store().allocation(*id).is_none() {
                stale("Allocation", id);
                return Ok(());
            }

            let x = target_x(target, planner.grid());
            planner.gesture(GestureEvent::DragStart(*id))?;
            let outcome = planner.gesture(GestureEvent::Drop {
                resource_id: resource.clone(),
                x,
            })?;

            match outcome {
                GestureOutcome::Moved { id, day } => {
                    success(format!(
                        "Allocation #{} moved to {} day {}.",
                        id,
                        display_name(planner.resources(), resource),
                        day
                    ));
                    warn_if_overbooked(&planner, resource, day);
                }
                _ => stale("Allocation", id),
            }
        }

        AllocAction::Resize { id, target } => {
            if planner.store().allocation(*id).is_none() {
                stale("Allocation", id);
                return Ok(());
            }

            let x = target_x(target, planner.grid());
            planner.gesture(GestureEvent::ResizeStart(*id))?;
            let outcome = planner.gesture(GestureEvent::PointerMove { x })?;
            planner.gesture(GestureEvent::Release)?;

            match outcome {
                GestureOutcome::Resized {
                    id,
                    span_days,
                    hours,
                } => success(format!(
                    "Allocation #{} now spans {} day(s), {}.",
                    id,
                    span_days,
                    fmt_hours(hours)
                )),
                _ => stale("Allocation", id),
            }
        }

        AllocAction::Del { id } => {
            if planner.delete_allocation(*id)? {
                success(format!("Allocation #{} deleted.", id));
            } else {
                stale("Allocation", id);
            }
        }
    }

    Ok(())
}
