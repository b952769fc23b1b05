use crate::cli::parser::{Commands, LogAction};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::demand_type::DemandType;
use crate::models::phase::ProjectPhase;
use crate::models::time_log::{NewTimeLog, TimeLogPatch};
use crate::planner::Planner;
use crate::ui::messages::{rejected, stale, success};
use crate::utils::date;
use crate::utils::formatting::hours as fmt_hours;
use crate::utils::table::{Column, Table};

fn parse_hours(h: f64) -> AppResult<f64> {
    if h.is_finite() && h > 0.0 {
        Ok(h)
    } else {
        Err(AppError::InvalidHours(format!(
            "hours must be a number greater than 0 (got {})",
            h
        )))
    }
}

fn parse_phase(s: &str) -> AppResult<ProjectPhase> {
    ProjectPhase::from_input(s).ok_or_else(|| AppError::InvalidPhase(s.to_string()))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Log { action } = cmd else {
        return Ok(());
    };

    let mut planner = Planner::open(cfg)?;

    match action {
        LogAction::Add {
            collaborator,
            date: date_str,
            project,
            activity,
            hours,
            phase,
            demand,
            observation,
            project_name,
        } => {
            let who = planner.resource(collaborator)?.clone();
            let d = date::parse_date(date_str)
                .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;
            let demand_type = DemandType::from_code(demand)
                .ok_or_else(|| AppError::InvalidDemandType(demand.to_string()))?;

            let fields = NewTimeLog {
                collaborator_id: who.id,
                collaborator_name: who.name,
                date: d,
                demand_type,
                project_id: project.clone(),
                project_name: project_name.clone().unwrap_or_else(|| project.clone()),
                phase: parse_phase(phase)?,
                activity_type: activity.clone(),
                hours: parse_hours(*hours)?,
                observation: observation.clone(),
            };

            match planner.create_log(fields) {
                Ok(id) => success(format!(
                    "Time log #{} added: {} on {} for {}.",
                    id,
                    fmt_hours(*hours),
                    d,
                    project
                )),
                // rejected writes are user-facing, not failures
                Err(AppError::Validation(v)) => rejected(v),
                Err(e) => return Err(e),
            }
        }

        LogAction::List {
            collaborator,
            date: date_filter,
        } => {
            let day = match date_filter {
                Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
                None => None,
            };

            let mut table = Table::new(vec![
                Column::new("ID", 5),
                Column::new("DATE", 10),
                Column::new("COLLABORATOR", 20),
                Column::new("PROJECT", 16),
                Column::new("DEMAND", 12),
                Column::new("PHASE", 13),
                Column::new("ACTIVITY", 14),
                Column::new("HOURS", 6),
            ]);

            let mut total = 0.0;
            for l in planner.store().logs() {
                if collaborator.as_ref().is_some_and(|c| *c != l.collaborator_id) {
                    continue;
                }
                if day.is_some_and(|d| d != l.date) {
                    continue;
                }
                total += l.hours;
                table.add_row(vec![
                    l.id.to_string(),
                    l.date_str(),
                    l.collaborator_name.clone(),
                    l.project_name.clone(),
                    l.demand_type.label().to_string(),
                    l.phase.label().to_string(),
                    l.activity_type.clone(),
                    format!("{:.2}", l.hours),
                ]);
            }

            if table.rows.is_empty() {
                println!("No time logs.");
                return Ok(());
            }
            print!("{}", table.render());
            println!("Total: {:.2}h in {} log(s)", total, table.rows.len());
        }

        LogAction::Edit {
            id,
            hours,
            activity,
            phase,
            observation,
        } => {
            let patch = TimeLogPatch {
                hours: hours.map(parse_hours).transpose()?,
                activity_type: activity.clone(),
                phase: phase.as_deref().map(parse_phase).transpose()?,
                observation: observation.clone(),
                ..Default::default()
            };

            if planner.update_log(*id, &patch)? {
                success(format!("Time log #{} updated.", id));
            } else {
                stale("Time log", id);
            }
        }

        LogAction::Del { id } => {
            if planner.delete_log(*id)? {
                success(format!("Time log #{} deleted.", id));
            } else {
                stale("Time log", id);
            }
        }
    }

    Ok(())
}
