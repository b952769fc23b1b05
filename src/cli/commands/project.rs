use crate::cli::parser::{Commands, ProjectAction};
use crate::config::Config;
use crate::errors::AppResult;
use crate::planner::Planner;
use crate::ui::messages::{stale, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Project { action } = cmd else {
        return Ok(());
    };

    let mut planner = Planner::open(cfg)?;

    match action {
        ProjectAction::Add { name, code } => {
            let id = planner.add_project(name, code.as_deref())?;
            success(format!("Project '{}' added as {}.", name, id));
        }
        ProjectAction::List => {
            let projects = planner.store().projects();
            if projects.is_empty() {
                println!("No projects.");
                return Ok(());
            }
            let mut table = Table::new(vec![
                Column::new("ID", 8),
                Column::new("CODE", 10),
                Column::new("NAME", 30),
                Column::new("STATUS", 8),
            ]);
            for p in projects {
                table.add_row(vec![
                    p.id.clone(),
                    p.code.clone().unwrap_or_else(|| "--".into()),
                    p.name.clone(),
                    if p.is_active() { "active" } else { "closed" }.into(),
                ]);
            }
            print!("{}", table.render());
        }
        ProjectAction::Close { id } => {
            if planner.close_project(id)? {
                success(format!("Project {} closed.", id));
            } else {
                stale("Project", id);
            }
        }
    }

    Ok(())
}
