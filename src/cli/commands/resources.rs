use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};

pub fn handle(cfg: &Config) -> AppResult<()> {
    if cfg.resources.is_empty() {
        println!("No resources configured. Add them under `resources:` in the config file.");
        return Ok(());
    }

    let mut table = Table::new(vec![Column::new("#", 4), Column::new("ID", 8), Column::new("NAME", 28)]);
    for (i, r) in cfg.resources.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), r.id.clone(), r.name.clone()]);
    }
    print!("{}", table.render());
    Ok(())
}
