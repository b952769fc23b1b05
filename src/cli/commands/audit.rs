use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::visible_width;
use ansi_term::Colour;

const OP_WIDTH: usize = 48;

/// ANSI colour for an audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "alloc_add" | "demand" | "log_add" | "project_add" | "seed" => Colour::Green,
        "alloc_del" | "log_del" | "project_close" => Colour::Red,
        "alloc_edit" | "alloc_move" | "alloc_resize" | "log_edit" => Colour::Yellow,
        "sync" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if !matches!(cmd, Commands::Audit { print: true }) {
        return Ok(());
    }

    let pool = DbPool::open(&cfg.database)?;
    let rows = load_audit(&pool.conn)?;

    if rows.is_empty() {
        println!("📜 Audit log is empty.");
        return Ok(());
    }

    let id_w = rows
        .iter()
        .map(|r| r.id.to_string().len())
        .max()
        .unwrap_or(1);
    let date_w = rows.iter().map(|r| r.date.len()).max().unwrap_or(10);

    println!("📜 Audit log:\n");

    for r in rows {
        let color = color_for_operation(&r.operation);

        let mut op_target = color.paint(r.operation.as_str()).to_string();
        if !r.target.is_empty() {
            op_target.push_str(&format!(" ({})", r.target));
        }

        // padding measured on visible text, not on ANSI codes
        let padding = " ".repeat(OP_WIDTH.saturating_sub(visible_width(&op_target)));

        println!(
            "{:>id_w$}: {:<date_w$} | {}{} => {}",
            r.id,
            r.date,
            op_target,
            padding,
            r.message,
            id_w = id_w,
            date_w = date_w
        );
    }

    Ok(())
}
