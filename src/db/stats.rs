use crate::db::blobs::list_blobs;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use serde_json::Value;
use std::fs;

/// Count the items of a stored envelope without fully decoding it.
fn item_count(payload: &str) -> Option<usize> {
    match serde_json::from_str::<Value>(payload).ok()? {
        Value::Array(a) => Some(a.len()),
        Value::Object(m) => m.get("items")?.as_array().map(Vec::len),
        _ => None,
    }
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    let audit_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Audit rows:{} {}{}{}", CYAN, RESET, GREEN, audit_rows, RESET);

    println!("{}• Collections:{}", CYAN, RESET);
    let blobs = list_blobs(&pool.conn)?;
    if blobs.is_empty() {
        println!("    {GREY}--{RESET}");
    }
    for b in blobs {
        let payload = crate::db::blobs::load_blob(&pool.conn, &b.name)?.unwrap_or_default();
        let items = item_count(&payload)
            .map(|n| n.to_string())
            .unwrap_or_else(|| "?".into());
        println!(
            "    {:<12} {:>5} items {:>8} bytes  {GREY}{}{RESET}",
            b.name, items, b.bytes, b.updated_at
        );
    }

    println!();
    Ok(())
}
