use crate::config::Config;
use crate::core::HOURS_PER_DAY;
use crate::errors::AppResult;
use crate::models::resource::display_name;
use crate::planner::Planner;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{color_for_load, paint};
use crate::utils::date::day_label;
use crate::utils::formatting::{hours as fmt_hours, truncate};
use crate::utils::table::{Column, Table};

const NAME_W: usize = 20;
const DAY_W: usize = 12;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let planner = Planner::open(cfg)?;
    let store = planner.store();
    let index = store.capacity();
    let days = planner.visible_days();
    let first = store.today();

    header(format!("Capacity plan from {} ({} days)", first, days));

    let mut columns = vec![Column::new("RESOURCE / DAY", NAME_W)];
    for d in 0..days {
        columns.push(Column::new(day_label(first, d), DAY_W));
    }
    let mut table = Table::new(columns);

    for r in planner.resources() {
        let mut row = vec![truncate(&r.name, NAME_W)];
        for d in 0..days {
            let used = index.hours_used(&r.id, d);
            let cell = format!("{}/{}", fmt_hours(used), fmt_hours(HOURS_PER_DAY));
            row.push(paint(&cell, color_for_load(used, HOURS_PER_DAY)));
        }
        table.add_row(row);
    }
    print!("{}", table.render());

    println!(
        "\n{} free   {} allocated   {} over capacity\n",
        paint("■", color_for_load(0.0, HOURS_PER_DAY)),
        paint("■", color_for_load(1.0, HOURS_PER_DAY)),
        paint("■", color_for_load(HOURS_PER_DAY + 1.0, HOURS_PER_DAY)),
    );

    if index.is_empty() {
        info("No allocations yet. Try `rplanner demand <hours>` or `rplanner seed`.");
        return Ok(());
    }

    for a in store.allocations() {
        println!(
            "  #{:<4} {:<20} {:<20} day {}..{} {}",
            a.id,
            truncate(&a.project, 20),
            truncate(display_name(planner.resources(), &a.resource_id), 20),
            a.day,
            a.last_day(),
            fmt_hours(a.hours)
        );
    }

    for (resource_id, day, used) in index.overbooked(HOURS_PER_DAY) {
        warning(format!(
            "{} is overbooked on day {}: {}",
            display_name(planner.resources(), resource_id),
            day,
            fmt_hours(used)
        ));
    }

    Ok(())
}
