use chrono::{Datelike, NaiveDate, Weekday};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Two-letter weekday tag used in grid headers.
pub fn weekday_short(d: NaiveDate) -> &'static str {
    match d.weekday() {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// Column label for grid day `offset` counted from `first`, e.g. `D2 Fr 01-03`.
pub fn day_label(first: NaiveDate, offset: u32) -> String {
    match first.checked_add_days(chrono::Days::new(offset as u64)) {
        Some(d) => format!("D{} {} {}", offset, weekday_short(d), d.format("%m-%d")),
        None => format!("D{}", offset),
    }
}
