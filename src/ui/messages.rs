use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_REJECT: &str = "⛔";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

/// A write the ledger or the placement engine refused; nothing was changed.
pub fn rejected<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_RED, BOLD, ICON_REJECT, RESET, msg);
}

/// Stale id warning: the target disappeared, the request is dropped.
pub fn stale(what: &str, id: impl fmt::Display) {
    warning(format!("{} #{} not found, nothing changed.", what, id));
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}=== {} ==={}", FG_BLUE, BOLD, msg, RESET);
}
