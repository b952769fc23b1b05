/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Grid cell color:
/// 0 → green (free)
/// within capacity → blue (allocated)
/// over capacity → red
pub fn color_for_load(used: f64, capacity: f64) -> &'static str {
    if used <= 0.0 {
        GREEN
    } else if used <= capacity {
        BLUE
    } else {
        RED
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
