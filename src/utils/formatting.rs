//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// Pad to a display width (accented names count as one column per glyph).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Cut to a display width, marking the cut with '…'.
pub fn truncate(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    let mut out = String::new();
    for c in s.chars() {
        if UnicodeWidthStr::width(out.as_str()) + 1 >= width {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}

/// `8h`, `1.5h`, `0.25h`: no trailing zeros.
pub fn hours(h: f64) -> String {
    let s = format!("{:.2}", h);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    format!("{}h", s)
}
