//! Table rendering utilities for CLI outputs.

use super::formatting::{pad_right, truncate};
use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"))
}

/// Visible width of a cell, ignoring ANSI color codes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(ansi_re().replace_all(s, "").as_ref())
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&pad_right(&truncate(&col.header, col.width), col.width));
            out.push(' ');
        }
        out.push('\n');

        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let pad = col.width.saturating_sub(visible_width(cell));
                out.push_str(cell);
                out.push_str(&" ".repeat(pad));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
