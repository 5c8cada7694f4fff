use crate::error::Result;
use colored::{ColoredString, Colorize};
use std::io::Write;
use unicode_width::UnicodeWidthStr;

/// Color applied to a cell after padding.
///
/// Padding always happens on the plain text. Coloring padded text keeps the
/// ANSI escapes out of the width calculation, so columns stay aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Green,
    Yellow,
    Red,
}

#[derive(Debug, Clone)]
pub struct Cell {
    text: String,
    tone: Tone,
}

impl Cell {
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Cell {
            text: text.into(),
            tone: Tone::Plain,
        }
    }

    pub fn toned<S: Into<String>>(text: S, tone: Tone) -> Self {
        Cell {
            text: text.into(),
            tone,
        }
    }
}

/// Column-aligned table with a header row and `│`/`┼` separators.
///
/// Column widths are computed from content using display width, not byte or
/// char counts, so wide glyphs in disk and interface names line up too.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, cells: Vec<Cell>) {
        debug_assert_eq!(cells.len(), self.headers.len());
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self, w: &mut impl Write) -> Result<()> {
        let widths = self.column_widths();

        let header_line: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, width)| pad(h, *width).white().bold().to_string())
            .collect();
        writeln!(w, "{}", header_line.join(" │ "))?;

        let rule: Vec<String> = widths.iter().map(|width| "─".repeat(*width)).collect();
        writeln!(w, "{}", rule.join("─┼─"))?;

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, width)| paint(pad(&cell.text, *width), cell.tone).to_string())
                .collect();
            writeln!(w, "{}", cells.join(" │ "))?;
        }

        Ok(())
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(cell.text.width());
                }
            }
        }
        widths
    }
}

fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn paint(text: String, tone: Tone) -> ColoredString {
    match tone {
        Tone::Plain => text.normal(),
        Tone::Green => text.green(),
        Tone::Yellow => text.yellow(),
        Tone::Red => text.red(),
    }
}
