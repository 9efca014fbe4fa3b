//! Help Table
//!
//! Bordered grid of every pairing: rows are the player's move, columns the
//! computer's. Purely informational; it never touches round state.

use std::io::{self, Write};

use crate::core::moves::MoveSet;

/// Corner caption of the table.
pub const CORNER: &str = "v User\\PC >";

/// Column width limits for the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableLayout {
    /// Minimum width of the first (row label) column.
    pub min_label_width: usize,
    /// Minimum width of each outcome column.
    pub min_cell_width: usize,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            min_label_width: CORNER.len(),
            min_cell_width: 5,
        }
    }
}

fn width_of(text: &str) -> usize {
    text.chars().count()
}

fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for &w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line
}

fn row(cells: &[&str], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, &w) in cells.iter().zip(widths) {
        line.push_str(&format!(" {:<w$} |", cell, w = w));
    }
    line
}

/// Render the table as text, one line per `\n`.
pub fn render_help_table(moves: &MoveSet, layout: &TableLayout) -> String {
    let label_width = moves
        .iter()
        .map(width_of)
        .chain([width_of(CORNER), layout.min_label_width])
        .max()
        .unwrap_or(layout.min_label_width);

    let mut widths = Vec::with_capacity(moves.len() + 1);
    widths.push(label_width);
    widths.extend(moves.iter().map(|name| width_of(name).max(layout.min_cell_width)));

    let rule = border(&widths);
    let mut out = String::new();

    out.push_str(&rule);
    out.push('\n');
    let mut header = vec![CORNER];
    header.extend(moves.iter());
    out.push_str(&row(&header, &widths));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for (human, name) in moves.iter().enumerate() {
        let mut cells = vec![name];
        for computer in 0..moves.len() {
            cells.push(moves.outcome(human, computer).label());
        }
        out.push_str(&row(&cells, &widths));
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
    }

    out
}

/// Write the table to `out`.
pub fn write_help_table<W: Write>(out: &mut W, moves: &MoveSet, layout: &TableLayout) -> io::Result<()> {
    out.write_all(render_help_table(moves, layout).as_bytes())
}
