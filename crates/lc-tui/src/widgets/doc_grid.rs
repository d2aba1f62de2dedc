use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use lc_core::metrics::{grid_fill, GRID_CELLS};

use crate::glyphs::DOCUMENT;

/// Cells per grid row; the grid is two rows of five.
pub const GRID_COLUMNS: usize = 5;

/// Two lines of document cells, filled cells in `color`.
///
/// Each cell reads ` [▤] `; empty cells are dark gray.
pub fn grid_lines(documents: u32, color: Color) -> Vec<Line<'static>> {
    let fill = grid_fill(documents);
    fill.chunks(GRID_COLUMNS)
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&filled| {
                    let style = if filled {
                        Style::default().fg(color)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    Span::styled(format!(" [{}] ", DOCUMENT), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Number of filled cells, for labels and tests.
pub fn filled_cells(documents: u32) -> usize {
    grid_fill(documents).iter().filter(|&&f| f).count()
}

const _: () = assert!(GRID_CELLS % GRID_COLUMNS == 0);
