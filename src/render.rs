//! Terminal rendering of boards with box-drawing borders
//!
//! The renderer distinguishes given digits from solver-filled ones, which
//! is why it takes a snapshot of the original puzzle next to the board to
//! draw. It is a pure function to a `String`; color choices travel in a
//! [`Style`] value instead of process-wide state.
use colored::{Color, Colorize};

use crate::board::Board;

/// Color tokens for [`render`]. `None` leaves the text unstyled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Style {
    /// Border lines
    pub frame: Option<Color>,
    /// Digits present in the original puzzle
    pub given: Option<Color>,
    /// Digits filled in by the solver
    pub solved: Option<Color>,
}

impl Style {
    /// The default colored style: blue frame, red givens, green solved cells.
    pub fn colored() -> Self {
        Style {
            frame: Some(Color::Blue),
            given: Some(Color::Red),
            solved: Some(Color::Green),
        }
    }

    /// A style that applies no color at all.
    pub fn plain() -> Self {
        Style {
            frame: None,
            given: None,
            solved: None,
        }
    }
}

fn paint(text: &str, color: Option<Color>) -> String {
    match color {
        Some(color) => text.color(color).to_string(),
        None => text.to_string(),
    }
}

/// Renders `board` as a framed grid, one line per board row plus border
/// lines. Thick lines separate boxes, thin lines separate cells, empty
/// cells are left blank. Cells that are non-zero in `given` are drawn in
/// the given color, all other digits in the solved color.
///
/// # Panic
/// Panics, if `given` has a different side length than `board`.
pub fn render(board: &Board, given: &Board, style: Style) -> String {
    assert!(board.side() == given.side());
    let side = board.side();
    let box_size = board.box_size();
    // widest digit plus one space of padding on both sides
    let cell_width = side.to_string().len() + 2;

    let horizontal = |left: char, thin: char, thick: char, fill: char, right: char| {
        let mut line = String::new();
        line.push(left);
        for col in 0..side {
            for _ in 0..cell_width {
                line.push(fill);
            }
            if col + 1 == side {
                line.push(right);
            } else if (col + 1) % box_size == 0 {
                line.push(thick);
            } else {
                line.push(thin);
            }
        }
        line
    };

    let top = horizontal('╔', '╤', '╦', '═', '╗');
    let thick = horizontal('╠', '╪', '╬', '═', '╣');
    let thin = horizontal('╟', '┼', '╫', '─', '╢');
    let bottom = horizontal('╚', '╧', '╩', '═', '╝');

    let mut out = String::new();
    out.push_str(&paint(&top, style.frame));
    out.push('\n');

    for row in 0..side {
        out.push_str(&paint("║", style.frame));
        for col in 0..side {
            match board.get(row, col) {
                0 => out.push_str(&" ".repeat(cell_width)),
                digit => {
                    let color = if given.get(row, col) != 0 {
                        style.given
                    } else {
                        style.solved
                    };
                    let text = format!(" {:>1$} ", digit, cell_width - 2);
                    out.push_str(&paint(&text, color));
                }
            }
            if col + 1 == side {
                out.push_str(&paint("║", style.frame));
            } else if (col + 1) % box_size == 0 {
                out.push_str(&paint("║", style.frame));
            } else {
                out.push('│');
            }
        }
        out.push('\n');

        if row + 1 == side {
            out.push_str(&paint(&bottom, style.frame));
            out.push('\n');
        } else if (row + 1) % box_size == 0 {
            out.push_str(&paint(&thick, style.frame));
            out.push('\n');
        } else {
            out.push_str(&paint(&thin, style.frame));
            out.push('\n');
        }
    }
    out
}
