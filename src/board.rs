//! The board data structure the solver operates on
use std::fmt;

use crate::errors::{FromRowsError, InvalidSideError, ParseBoardError, RowParseError};

/// A square sudoku board of side length `side`, stored row-major.
///
/// Cells hold `0` for empty or a digit in `1..=side`. The side length must be
/// a perfect square; its integer square root is the side of the boxes the
/// board is partitioned into (3 for the standard 9×9 board).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Vec<u8>,
    side: usize,
    box_size: usize,
}

/// Side length of the standard board
pub const STANDARD_SIDE: usize = 9;

fn box_size_for(side: usize) -> Result<usize, InvalidSideError> {
    if side == 0 {
        return Err(InvalidSideError::Zero);
    }
    if side > 255 {
        return Err(InvalidSideError::TooLarge(side));
    }
    let root = (side as f64).sqrt() as usize;
    // float sqrt can land one off for large inputs
    let root = [root.saturating_sub(1), root, root + 1]
        .iter()
        .cloned()
        .find(|r| r * r == side);
    root.ok_or(InvalidSideError::NotAPerfectSquare(side))
}

impl Board {
    /// Creates an all-empty board of the given side length.
    ///
    /// The side must be a non-zero perfect square no larger than 255.
    pub fn empty(side: usize) -> Result<Self, InvalidSideError> {
        let box_size = box_size_for(side)?;
        Ok(Board {
            cells: vec![0; side * side],
            side,
            box_size,
        })
    }

    /// Creates a board from row vectors, one inner `Vec` per row from top to
    /// bottom. The number of rows determines the side length.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, FromRowsError> {
        let side = rows.len();
        let mut board = Board::empty(side)?;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != side {
                return Err(FromRowsError::RaggedRow {
                    row: r,
                    found: row.len(),
                    side,
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if value as usize > side {
                    return Err(FromRowsError::ValueOutOfRange {
                        row: r,
                        col: c,
                        value: value as usize,
                        side,
                    });
                }
                board.cells[r * side + c] = value;
            }
        }
        Ok(board)
    }

    /// Creates a standard 9×9 board from an 81-character line.
    ///
    /// Accepted cell characters are `1..=9` and `0`, `.` or `_` for empty
    /// cells. Whitespace anywhere in the line is skipped, so block-shaped
    /// string literals parse as well.
    pub fn from_str_line(s: &str) -> Result<Self, ParseBoardError> {
        let mut board = Board::empty(STANDARD_SIDE).unwrap();
        let mut cell = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            if cell == 81 {
                return Err(ParseBoardError::TooManyCells);
            }
            board.cells[cell as usize] = match ch {
                '1'..='9' => ch.to_digit(10).unwrap() as u8,
                '0' | '.' | '_' => 0,
                _ => return Err(ParseBoardError::InvalidEntry { cell, ch }),
            };
            cell += 1;
        }
        if cell < 81 {
            return Err(ParseBoardError::NotEnoughCells(cell));
        }
        Ok(board)
    }

    /// Side length of the board.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Side length of the boxes, the integer square root of [`side`](Self::side).
    #[inline]
    pub fn box_size(&self) -> usize {
        self.box_size
    }

    /// Returns the value at `(row, col)`, `0` meaning empty.
    ///
    /// # Panic
    /// Panics, if `row` or `col` is not in `0..side`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(row < self.side && col < self.side);
        self.cells[row * self.side + col]
    }

    /// Sets the cell at `(row, col)` to `value`, `0` meaning empty.
    ///
    /// # Panic
    /// Panics, if `row` or `col` is not in `0..side` or `value` exceeds `side`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        assert!(row < self.side && col < self.side);
        assert!(value as usize <= self.side);
        self.cells[row * self.side + col] = value;
    }

    /// Returns an iterator over the rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.side)
    }

    /// Returns the cells in row-major order.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Whether every cell holds a digit.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|&cell| cell != 0)
    }

    /// Whether no digit occurs twice in any row, column or box.
    ///
    /// Empty cells are ignored, so a partially filled board with
    /// conflict-free givens counts as valid. The solver never calls this;
    /// it is a helper for callers that want to reject illegal input early.
    pub fn is_valid(&self) -> bool {
        let side = self.side;
        let mut seen = vec![false; side + 1];

        let mut all_unique = |cells: &mut dyn Iterator<Item = u8>| {
            for entry in seen.iter_mut() {
                *entry = false;
            }
            for value in cells {
                if value == 0 {
                    continue;
                }
                if seen[value as usize] {
                    return false;
                }
                seen[value as usize] = true;
            }
            true
        };

        for row in 0..side {
            if !all_unique(&mut (0..side).map(|col| self.cells[row * side + col])) {
                return false;
            }
        }
        for col in 0..side {
            if !all_unique(&mut (0..side).map(|row| self.cells[row * side + col])) {
                return false;
            }
        }
        let box_size = self.box_size;
        for band in 0..box_size {
            for stack in 0..box_size {
                let mut box_cells = (0..side).map(|i| {
                    let row = band * box_size + i / box_size;
                    let col = stack * box_size + i % box_size;
                    self.cells[row * side + col]
                });
                if !all_unique(&mut box_cells) {
                    return false;
                }
            }
        }
        true
    }

    /// Converts a standard 9×9 board to the 81-character line format, `.`
    /// for empty cells.
    ///
    /// # Panic
    /// Panics, if the board's side is not 9.
    pub fn to_str_line(&self) -> String {
        assert!(self.side == STANDARD_SIDE);
        self.cells
            .iter()
            .map(|&cell| match cell {
                0 => '.',
                _ => (b'0' + cell) as char,
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r != 0 {
                writeln!(f)?;
            }
            for (c, &cell) in row.iter().enumerate() {
                if c != 0 {
                    write!(f, " ")?;
                }
                match cell {
                    0 => write!(f, "_")?,
                    _ => write!(f, "{}", cell)?,
                }
            }
        }
        Ok(())
    }
}

/// Parses one interactively entered row: `side` whitespace-separated
/// integers in `0..=side`.
///
/// The binary reads boards a row per line with this, re-prompting the same
/// row whenever it returns an error.
pub fn parse_row(line: &str, side: usize) -> Result<Vec<u8>, RowParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != side {
        return Err(RowParseError::WrongCellCount {
            found: tokens.len(),
            side,
        });
    }
    let mut row = Vec::with_capacity(side);
    for token in tokens {
        let value: i64 = token
            .parse()
            .map_err(|_| RowParseError::NotANumber(token.to_string()))?;
        if value < 0 || value > side as i64 {
            return Err(RowParseError::OutOfRange { value, side });
        }
        row.push(value as u8);
    }
    Ok(row)
}
