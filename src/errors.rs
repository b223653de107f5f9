//! Errors that may be encountered when constructing or parsing a board
#[cfg(doc)]
use crate::Board;

/// Error for [`Board::empty`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSideError {
    /// The side length was 0
    #[error("side length must be at least 1")]
    Zero,
    /// The side length has no integer square root
    #[error("side length {0} is not a perfect square")]
    NotAPerfectSquare(usize),
    /// Digits 1..=side must fit in a byte
    #[error("side length {0} exceeds the maximum of 255")]
    TooLarge(usize),
}

/// Error for [`Board::from_str_line`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseBoardError {
    /// Accepted values are numbers 1..=9 and '0', '.' or '_' for empty cells
    #[error("cell {cell} contains invalid character '{ch}'")]
    InvalidEntry {
        /// Cell number goes from 0..=80, 0..=8 for the first row, 9..=17 for the 2nd and so on
        cell: u8,
        /// The parsed invalid char
        ch: char,
    },
    /// Fewer than 81 cells supplied. Contains the number of cells found.
    #[error("line contains {0} cells instead of the required 81")]
    NotEnoughCells(u8),
    /// More than 81 cells supplied
    #[error("line contains more than 81 cells")]
    TooManyCells,
}

/// Error for [`Board::from_rows`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FromRowsError {
    /// The number of rows is not a valid side length
    #[error(transparent)]
    InvalidSide(#[from] InvalidSideError),
    /// Some row does not contain exactly `side` cells
    #[error("row {row} contains {found} cells instead of {side}")]
    RaggedRow {
        /// Row index from 0, topmost row is 0
        row: usize,
        /// Number of cells in that row
        found: usize,
        /// Expected number of cells
        side: usize,
    },
    /// A cell value lies outside `0..=side`
    #[error("cell ({row}, {col}) contains {value}, outside of 0..={side}")]
    ValueOutOfRange {
        /// Row index of the offending cell
        row: usize,
        /// Column index of the offending cell
        col: usize,
        /// The out-of-range value
        value: usize,
        /// Side length of the board
        side: usize,
    },
}

/// Error for a single interactively entered row of cells.
///
/// Produced by [`crate::parse_row`]; the binary's input loop reports it and
/// re-prompts for the same row.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RowParseError {
    /// The row does not contain exactly `side` whitespace-separated tokens
    #[error("expected {side} numbers, found {found}")]
    WrongCellCount {
        /// Number of tokens found
        found: usize,
        /// Expected number of tokens
        side: usize,
    },
    /// A token could not be parsed as an integer
    #[error("'{0}' is not a number")]
    NotANumber(String),
    /// A parsed number lies outside `0..=side`
    #[error("{value} is outside of 0..={side}")]
    OutOfRange {
        /// The out-of-range value
        value: i64,
        /// Side length of the board
        side: usize,
    },
}
