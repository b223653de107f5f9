#![warn(missing_docs)]
//! A brute-force sudoku solver
//!
//! ## Overview
//!
//! This crate solves sudoku puzzles by exhaustive backtracking search: no
//! candidate bookkeeping, no solving techniques, just a constraint check
//! per placement and undo on failure. It handles the standard 9×9 board as
//! well as any board whose side length is a perfect square.
//!
//! ## Example
//!
//! ```
//! use sudoku_puzzle::Board;
//!
//! let line = "7.....2..4.2.....3...2.1...3..18..97..9.7.6..65..32..1...4.9...5.....1.6..6.....8";
//! let mut board = Board::from_str_line(line).unwrap();
//!
//! // Solve in place; false means no solution exists.
//! if board.solve() {
//!     println!("{}", board);
//!     println!("{}", board.to_str_line());
//! }
//! ```
mod board;
mod solver;

pub mod render;

/// Contains errors for board construction and parsing
pub mod errors;

pub use crate::board::{parse_row, Board, STANDARD_SIDE};
pub use crate::solver::{is_safe, solve};
