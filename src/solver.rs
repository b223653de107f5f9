//! The backtracking search at the heart of the crate
//!
//! Solving is a plain depth-first search over the empty cells. Each step
//! finds the first empty cell in row-major order, tries the digits
//! `1..=side` in ascending order and recurses after every placement that
//! passes the constraint check. A placement whose subtree yields no
//! solution is erased again before the next digit is tried; when all digits
//! fail the step reports failure upwards so the caller can retry its own
//! cell with a different digit.
//!
//! There is no constraint propagation and no candidate bookkeeping. The
//! call stack is the only backtracking state, which keeps the recursion
//! depth bounded by the number of empty cells (at most `side²`).
//!
//! The search trusts its input: a board whose givens already conflict is
//! not detected up front, it simply makes the search fail (or, for
//! conflicts the scans never cross, "succeed" relative to the broken
//! givens). Callers wanting early rejection use [`Board::is_valid`].
use crate::board::Board;

/// Returns whether placing `digit` at `(row, col)` conflicts with no
/// already placed digit in the cell's row, column or box.
///
/// The cell itself is assumed to be empty: a digit already sitting at
/// `(row, col)` counts as a conflict like any other cell's. Callers only
/// invoke this on cells holding 0.
pub fn is_safe(board: &Board, row: usize, col: usize, digit: u8) -> bool {
    let side = board.side();

    for c in 0..side {
        if board.get(row, c) == digit {
            return false;
        }
    }

    for r in 0..side {
        if board.get(r, col) == digit {
            return false;
        }
    }

    let box_size = board.box_size();
    let box_row = row - row % box_size;
    let box_col = col - col % box_size;
    for r in box_row..box_row + box_size {
        for c in box_col..box_col + box_size {
            if board.get(r, c) == digit {
                return false;
            }
        }
    }

    true
}

/// Tries to fill every empty cell of `board` so that no row, column or box
/// holds a digit twice.
///
/// Returns `true` and leaves the board fully filled if a solution was
/// found. When several solutions exist, the one reached first by the
/// row-major, ascending-digit search order is produced. Returns `false` if
/// no assignment of the empty cells works; the board's content is
/// unspecified in that case and callers must not rely on it equalling the
/// input.
pub fn solve(board: &mut Board) -> bool {
    let target = board
        .rows()
        .enumerate()
        .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &cell)| (r, c, cell)))
        .find(|&(_, _, cell)| cell == 0);

    let (row, col) = match target {
        Some((row, col, _)) => (row, col),
        // no empty cell left, the board is completely filled
        None => return true,
    };

    for digit in 1..=board.side() as u8 {
        if is_safe(board, row, col, digit) {
            board.set(row, col, digit);
            if solve(board) {
                return true;
            }
            board.set(row, col, 0);
        }
    }
    false
}

impl Board {
    /// Solves the board in place. Convenience wrapper around [`solve`].
    pub fn solve(&mut self) -> bool {
        solve(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_safe_sees_all_three_units() {
        let mut board = Board::empty(9).unwrap();
        board.set(0, 0, 5); // row conflict for (0, 4)
        board.set(8, 4, 6); // column conflict for (0, 4)
        board.set(1, 3, 7); // box conflict for (0, 4)

        assert!(!is_safe(&board, 0, 4, 5));
        assert!(!is_safe(&board, 0, 4, 6));
        assert!(!is_safe(&board, 0, 4, 7));
        assert!(is_safe(&board, 0, 4, 1));
    }

    #[test]
    fn trivial_board_solves_to_one() {
        let mut board = Board::empty(1).unwrap();
        assert!(board.solve());
        assert_eq!(board.get(0, 0), 1);
    }

    #[test]
    fn four_by_four_solves() {
        let mut board = Board::from_rows(&[
            vec![1, 0, 0, 0],
            vec![0, 0, 3, 0],
            vec![0, 4, 0, 0],
            vec![0, 0, 0, 2],
        ])
        .unwrap();
        assert!(board.solve());
        assert!(board.is_filled());
        assert!(board.is_valid());
        assert_eq!(board.get(0, 0), 1);
        assert_eq!(board.get(1, 2), 3);
        assert_eq!(board.get(2, 1), 4);
        assert_eq!(board.get(3, 3), 2);
    }
}
