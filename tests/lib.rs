use sudoku_puzzle::{is_safe, Board};

const EXAMPLE: &str =
    "7.....2..4.2.....3...2.1...3..18..97..9.7.6..65..32..1...4.9...5.....1.6..6.....8";

const EXAMPLE_SOLUTION: &str =
    "765843219412697853938251764324186597189574632657932481871469325593728146246315978";

#[test]
fn solve_example_puzzle() {
    let given = Board::from_str_line(EXAMPLE).unwrap();
    let mut board = given.clone();
    assert!(board.solve());
    assert!(board.is_filled());
    assert!(board.is_valid());

    // every given cell survives solving
    for row in 0..9 {
        for col in 0..9 {
            if given.get(row, col) != 0 {
                assert_eq!(board.get(row, col), given.get(row, col));
            }
        }
    }
}

#[test]
fn example_puzzle_first_solution() {
    // the search order is contractual: first empty cell in row-major order,
    // digits tried ascending. That pins down which solution comes out.
    let mut board = Board::from_str_line(EXAMPLE).unwrap();
    assert!(board.solve());
    assert_eq!(board.to_str_line(), EXAMPLE_SOLUTION);
}

#[test]
fn solve_block_format_puzzle() {
    let board_str = "\
___2___63
3____54_1
__1__398_
_______9_
___538___
_3_______
_263__5__
5_37____8
47___1___";

    let mut board = Board::from_str_line(board_str).unwrap();
    assert!(board.solve());
    assert!(board.is_filled());
    assert!(board.is_valid());
}

#[test]
fn empty_board_is_solvable() {
    let mut board = Board::empty(9).unwrap();
    assert!(board.solve());
    assert!(board.is_filled());
    assert!(board.is_valid());
}

#[test]
fn empty_board_first_solution() {
    let mut board = Board::empty(9).unwrap();
    assert!(board.solve());
    assert_eq!(
        board.to_str_line(),
        "123456789456789123789123456214365897365897214897214365531642978642978531978531642"
    );
}

#[test]
fn unsolvable_puzzle_returns_false() {
    // row 0 rules out 1..=8 for its last cell, the 9 in the same column
    // rules out the rest. The givens themselves are conflict-free.
    let mut board = Board::from_str_line(
        "12345678.\
         .........\
         .........\
         ........9\
         .........\
         .........\
         .........\
         .........\
         .........",
    )
    .unwrap();
    assert!(board.is_valid());
    assert!(!board.solve());
}

#[test]
fn solved_board_returns_true_without_mutation() {
    let solved = Board::from_str_line(EXAMPLE_SOLUTION).unwrap();
    let mut board = solved.clone();
    assert!(board.solve());
    assert_eq!(board, solved);
}

#[test]
fn solving_is_deterministic() {
    let mut first = Board::from_str_line(EXAMPLE).unwrap();
    let mut second = Board::from_str_line(EXAMPLE).unwrap();
    assert_eq!(first.solve(), second.solve());
    assert_eq!(first, second);

    // also holds for a puzzle with many solutions
    let mut first = Board::empty(9).unwrap();
    let mut second = Board::empty(9).unwrap();
    assert_eq!(first.solve(), second.solve());
    assert_eq!(first, second);
}

#[test]
fn is_safe_rejects_duplicate_in_row() {
    // two 5s in row 0 already break the row invariant; 5 is then unsafe
    // for every empty cell of that row
    let mut board = Board::empty(9).unwrap();
    board.set(0, 1, 5);
    board.set(0, 6, 5);
    for col in [0, 2, 3, 4, 5, 7, 8] {
        assert!(!is_safe(&board, 0, col, 5));
    }
}

#[test]
fn one_by_one_board() {
    let mut board = Board::empty(1).unwrap();
    assert_eq!(board.box_size(), 1);
    assert!(board.solve());
    assert_eq!(board.get(0, 0), 1);
}

#[test]
fn four_by_four_board() {
    let mut board = Board::from_rows(&[
        vec![0, 0, 4, 0],
        vec![1, 0, 0, 0],
        vec![0, 0, 0, 3],
        vec![0, 2, 0, 0],
    ])
    .unwrap();
    assert!(board.solve());
    assert!(board.is_filled());
    assert!(board.is_valid());
}

#[test]
#[should_panic]
fn too_few_rows_panic() {
    let board_str = "\
___2___63
3____54_1
__1__398_
_______9_
___538___
_3_______
_263__5__
5_37____8";

    Board::from_str_line(board_str).unwrap();
}
