//! Interactive console front end for the solver
use std::io::{self, BufRead, Write};

use clap::Parser;
use colored::Colorize;

use sudoku_puzzle::render::{render, Style};
use sudoku_puzzle::{parse_row, Board, STANDARD_SIDE};

/// Solve sudoku puzzles with a backtracking search
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Solve a puzzle given as 81 cells ('1'-'9', empty as '0', '.' or '_') and exit
    #[arg(short, long, value_name = "CELLS")]
    line: Option<String>,

    /// Disable colored output
    #[arg(short, long)]
    plain: bool,
}

/// The built-in demonstration puzzle.
#[rustfmt::skip]
const EXAMPLE: [[u8; 9]; 9] = [
    [7, 0, 0, 0, 0, 0, 2, 0, 0],
    [4, 0, 2, 0, 0, 0, 0, 0, 3],
    [0, 0, 0, 2, 0, 1, 0, 0, 0],
    [3, 0, 0, 1, 8, 0, 0, 9, 7],
    [0, 0, 9, 0, 7, 0, 6, 0, 0],
    [6, 5, 0, 0, 3, 2, 0, 0, 1],
    [0, 0, 0, 4, 0, 9, 0, 0, 0],
    [5, 0, 0, 0, 0, 0, 1, 0, 6],
    [0, 0, 6, 0, 0, 0, 0, 0, 8],
];

fn example_board() -> Board {
    let rows: Vec<Vec<u8>> = EXAMPLE.iter().map(|row| row.to_vec()).collect();
    Board::from_rows(&rows).unwrap()
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{}", text.yellow());
    io::stdout().flush()
}

/// Reads a board from stdin, one row per line, re-prompting the same row
/// whenever it cannot be parsed. Returns `None` on end of input.
fn read_board(input: &mut dyn BufRead) -> io::Result<Option<Board>> {
    println!(
        "{}",
        "\nEnter the puzzle (0 for empty cells), one row per line,".yellow()
    );
    println!("{}", "numbers separated by spaces.".yellow());
    println!("Example: 7 0 0 0 0 0 2 0 0");

    let mut rows = Vec::with_capacity(STANDARD_SIDE);
    while rows.len() < STANDARD_SIDE {
        prompt(&format!("Row {}: ", rows.len() + 1))?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match parse_row(&line, STANDARD_SIDE) {
            Ok(row) => rows.push(row),
            Err(err) => println!("{}", format!("Error: {}", err).red()),
        }
    }
    // parse_row already bounds every value, so this cannot fail
    Ok(Some(Board::from_rows(&rows).unwrap()))
}

fn solve_and_report(mut board: Board, style: Style) {
    let given = board.clone();

    println!("{}", "\nThe puzzle:".yellow());
    println!("{}", render(&board, &given, style));

    if !board.is_valid() {
        println!(
            "{}",
            "The given digits already conflict with each other!".red()
        );
        return;
    }

    if board.solve() {
        println!("{}", "The solution:".green());
        println!("{}", render(&board, &given, style));
    } else {
        println!("{}", "No solution found!".red());
    }
}

fn run_menu(style: Style) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("{}", "\n=== Sudoku Solver ===".yellow());
        println!("1. Enter your own puzzle");
        println!("2. Solve the example puzzle");
        println!("3. Quit");
        prompt("Your choice (1-3): ")?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match line.trim() {
            "1" => match read_board(&mut input)? {
                Some(board) => solve_and_report(board, style),
                None => return Ok(()),
            },
            "2" => solve_and_report(example_board(), style),
            "3" => {
                println!("{}", "\nGoodbye!".green());
                return Ok(());
            }
            _ => println!("{}", "Please enter a number between 1 and 3!".red()),
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let style = if cli.plain {
        colored::control::set_override(false);
        Style::plain()
    } else {
        Style::colored()
    };

    if let Some(line) = cli.line {
        let board = match Board::from_str_line(&line) {
            Ok(board) => board,
            Err(err) => {
                eprintln!("{}", format!("Error: {}", err).red());
                std::process::exit(2);
            }
        };
        let given = board.clone();
        let mut solved = board;
        if !solved.solve() {
            println!("{}", "No solution found!".red());
            std::process::exit(1);
        }
        println!("{}", solved.to_str_line());
        println!("{}", render(&solved, &given, style));
        return Ok(());
    }

    run_menu(style)
}
