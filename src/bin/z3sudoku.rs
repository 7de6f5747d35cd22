use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use sudoku_smt::{solve, Grid};

/// Solve a Sudoku puzzle from stdin with the Z3 SMT solver.
///
/// Input is 9 lines of 9 whitespace-separated entries, each a digit 1-9 or
/// a '.' marking a blank cell. Prints the solved grid, or "no solution"
/// when the puzzle is unsatisfiable.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn get_std_in() -> io::Result<String> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;
    Ok(input)
}

fn main() -> ExitCode {
    env_logger::init();
    Args::parse();

    let input = match get_std_in() {
        Ok(input) => input,
        Err(err) => {
            eprintln!("failed to read stdin: {err}");
            return ExitCode::FAILURE;
        }
    };

    let grid: Grid = match input.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match solve(&grid) {
        Some(solution) => println!("{solution}"),
        None => println!("no solution"),
    }

    ExitCode::SUCCESS
}
