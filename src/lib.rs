//! sudoku-smt
//!
//! Translates 9x9 Sudoku puzzles into SMT constraints. The `grid` module
//! parses the textual puzzle format, `constraint` enumerates the Sudoku
//! rules over it, and two interchangeable sinks consume the result:
//! `smtlib` serializes the constraints as SMT-LIB2 text, while `solve`
//! asserts them directly against the embedded Z3 solver and reads back a
//! model.

pub mod constraint;
pub mod grid;
pub mod smtlib;
pub mod solve;

// Re-export main types for convenience
pub use constraint::{constraints, Constraint};
pub use grid::{Cell, Grid, ParseError, Pos};
pub use solve::{solve, Solution};
