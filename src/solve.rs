use std::fmt;

use z3::{
    ast::{Ast, Bool, Int},
    Config, Context, Model, SatResult, Solver,
};

use crate::constraint::{constraints, var_name, Constraint};
use crate::grid::{Grid, Pos, SIZE};

macro_rules! int {
    ( $ctx:expr , $i:expr ) => {{
        Int::from_u64($ctx, ($i) as u64)
    }};
}

/// A complete assignment of digits to all 81 cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    digits: [u8; SIZE * SIZE],
}

impl Solution {
    /// Returns the solved digit at the given position.
    pub fn digit(&self, (row, col): Pos) -> u8 {
        self.digits[row * SIZE + col]
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            if row != 0 {
                writeln!(f)?;
            }
            for col in 0..SIZE {
                if col != 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.digit((row, col)))?;
            }
        }
        Ok(())
    }
}

/// One `Int` variable per cell, row-major, named like the SMT-LIB encoding.
fn cell_vars(context: &Context) -> Vec<Int<'_>> {
    Grid::positions()
        .map(|pos| Int::new_const(context, var_name(pos)))
        .collect()
}

/// Translates the constraint model into Z3 boolean assertions.
fn asserts<'a>(
    context: &'a Context,
    vars: &[Int<'a>],
    model: &[Constraint],
) -> Vec<Bool<'a>> {
    let at = |(row, col): Pos| &vars[row * SIZE + col];

    let mut asserts = Vec::new();
    for constraint in model {
        match *constraint {
            Constraint::Fixed(pos, digit) => {
                asserts.push(at(pos)._eq(&int!(context, digit)));
            }
            Constraint::InRange(pos) => {
                asserts.push(at(pos).ge(&int!(context, 1)));
                asserts.push(at(pos).le(&int!(context, 9)));
            }
            Constraint::NotEqual(a, b) => {
                asserts.push(at(a)._eq(at(b)).not());
            }
        }
    }
    asserts
}

fn read_model(model: &Model, vars: &[Int]) -> Option<Solution> {
    let mut digits = [0u8; SIZE * SIZE];
    for (digit, var) in digits.iter_mut().zip(vars) {
        *digit = model.eval(var, true)?.as_u64()? as u8;
    }
    Some(Solution { digits })
}

/// Solves the puzzle with Z3, returning `None` when the constraints are
/// unsatisfiable (or the solver gives up).
pub fn solve(grid: &Grid) -> Option<Solution> {
    let context = Context::new(&Config::default());
    let vars = cell_vars(&context);
    let solver = Solver::new(&context);

    for assert in asserts(&context, &vars, &constraints(grid)) {
        solver.assert(&assert);
    }

    match solver.check() {
        SatResult::Sat => {
            let model = solver.get_model()?;
            read_model(&model, &vars)
        }
        SatResult::Unsat | SatResult::Unknown => {
            log::debug!("solver returned no model");
            None
        }
    }
}
