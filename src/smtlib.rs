use std::io::{self, Write};

use crate::constraint::{constraints, var_name, Constraint};
use crate::grid::Grid;

/// Serializes the constraint model of a grid as an SMT-LIB2 script.
///
/// Declares one `Int` constant per cell, asserts every constraint, and
/// closes with `(check-sat)` and `(get-model)` so the script can be fed to
/// any SMT-LIB2 solver as-is.
pub fn write_smt2<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    for pos in Grid::positions() {
        writeln!(out, "(declare-const {} Int)", var_name(pos))?;
    }

    for constraint in constraints(grid) {
        match constraint {
            Constraint::Fixed(pos, digit) => {
                writeln!(out, "(assert (= {} {}))", var_name(pos), digit)?;
            }
            Constraint::InRange(pos) => {
                writeln!(out, "(assert (>= {} 1))", var_name(pos))?;
                writeln!(out, "(assert (<= {} 9))", var_name(pos))?;
            }
            Constraint::NotEqual(a, b) => {
                writeln!(out, "(assert (not (= {} {})))", var_name(a), var_name(b))?;
            }
        }
    }

    writeln!(out, "(check-sat)")?;
    writeln!(out, "(get-model)")
}
