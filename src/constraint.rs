use itertools::Itertools;

use crate::grid::{Cell, Grid, Pos, BOX, SIZE};

/// One proposition of the Sudoku model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// The cell holds exactly the given digit.
    Fixed(Pos, u8),
    /// The cell holds some value in `1..=9`.
    InRange(Pos),
    /// The two cells hold different values.
    NotEqual(Pos, Pos),
}

/// The SMT variable name of a cell, `xRC` with single-digit row and column.
pub fn var_name((row, col): Pos) -> String {
    format!("x{row}{col}")
}

/// Enumerates the complete constraint model for a grid.
///
/// The sequence is deterministic:
///
/// 1. one `Fixed` or `InRange` per cell, row-major (81 constraints);
/// 2. per row, every unordered pair of columns as `NotEqual` (36 each);
/// 3. per column, every unordered pair of rows (36 each);
/// 4. per 3x3 box, every unordered pair of its cells (36 each).
///
/// Each unordered pair appears once per group; a pair sharing both a line
/// and a box is constrained by both groups.
pub fn constraints(grid: &Grid) -> Vec<Constraint> {
    let mut model = Vec::with_capacity(SIZE * SIZE + 3 * SIZE * 36);

    // 1.
    // Pin the givens and bound the blanks.
    for pos in Grid::positions() {
        model.push(match grid.cell(pos) {
            Cell::Given(digit) => Constraint::Fixed(pos, digit),
            Cell::Blank => Constraint::InRange(pos),
        });
    }

    // 2.
    // No digit repeats within a row.
    for row in 0..SIZE {
        for (a, b) in (0..SIZE).tuple_combinations() {
            model.push(Constraint::NotEqual((row, a), (row, b)));
        }
    }

    // 3.
    // No digit repeats within a column.
    for col in 0..SIZE {
        for (a, b) in (0..SIZE).tuple_combinations() {
            model.push(Constraint::NotEqual((a, col), (b, col)));
        }
    }

    // 4.
    // No digit repeats within a 3x3 box. Box origins sit at row/column
    // offsets 0, 3 and 6.
    for band in 0..BOX {
        for stack in 0..BOX {
            for (a, b) in box_cells(band, stack).tuple_combinations() {
                model.push(Constraint::NotEqual(a, b));
            }
        }
    }

    log::debug!("enumerated {} constraints", model.len());
    model
}

fn box_cells(band: usize, stack: usize) -> impl Iterator<Item = Pos> + Clone {
    (0..BOX)
        .cartesian_product(0..BOX)
        .map(move |(row, col)| (band * BOX + row, stack * BOX + col))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::grid::CANONICAL;

    const BLANK: &str = "\
. . . . . . . . .
. . . . . . . . .
. . . . . . . . .
. . . . . . . . .
. . . . . . . . .
. . . . . . . . .
. . . . . . . . .
. . . . . . . . .
. . . . . . . . .
";

    fn count(model: &[Constraint], pred: impl Fn(&Constraint) -> bool) -> usize {
        model.iter().filter(|c| pred(c)).count()
    }

    #[test]
    fn canonical_grid_constraint_counts() {
        let grid: Grid = CANONICAL.parse().expect("valid puzzle");
        let model = constraints(&grid);

        assert_eq!(count(&model, |c| matches!(c, Constraint::Fixed(..))), 30);
        assert_eq!(count(&model, |c| matches!(c, Constraint::InRange(..))), 51);
        assert_eq!(
            count(&model, |c| matches!(c, Constraint::NotEqual(..))),
            36 * 9 * 3
        );
        assert_eq!(model.len(), 81 + 972);
    }

    #[test]
    fn blank_grid_has_only_range_constraints_for_cells() {
        let grid: Grid = BLANK.parse().expect("valid puzzle");
        let model = constraints(&grid);

        assert_eq!(count(&model, |c| matches!(c, Constraint::Fixed(..))), 0);
        assert_eq!(count(&model, |c| matches!(c, Constraint::InRange(..))), 81);
    }

    #[test]
    fn enumeration_is_idempotent() {
        let grid: Grid = CANONICAL.parse().expect("valid puzzle");
        assert_eq!(constraints(&grid), constraints(&grid));
    }

    #[test]
    fn distinctness_covers_exactly_the_peer_pairs() {
        let grid: Grid = BLANK.parse().expect("valid puzzle");

        let mut pairs: HashSet<(Pos, Pos)> = HashSet::new();
        let mut repeats = 0;
        for constraint in constraints(&grid) {
            if let Constraint::NotEqual(a, b) = constraint {
                assert_ne!(a, b);
                if !pairs.insert((a.min(b), a.max(b))) {
                    repeats += 1;
                }
            }
        }

        // Every cell has 20 peers, each unordered pair counted once.
        assert_eq!(pairs.len(), 81 * 20 / 2);
        // Pairs sharing both a line and a box are constrained by two groups.
        assert_eq!(repeats, 162);
    }

    #[test]
    fn cell_constraints_come_first_in_row_major_order() {
        let grid: Grid = CANONICAL.parse().expect("valid puzzle");
        let model = constraints(&grid);

        assert_eq!(model[0], Constraint::Fixed((0, 0), 5));
        assert_eq!(model[1], Constraint::Fixed((0, 1), 3));
        assert_eq!(model[2], Constraint::InRange((0, 2)));
        assert_eq!(model[80], Constraint::Fixed((8, 8), 9));
        assert_eq!(model[81], Constraint::NotEqual((0, 0), (0, 1)));
    }

    #[test]
    fn variable_names_match_the_smt_encoding() {
        assert_eq!(var_name((0, 0)), "x00");
        assert_eq!(var_name((8, 3)), "x83");
    }
}
