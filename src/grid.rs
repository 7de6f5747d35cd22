use std::{error::Error, fmt, str::FromStr};

/// Row/column coordinates of a cell, both in `0..9`.
pub type Pos = (usize, usize);

/// Side length of the board.
pub const SIZE: usize = 9;

/// Side length of one of the nine non-overlapping subgrids.
pub const BOX: usize = 3;

/// A single board entry: either a given digit in `1..=9` or a blank whose
/// value is left to the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Given(u8),
    Blank,
}

/// A parsed 9x9 board, row-major, immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; SIZE * SIZE],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line that is not 9 whitespace-separated tokens of `1`-`9` or `.`.
    /// Carries the 1-based line number and the raw offending line.
    BadLine { number: usize, line: String },
    /// Input ended before 9 lines were read.
    MissingLines { found: usize },
}

impl Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadLine { number, line } => {
                write!(f, "invalid input line {number}: '{line}'")
            }
            ParseError::MissingLines { found } => {
                write!(f, "expected 9 input lines, found {found}")
            }
        }
    }
}

impl Grid {
    /// Parses a board from 9 lines of text.
    ///
    /// Each line must contain exactly 9 whitespace-separated tokens, each a
    /// digit `1`-`9` or a `.` marking a blank cell. The first line that does
    /// not match aborts the whole parse. Lines beyond the ninth are ignored.
    ///
    /// # Example
    ///
    /// ```txt
    /// 5 3 . . 7 . . . .
    /// 6 . . 1 9 5 . . .
    /// . 9 8 . . . . 6 .
    /// 8 . . . 6 . . . 3
    /// 4 . . 8 . 3 . . 1
    /// 7 . . . 2 . . . 6
    /// . 6 . . . . 2 8 .
    /// . . . 4 1 9 . . 5
    /// . . . . 8 . . 7 9
    /// ```
    pub fn parse(input: &str) -> Result<Grid, ParseError> {
        let mut cells = [Cell::Blank; SIZE * SIZE];
        let mut lines = input.lines();

        for row in 0..SIZE {
            let line = lines
                .next()
                .ok_or(ParseError::MissingLines { found: row })?;

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != SIZE {
                return Err(ParseError::BadLine {
                    number: row + 1,
                    line: line.to_owned(),
                });
            }

            for (col, token) in tokens.iter().enumerate() {
                cells[row * SIZE + col] = match token.as_bytes() {
                    b"." => Cell::Blank,
                    &[digit @ b'1'..=b'9'] => Cell::Given(digit - b'0'),
                    _ => {
                        return Err(ParseError::BadLine {
                            number: row + 1,
                            line: line.to_owned(),
                        })
                    }
                };
            }
        }

        let grid = Grid { cells };
        log::debug!("parsed grid with {} givens", grid.givens().count());
        Ok(grid)
    }

    /// Returns the entry at the given position.
    pub fn cell(&self, (row, col): Pos) -> Cell {
        self.cells[row * SIZE + col]
    }

    /// Iterator over all 81 positions in row-major order.
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| (row, col)))
    }

    /// Iterator over the positions and digits of the given cells.
    pub fn givens(&self) -> impl Iterator<Item = (Pos, u8)> + '_ {
        Self::positions().filter_map(|pos| match self.cell(pos) {
            Cell::Given(digit) => Some((pos, digit)),
            Cell::Blank => None,
        })
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            if row != 0 {
                writeln!(f)?;
            }
            for col in 0..SIZE {
                if col != 0 {
                    write!(f, " ")?;
                }
                match self.cell((row, col)) {
                    Cell::Given(digit) => write!(f, "{digit}")?,
                    Cell::Blank => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

/// The example puzzle used throughout the test suites.
#[cfg(test)]
pub(crate) const CANONICAL: &str = "\
5 3 . . 7 . . . .
6 . . 1 9 5 . . .
. 9 8 . . . . 6 .
8 . . . 6 . . . 3
4 . . 8 . 3 . . 1
7 . . . 2 . . . 6
. 6 . . . . 2 8 .
. . . 4 1 9 . . 5
. . . . 8 . . 7 9
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_puzzle() {
        let grid: Grid = CANONICAL.parse().expect("valid puzzle");
        assert_eq!(grid.cell((0, 0)), Cell::Given(5));
        assert_eq!(grid.cell((0, 1)), Cell::Given(3));
        assert_eq!(grid.cell((0, 2)), Cell::Blank);
        assert_eq!(grid.cell((8, 8)), Cell::Given(9));
        assert_eq!(grid.givens().count(), 30);
    }

    #[test]
    fn line_with_eight_tokens_is_rejected() {
        let bad = CANONICAL.replacen(". 9 8 . . . . 6 .", ". 9 8 . . . . 6", 1);
        let err = Grid::parse(&bad).unwrap_err();
        assert_eq!(
            err,
            ParseError::BadLine {
                number: 3,
                line: ". 9 8 . . . . 6".to_owned(),
            }
        );
        // The raw offending line is surfaced to the caller.
        assert!(err.to_string().contains(". 9 8 . . . . 6"));
    }

    #[test]
    fn invalid_tokens_are_rejected() {
        for token in ["0", "x", "53", "10"] {
            let bad = CANONICAL.replacen('5', token, 1);
            assert!(matches!(
                Grid::parse(&bad),
                Err(ParseError::BadLine { number: 1, .. })
            ));
        }
    }

    #[test]
    fn truncated_input_is_rejected() {
        let eight_lines: String =
            CANONICAL.lines().take(8).collect::<Vec<_>>().join("\n");
        assert_eq!(
            Grid::parse(&eight_lines),
            Err(ParseError::MissingLines { found: 8 })
        );
    }

    #[test]
    fn lines_beyond_the_ninth_are_ignored() {
        let extra = format!("{CANONICAL}this line is not part of the puzzle\n");
        assert_eq!(Grid::parse(&extra), Grid::parse(CANONICAL));
    }

    #[test]
    fn display_round_trips() {
        let grid: Grid = CANONICAL.parse().expect("valid puzzle");
        let rendered = grid.to_string();
        assert_eq!(rendered.parse::<Grid>().expect("valid puzzle"), grid);
        assert_eq!(rendered.lines().next(), Some("5 3 . . 7 . . . ."));
    }
}
