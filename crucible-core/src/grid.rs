//! Heat-loss grid parsed from lines of digits

use crate::direction::Direction;
use crate::error::ParseError;
use log::debug;
use std::fmt;
use std::str::FromStr;

/// A cell position as (column, row), origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub col: usize,
    pub row: usize,
}

impl Coord {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Rectangular grid of per-cell heat loss values (0-9)
///
/// Immutable once parsed. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Parse a grid from text, one row per line
    ///
    /// Trailing line terminators are ignored. Every line must have the same
    /// number of characters and every character must be a decimal digit.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::from_lines(input.trim_end_matches(['\n', '\r']).lines())
    }

    /// Build a grid from already split lines
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let lines: Vec<&str> = lines.into_iter().collect();
        if lines.iter().all(|line| line.is_empty()) {
            return Err(ParseError::Empty);
        }

        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for (line_idx, line) in lines.into_iter().enumerate() {
            if line.is_empty() {
                return Err(ParseError::BlankLine { line: line_idx + 1 });
            }
            let before = cells.len();
            for (col_idx, c) in line.chars().enumerate() {
                let digit = c.to_digit(10).ok_or(ParseError::InvalidDigit {
                    line: line_idx + 1,
                    column: col_idx + 1,
                    found: c,
                })?;
                cells.push(digit as u8);
            }

            let found = cells.len() - before;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(ParseError::InconsistentWidth {
                        line: line_idx + 1,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.ok_or(ParseError::Empty)?;
        debug!("parsed {}x{} grid", width, height);

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `coord` lies inside the grid
    pub fn contains(&self, coord: Coord) -> bool {
        coord.col < self.width && coord.row < self.height
    }

    /// Heat loss of the cell at `coord`, `None` when outside the grid
    pub fn get(&self, coord: Coord) -> Option<u8> {
        self.contains(coord)
            .then(|| self.cells[coord.row * self.width + coord.col])
    }

    pub fn top_left(&self) -> Coord {
        Coord::new(0, 0)
    }

    pub fn bottom_right(&self) -> Coord {
        Coord::new(self.width - 1, self.height - 1)
    }

    /// The neighbor of `coord` one step towards `direction`, if it is inside the grid
    pub fn step(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let next = match direction {
            Direction::North => Coord::new(coord.col, coord.row.checked_sub(1)?),
            Direction::South => Coord::new(coord.col, coord.row + 1),
            Direction::East => Coord::new(coord.col + 1, coord.row),
            Direction::West => Coord::new(coord.col.checked_sub(1)?, coord.row),
        };
        self.contains(next).then_some(next)
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
