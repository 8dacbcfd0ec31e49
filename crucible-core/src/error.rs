//! Error types for parsing and solving

use crate::grid::Coord;
use crate::search::RunBounds;
use thiserror::Error;

/// Error type for malformed puzzle input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A line is wider or narrower than the first line
    #[error("Invalid format: line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A cell is not a decimal digit
    #[error("Invalid format: {found:?} at line {line}, column {column} is not a digit")]
    InvalidDigit {
        line: usize,
        column: usize,
        found: char,
    },
    /// An empty line sits among grid lines
    #[error("Invalid format: line {line} is blank")]
    BlankLine { line: usize },
    /// No grid lines were given
    #[error("Missing data: input contains no grid lines")]
    Empty,
}

/// Error type for the constrained shortest-path search
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The frontier ran dry before a legal stop at the end cell
    #[error("No path found from {start} to {end} with run bounds {bounds}")]
    NoPathFound {
        start: Coord,
        end: Coord,
        bounds: RunBounds,
    },
    /// Start or end lies outside the grid
    #[error("Coordinate {0} lies outside the grid")]
    OutOfBounds(Coord),
    /// Run bounds must satisfy `1 <= min <= max`
    #[error("Invalid run bounds: min {min}, max {max}")]
    InvalidBounds { min: u8, max: u8 },
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds PARTS)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The search for this part failed
    #[error("Search failed: {0}")]
    Search(#[from] SearchError),
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}
