//! Parse / per-part solve traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into shared data
///
/// The shared data is read-only once parsed, so a single parse can serve
/// several parts, including parts solved concurrently on different threads.
///
/// # Example
///
/// ```
/// use crucible_core::{AocParser, ClumsyCrucible};
///
/// let grid = ClumsyCrucible::parse("123\n456").unwrap();
/// assert_eq!(grid.width(), 3);
/// ```
pub trait AocParser {
    /// The parsed form of the input
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Trait for solving a specific part of a puzzle.
///
/// The const generic `N` is the part number (1, 2, etc.).
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part of the puzzle.
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError)` - An error occurred while solving
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Dispatch from a runtime part number to the matching [`PartSolver`]
///
/// # Example
///
/// ```
/// use crucible_core::{AocParser, ClumsyCrucible, Solver};
///
/// let grid = ClumsyCrucible::parse("11\n11").unwrap();
/// assert_eq!(ClumsyCrucible::solve_part(&grid, 1).unwrap(), "2");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::Search)` - The search for this part failed
    fn solve_part(shared: &Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    fn solve_part_checked_range(
        shared: &Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
