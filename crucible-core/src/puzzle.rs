//! Clumsy crucible puzzle: route crucibles from the lava pool to the factory

use crate::error::{ParseError, SolveError};
use crate::grid::Grid;
use crate::search::{self, RunBounds};
use crate::solver::{AocParser, PartSolver, Solver};

/// Minimum heat loss from the top-left to the bottom-right block
///
/// Part 1 moves an ordinary crucible (short hops), part 2 an ultra crucible
/// (long hauls).
pub struct ClumsyCrucible;

impl AocParser for ClumsyCrucible {
    type SharedData<'a> = Grid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse(input)
    }
}

fn corner_to_corner(grid: &Grid, bounds: RunBounds) -> Result<String, SolveError> {
    let heat_loss = search::solve(grid, grid.top_left(), grid.bottom_right(), bounds)?;
    Ok(heat_loss.to_string())
}

impl PartSolver<1> for ClumsyCrucible {
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        corner_to_corner(shared, RunBounds::SHORT_HOPS)
    }
}

impl PartSolver<2> for ClumsyCrucible {
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        corner_to_corner(shared, RunBounds::LONG_HAULS)
    }
}

impl Solver for ClumsyCrucible {
    const PARTS: u8 = 2;

    fn solve_part(shared: &Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => <Self as PartSolver<1>>::solve(shared),
            2 => <Self as PartSolver<2>>::solve(shared),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::samples::SAMPLES;

    #[test]
    fn test_samples() {
        for sample in SAMPLES {
            let grid = ClumsyCrucible::parse(sample.input).unwrap();
            for &(part, expected) in sample.expected {
                let answer = ClumsyCrucible::solve_part(&grid, part).unwrap();
                assert_eq!(answer, expected, "{} part {}", sample.name, part);
            }
        }
    }

    #[test]
    fn test_unknown_part() {
        let grid = ClumsyCrucible::parse("11\n11").unwrap();
        let result = ClumsyCrucible::solve_part(&grid, 3);
        assert!(matches!(result, Err(SolveError::PartNotImplemented(3))));
    }

    #[test]
    fn test_no_path_surfaces_as_search_error() {
        let grid = ClumsyCrucible::parse("11\n11").unwrap();
        let result = <ClumsyCrucible as PartSolver<2>>::solve(&grid);
        assert!(matches!(
            result,
            Err(SolveError::Search(SearchError::NoPathFound { .. }))
        ));
    }
}
