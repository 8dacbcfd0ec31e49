//! Parsed input held once and solved part by part, with timing

use crate::error::{ParseError, SolveError};
use crate::solver::SolverExt;
use chrono::{TimeDelta, Utc};
use std::ops::RangeInclusive;

/// Runs `f` and measures it against the UTC clock
fn timed<T>(f: impl FnOnce() -> T) -> (T, TimeDelta) {
    let started = Utc::now();
    let value = f();
    (value, Utc::now() - started)
}

/// Outcome of one part, timed whether or not it succeeded
#[derive(Debug)]
pub struct SolveResult {
    pub part: u8,
    pub answer: Result<String, SolveError>,
    pub elapsed: TimeDelta,
}

/// A parsed input ready to be solved for any of its parts
pub struct SolverInstance<'a, S: SolverExt> {
    shared: S::SharedData<'a>,
    parse_time: TimeDelta,
}

impl<'a, S: SolverExt> SolverInstance<'a, S> {
    /// Parse `input`, recording how long it took
    pub fn new(input: &'a str) -> Result<Self, ParseError> {
        let (shared, parse_time) = timed(|| S::parse(input));
        Ok(Self {
            shared: shared?,
            parse_time,
        })
    }
}

/// Object-safe view of a [`SolverInstance`]
///
/// Solving borrows the instance immutably, so threads working on different
/// parts can hold the same instance.
///
/// # Example
///
/// ```
/// use crucible_core::{ClumsyCrucible, DynSolver, SolveError, SolverInstance};
///
/// let solver = SolverInstance::<ClumsyCrucible>::new("11\n11").unwrap();
/// assert_eq!(solver.parts(), 1..=2);
/// assert_eq!(solver.solve(1).answer.ok().as_deref(), Some("2"));
/// assert!(matches!(solver.solve(3).answer, Err(SolveError::PartOutOfRange(3))));
/// ```
pub trait DynSolver: Sync {
    /// Solve `part`; out-of-range parts come back as an error answer
    fn solve(&self, part: u8) -> SolveResult;

    /// Parts this solver answers
    fn parts(&self) -> RangeInclusive<u8>;

    fn parse_time(&self) -> TimeDelta;
}

impl<'a, S> DynSolver for SolverInstance<'a, S>
where
    S: SolverExt,
    S::SharedData<'a>: Sync,
{
    fn solve(&self, part: u8) -> SolveResult {
        let (answer, elapsed) = timed(|| S::solve_part_checked_range(&self.shared, part));
        SolveResult {
            part,
            answer,
            elapsed,
        }
    }

    fn parts(&self) -> RangeInclusive<u8> {
        1..=S::PARTS
    }

    fn parse_time(&self) -> TimeDelta {
        self.parse_time
    }
}
