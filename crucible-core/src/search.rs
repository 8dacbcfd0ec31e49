//! Constrained shortest-path search
//!
//! Finds the minimum heat loss route for a crucible that must travel at least
//! `min` and at most `max` blocks in a straight line before turning, and may
//! only stop at the destination after at least `min` straight blocks.
//!
//! The search runs Dijkstra over [`SearchState`]s: two routes reaching the same
//! cell heading the same way with the same run-length have identical futures,
//! so the distance table is keyed by the full state rather than by cell.

use crate::direction::Direction;
use crate::error::SearchError;
use crate::grid::{Coord, Grid};
use log::{debug, trace};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;

/// Inclusive bounds on the number of consecutive straight moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunBounds {
    min: u8,
    max: u8,
}

impl RunBounds {
    /// Ordinary crucible: at most three blocks straight
    pub const SHORT_HOPS: RunBounds = RunBounds { min: 1, max: 3 };
    /// Ultra crucible: four to ten blocks straight
    pub const LONG_HAULS: RunBounds = RunBounds { min: 4, max: 10 };

    /// Create bounds, requiring `1 <= min <= max`
    pub fn new(min: u8, max: u8) -> Result<Self, SearchError> {
        if min == 0 || max < min {
            return Err(SearchError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// Whether a crucible with this run-length may turn or stop
    pub fn is_satisfied_by(&self, run: u8) -> bool {
        run >= self.min
    }
}

impl fmt::Display for RunBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// Node identity in the search graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchState {
    pub coord: Coord,
    /// Direction of the last move
    pub direction: Direction,
    /// Consecutive moves already taken in `direction`
    pub run: u8,
}

/// Run-length after moving towards `to` from a state heading `from` with `run`
///
/// Returns `None` when the move is illegal: reversing, going straight past
/// `bounds.max()`, or turning before `bounds.min()` is reached.
pub fn next_run(from: Direction, run: u8, to: Direction, bounds: RunBounds) -> Option<u8> {
    if to == from.inverse() {
        None
    } else if to == from {
        (run < bounds.max).then(|| run + 1)
    } else {
        bounds.is_satisfied_by(run).then_some(1)
    }
}

/// Minimum total heat loss from `start` to `end`
///
/// The start cell is never charged; every other cell costs its value on entry.
/// `start == end` costs nothing and needs no moves.
///
/// # Errors
/// * `SearchError::OutOfBounds` - `start` or `end` is outside the grid
/// * `SearchError::NoPathFound` - no route ends at `end` with a run of at least `bounds.min()`
pub fn solve(grid: &Grid, start: Coord, end: Coord, bounds: RunBounds) -> Result<u32, SearchError> {
    trace!("solve: start={} end={} bounds={}", start, end, bounds);

    for coord in [start, end] {
        if !grid.contains(coord) {
            return Err(SearchError::OutOfBounds(coord));
        }
    }
    if start == end {
        return Ok(0);
    }

    let mut frontier = BinaryHeap::new();
    let mut best: HashMap<SearchState, u32> = HashMap::new();

    // The first move counts as one step already taken in its direction
    for direction in Direction::ALL {
        let seed = SearchState {
            coord: start,
            direction,
            run: 1,
        };
        best.insert(seed, 0);
        frontier.push(Reverse((0u32, seed)));
    }

    let mut settled = 0usize;

    while let Some(Reverse((cost, state))) = frontier.pop() {
        if best.get(&state).is_some_and(|&known| cost > known) {
            continue;
        }
        settled += 1;

        if state.coord == end && bounds.is_satisfied_by(state.run) {
            debug!(
                "solve: reached {} with heat loss {} after settling {} states",
                end, cost, settled
            );
            return Ok(cost);
        }

        for direction in Direction::ALL {
            let Some(run) = next_run(state.direction, state.run, direction, bounds) else {
                continue;
            };
            let Some(coord) = grid.step(state.coord, direction) else {
                continue;
            };
            let Some(heat) = grid.get(coord) else {
                continue;
            };

            let next = SearchState {
                coord,
                direction,
                run,
            };
            let candidate = cost + u32::from(heat);
            if best.get(&next).is_none_or(|&known| candidate < known) {
                best.insert(next, candidate);
                frontier.push(Reverse((candidate, next)));
            }
        }
    }

    debug!(
        "solve: no path to {} with bounds {} after settling {} states",
        end, bounds, settled
    );
    Err(SearchError::NoPathFound { start, end, bounds })
}
