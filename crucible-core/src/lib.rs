//! Clumsy crucible routing
//!
//! Computes the minimum heat loss for a crucible crossing a city grid when its
//! movement is constrained by how far it may (and must) travel in a straight
//! line before turning.
//!
//! # Overview
//!
//! - [`Grid`]: the parsed heat-loss map
//! - [`search::solve`]: Dijkstra over (cell, direction, run-length) states,
//!   parameterized by [`RunBounds`]
//! - [`ClumsyCrucible`]: the puzzle, with part 1 using
//!   [`RunBounds::SHORT_HOPS`] and part 2 [`RunBounds::LONG_HAULS`]
//! - [`SolverInstance`] / [`DynSolver`]: parse once, solve parts with timing
//!
//! # Quick Example
//!
//! ```
//! use crucible_core::{search, Coord, Grid, RunBounds};
//!
//! let grid: Grid = "1111\n9991\n9991".parse().unwrap();
//! let loss = search::solve(&grid, Coord::new(0, 0), Coord::new(3, 2), RunBounds::SHORT_HOPS);
//! assert_eq!(loss, Ok(5));
//! ```

pub mod direction;
mod error;
pub mod grid;
mod instance;
mod puzzle;
pub mod samples;
pub mod search;
mod solver;

pub use direction::Direction;
pub use error::{ParseError, SearchError, SolveError, SolverError};
pub use grid::{Coord, Grid};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use puzzle::ClumsyCrucible;
pub use search::{RunBounds, SearchState};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};
