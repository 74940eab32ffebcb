//! Concurrent rat-in-a-maze solver.
//!
//! Explores an N×N grid from a start cell to a goal cell by recursive
//! backtracking restricted to down and right moves. At each fork both
//! candidate moves are dispatched to a bounded worker pool when it has
//! capacity; the first branch to reach the goal sets a shared flag and
//! every other branch unwinds cooperatively. Cell-visit and outcome
//! events stream to a [`report::PathReporter`] collaborator.

pub mod error;
pub mod grid;
pub mod report;
pub mod search;

pub use error::MazeError;
pub use grid::{Cell, Coord, Grid, Move, VisitedSet};
pub use report::{ColorTag, NullReporter, PathReporter};
pub use search::{solve, SolveConfig, SolveReport, SolveStatistics};
