//! Concurrent backtracking maze search.
//!
//! The engine explores down/right branches recursively, fanning sibling
//! branches out across a bounded worker pool when it has capacity and
//! recursing inline when it does not. The first branch to reach the goal
//! flips a shared flag; every other branch observes it and unwinds.

pub mod config;
pub mod engine;
pub mod pool;
pub mod result;
pub mod shared;

pub use config::SolveConfig;
pub use engine::solve;
pub use pool::{BranchHandle, WorkerPool};
pub use result::{SolveReport, SolveStatistics};
pub use shared::SearchShared;
