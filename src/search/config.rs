//! Configuration for a search run.

use crate::grid::Move;

/// Tunables for one `solve` run.
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Maximum number of concurrently dispatched branches.
    pub workers: usize,
    /// Exploration order at each cell. The first entry is explored (and,
    /// when both neighbors go to the pool, awaited) first.
    pub moves: [Move; 2],
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            moves: [Move::Down, Move::Right],
        }
    }
}

impl SolveConfig {
    /// Set the branch concurrency limit (clamped to at least 1).
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Set the exploration order. Down-before-right is the reference
    /// behavior; this exists for testability.
    pub fn with_moves(mut self, moves: [Move; 2]) -> Self {
        self.moves = moves;
        self
    }
}
