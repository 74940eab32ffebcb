//! Search report and statistics.

use crate::grid::Coord;
use crate::search::shared::RunCounters;
use std::sync::atomic::Ordering;
use std::time::Duration;

/// Result of one search run.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Whether any branch reached the goal.
    pub found: bool,
    /// Cells still marked at termination, row-major. On success this is
    /// the surviving path (the goal cell itself is never marked; it is
    /// reported through `on_final`). After a failed run it is empty —
    /// every claim was backtracked.
    pub path_cells: Vec<Coord>,
    /// Statistics from the run.
    pub statistics: SolveStatistics,
}

/// Statistics from one search run.
#[derive(Debug, Clone, Default)]
pub struct SolveStatistics {
    /// Cells claimed by some branch (including claims later backtracked).
    pub cells_visited: u64,
    /// Claims abandoned after every onward branch failed.
    pub backtracks: u64,
    /// Sibling pairs dispatched to the pool.
    pub parallel_dispatches: u64,
    /// Sibling pairs explored inline because the pool was saturated.
    pub inline_fallbacks: u64,
    /// Wall-clock time for the whole run.
    pub elapsed: Duration,
}

impl SolveStatistics {
    pub(crate) fn collect(counters: &RunCounters, elapsed: Duration) -> Self {
        Self {
            cells_visited: counters.visits.load(Ordering::Relaxed),
            backtracks: counters.backtracks.load(Ordering::Relaxed),
            parallel_dispatches: counters.parallel_dispatches.load(Ordering::Relaxed),
            inline_fallbacks: counters.inline_fallbacks.load(Ordering::Relaxed),
            elapsed,
        }
    }

    /// Fraction of sibling pairs that went to the pool (0.0 to 1.0).
    pub fn parallel_ratio(&self) -> f64 {
        let total = self.parallel_dispatches + self.inline_fallbacks;
        if total == 0 {
            0.0
        } else {
            self.parallel_dispatches as f64 / total as f64
        }
    }

    /// Format statistics as a human-readable string.
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed));
        s.push_str(&format!("Cells visited: {}\n", self.cells_visited));
        s.push_str(&format!("Backtracks: {}\n", self.backtracks));
        s.push_str(&format!(
            "Parallel dispatches: {}\n",
            self.parallel_dispatches
        ));
        s.push_str(&format!("Inline fallbacks: {}\n", self.inline_fallbacks));
        if self.parallel_dispatches + self.inline_fallbacks > 0 {
            s.push_str(&format!(
                "Parallel ratio: {:.0}%\n",
                self.parallel_ratio() * 100.0
            ));
        }
        s
    }
}
