//! Recursive, cancellable, concurrency-bounded backtracking search.
//!
//! Each branch explores one cell:
//! 1. Bail out if some branch already won (cooperative cancellation)
//! 2. Goal check — before validity, so the goal is always reportable
//! 3. Optimistic validity read (bounds, passability, unvisited)
//! 4. Double-checked claim under the visited lock, visit event, and a
//!    snapshot of which of the two onward neighbors are worth exploring
//! 5. Both neighbors viable → fan out through the pool if it has
//!    capacity, otherwise recurse inline in order; one viable → recurse
//! 6. Nothing succeeded → unmark the cell (backtrack) and fail upward
//!
//! The only critical sections are the claim/unmark (visited lock) and the
//! solution-flag transition (compare-exchange). The grid itself is
//! read-only and never locked.

use crate::grid::{Coord, Grid, Move, VisitedSet};
use crate::report::{ColorTag, PathReporter};
use crate::search::config::SolveConfig;
use crate::search::pool::WorkerPool;
use crate::search::result::{SolveReport, SolveStatistics};
use crate::search::shared::SearchShared;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Everything a branch needs, shared across the run.
struct SearchContext {
    grid: Grid,
    goal: Coord,
    moves: [Move; 2],
    shared: SearchShared,
    pool: WorkerPool,
    reporter: Arc<dyn PathReporter>,
}

impl SearchContext {
    /// Viable onward target given the current overlay: in bounds, open,
    /// and not claimed by any branch.
    fn is_free(&self, visited: &VisitedSet, cell: Coord) -> bool {
        self.grid.is_open(cell) && !visited.is_marked(cell)
    }
}

/// Run one search over `grid` from `start` to `goal`.
///
/// One run per maze: a fresh visited overlay and worker pool are created
/// here, so overlapping runs never share state. The caller is responsible
/// for the endpoints being open (`Grid::force_open`); the engine does not
/// special-case them. Exactly one `on_outcome` is emitted per run, and
/// when the run returns no branch is still in flight.
pub fn solve(
    grid: Grid,
    start: Coord,
    goal: Coord,
    config: &SolveConfig,
    reporter: Arc<dyn PathReporter>,
) -> SolveReport {
    let started = Instant::now();
    let n = grid.size();
    let ctx = Arc::new(SearchContext {
        grid,
        goal,
        moves: config.moves,
        shared: SearchShared::new(n),
        pool: WorkerPool::new(config.workers),
        reporter,
    });

    debug!(size = n, workers = ctx.pool.limit(), %start, %goal, "starting search");

    // The root branch occupies a pool slot like any other branch.
    let root = ctx.pool.dispatch(branch_job(&ctx, start));
    let direct = root.join();

    // A sibling may reach the goal without its success propagating back
    // through an already-failed ancestor's return value; the flag, read
    // after every branch has been joined, is the authority.
    let found = direct || ctx.shared.solution_found();
    ctx.reporter.on_outcome(found);
    ctx.pool.retire();

    let report = SolveReport {
        found,
        path_cells: ctx.shared.visited().marked_cells(),
        statistics: SolveStatistics::collect(&ctx.shared.counters, started.elapsed()),
    };
    info!(
        found,
        visits = report.statistics.cells_visited,
        elapsed = ?report.statistics.elapsed,
        "search finished"
    );
    report
}

/// Explore one cell. Returns true iff this branch (or one it spawned)
/// reached the goal.
fn explore(ctx: &Arc<SearchContext>, cell: Coord, color: ColorTag) -> bool {
    // Cooperative cancellation: branches already descending unwind here
    // on their next call.
    if ctx.shared.solution_found() {
        return false;
    }

    // Goal before validity: the goal must be reportable even if a sibling
    // already holds it marked.
    if cell == ctx.goal {
        if ctx.shared.mark_solved() {
            ctx.reporter.on_final(cell);
        }
        return true;
    }

    // Optimistic read; ownership is decided under the lock below.
    if !ctx.is_free(&ctx.shared.visited(), cell) {
        return false;
    }

    let first = cell.step(ctx.moves[0]);
    let second = cell.step(ctx.moves[1]);

    let (first_free, second_free) = {
        let mut visited = ctx.shared.visited();
        // Another branch may have claimed the cell between the read above
        // and this lock.
        if visited.is_marked(cell) {
            return false;
        }
        visited.mark(cell);
        ctx.shared.counters.record_visit();
        ctx.reporter.on_visit(cell, color);
        // Snapshot neighbor viability under the same guard; by the time
        // the branch acts on it, other claims only cost wasted work.
        (
            ctx.is_free(&visited, first),
            ctx.is_free(&visited, second),
        )
    };

    let succeeded = match (first_free, second_free) {
        (true, true) => explore_pair(ctx, first, second, color),
        (true, false) => explore(ctx, first, color),
        (false, true) => explore(ctx, second, color),
        (false, false) => false,
    };

    if succeeded {
        return true;
    }

    // Dead end: release the cell for other branches and fail upward.
    ctx.shared.visited().unmark(cell);
    ctx.shared.counters.record_backtrack();
    ctx.reporter.on_backtrack(cell);
    false
}

/// Explore both onward neighbors: through the pool when it has capacity,
/// inline in order otherwise.
fn explore_pair(ctx: &Arc<SearchContext>, first: Coord, second: Coord, color: ColorTag) -> bool {
    match ctx.pool.try_dispatch(branch_job(ctx, first)) {
        Some(first_handle) => {
            // Siblings travel together: once the first is in flight the
            // second goes to the pool as well.
            let second_handle = ctx.pool.dispatch(branch_job(ctx, second));
            ctx.shared.counters.record_parallel();

            if first_handle.join() {
                // Short-circuit on the first success, but still drain the
                // sibling so no branch outlives the run; it unwinds
                // promptly once it observes the flag.
                let _ = second_handle.join();
                true
            } else {
                second_handle.join()
            }
        }
        None => {
            ctx.shared.counters.record_inline();
            debug!(%first, %second, "pool saturated, exploring inline");
            explore(ctx, first, color) || explore(ctx, second, color)
        }
    }
}

/// Package a pool task for `target`. The tag is allocated by the
/// dispatcher at creation time, not inside the task.
fn branch_job(
    ctx: &Arc<SearchContext>,
    target: Coord,
) -> impl FnOnce() -> bool + Send + 'static {
    let ctx = Arc::clone(ctx);
    let color = ctx.shared.next_color();
    move || explore(&ctx, target, color)
}
