//! State shared by every branch of one search run.
//!
//! Two pieces of state need cross-branch coordination: the visited overlay
//! and the solution flag. The overlay lives behind a single mutex; the
//! flag is an atomic whose false→true transition happens at most once per
//! run via compare-exchange, so two branches reaching the goal in the same
//! instant still produce exactly one observable transition.

use crate::grid::VisitedSet;
use crate::report::ColorTag;
use parking_lot::{Mutex, MutexGuard};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

/// Shared state for one run: visited overlay, solution flag, color
/// allocator, and run counters.
pub struct SearchShared {
    visited: Mutex<VisitedSet>,
    solved: AtomicBool,
    next_color: AtomicUsize,
    pub counters: RunCounters,
}

impl SearchShared {
    pub fn new(n: usize) -> Self {
        Self {
            visited: Mutex::new(VisitedSet::new(n)),
            solved: AtomicBool::new(false),
            next_color: AtomicUsize::new(0),
            counters: RunCounters::default(),
        }
    }

    /// Exclusive access to the visited overlay. Mark/unmark and the
    /// neighbor snapshot must all happen under this one guard.
    pub fn visited(&self) -> MutexGuard<'_, VisitedSet> {
        self.visited.lock()
    }

    /// True once any branch has reached the goal. Never reverts within a
    /// run.
    pub fn solution_found(&self) -> bool {
        self.solved.load(Ordering::SeqCst)
    }

    /// Attempt the single false→true flag transition. Returns true for
    /// exactly one caller per run.
    pub fn mark_solved(&self) -> bool {
        self.solved
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Allocate a fresh branch tag. Lock-free; labeling needs no guard.
    pub fn next_color(&self) -> ColorTag {
        ColorTag(self.next_color.fetch_add(1, Ordering::Relaxed))
    }
}

/// Counters bumped as branches run and read once when the run ends.
#[derive(Debug, Default)]
pub struct RunCounters {
    pub visits: AtomicU64,
    pub backtracks: AtomicU64,
    pub parallel_dispatches: AtomicU64,
    pub inline_fallbacks: AtomicU64,
}

impl RunCounters {
    pub fn record_visit(&self) {
        self.visits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_backtrack(&self) {
        self.backtracks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_parallel(&self) {
        self.parallel_dispatches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_inline(&self) {
        self.inline_fallbacks.fetch_add(1, Ordering::Relaxed);
    }
}
