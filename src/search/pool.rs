//! Bounded worker pool: execution slots for sibling branch fan-out.
//!
//! Slot model rather than a task queue: a dispatch claims a slot and the
//! branch starts on its own thread immediately, so a parent blocked
//! joining its children can never starve them behind a full queue. The
//! capacity check is deliberately non-atomic with respect to other
//! dispatchers; losing that race only shifts the parallel/sequential
//! split, never correctness — exclusivity over shared search state is the
//! visited lock's job, not the pool's.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Bounded set of execution slots, created fresh for each run.
pub struct WorkerPool {
    limit: usize,
    active: Arc<AtomicUsize>,
    retired: AtomicBool,
}

/// Handle to a dispatched branch.
pub struct BranchHandle {
    handle: JoinHandle<bool>,
}

impl BranchHandle {
    /// Wait for the branch and return its outcome. A branch that dies
    /// mid-flight counts as a failed branch, not a failed run; its
    /// siblings continue unaffected.
    pub fn join(self) -> bool {
        self.handle.join().unwrap_or(false)
    }
}

/// Releases its slot when the branch finishes, panicking or not.
struct Slot {
    active: Arc<AtomicUsize>,
}

impl Slot {
    fn claim(active: &Arc<AtomicUsize>) -> Self {
        active.fetch_add(1, Ordering::SeqCst);
        Self {
            active: Arc::clone(active),
        }
    }
}

impl Drop for Slot {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}

impl WorkerPool {
    /// Create a pool with the given slot limit (clamped to at least 1).
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            active: Arc::new(AtomicUsize::new(0)),
            retired: AtomicBool::new(false),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Branches currently holding a slot. Optimistic: may be stale by the
    /// time the caller acts on it.
    pub fn active_count(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    pub fn has_capacity(&self) -> bool {
        !self.retired.load(Ordering::SeqCst) && self.active_count() < self.limit
    }

    /// Dispatch unconditionally, claiming a slot even past the limit.
    /// Used for the root branch and for the second half of a sibling pair.
    pub fn dispatch<F>(&self, job: F) -> BranchHandle
    where
        F: FnOnce() -> bool + Send + 'static,
    {
        let slot = Slot::claim(&self.active);
        BranchHandle {
            handle: thread::spawn(move || {
                let _slot = slot;
                job()
            }),
        }
    }

    /// Capacity-aware dispatch; `None` tells the caller to run inline.
    pub fn try_dispatch<F>(&self, job: F) -> Option<BranchHandle>
    where
        F: FnOnce() -> bool + Send + 'static,
    {
        if self.has_capacity() {
            Some(self.dispatch(job))
        } else {
            None
        }
    }

    /// Stop accepting new branches. Already-running branches finish
    /// naturally; they observe the solution flag cooperatively.
    pub fn retire(&self) {
        self.retired.store(true, Ordering::SeqCst);
    }
}
