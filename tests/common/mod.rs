//! Shared test support: recording reporter and grid helpers.

#![allow(dead_code)]

use rat_maze::grid::{Coord, Grid};
use rat_maze::report::{ColorTag, PathReporter};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Reporter that records every notification and tracks live cell
/// ownership so tests can assert no cell is ever claimed by two branches
/// at the same instant.
#[derive(Default)]
pub struct RecordingReporter {
    visits: Mutex<Vec<(Coord, ColorTag)>>,
    finals: Mutex<Vec<Coord>>,
    outcomes: AtomicUsize,
    last_outcome: AtomicBool,
    live: Mutex<HashSet<Coord>>,
    double_claims: AtomicUsize,
}

impl RecordingReporter {
    pub fn visits(&self) -> Vec<(Coord, ColorTag)> {
        self.visits.lock().unwrap().clone()
    }

    pub fn visited_cells(&self) -> Vec<Coord> {
        self.visits().into_iter().map(|(cell, _)| cell).collect()
    }

    pub fn finals(&self) -> Vec<Coord> {
        self.finals.lock().unwrap().clone()
    }

    pub fn outcome_count(&self) -> usize {
        self.outcomes.load(Ordering::SeqCst)
    }

    pub fn last_outcome(&self) -> bool {
        self.last_outcome.load(Ordering::SeqCst)
    }

    /// Times a visit arrived for a cell some branch already owned.
    /// Always zero if claims are properly serialized.
    pub fn double_claims(&self) -> usize {
        self.double_claims.load(Ordering::SeqCst)
    }
}

impl PathReporter for RecordingReporter {
    fn on_visit(&self, cell: Coord, color: ColorTag) {
        if !self.live.lock().unwrap().insert(cell) {
            self.double_claims.fetch_add(1, Ordering::SeqCst);
        }
        self.visits.lock().unwrap().push((cell, color));
    }

    fn on_final(&self, cell: Coord) {
        self.finals.lock().unwrap().push(cell);
    }

    fn on_outcome(&self, found: bool) {
        self.outcomes.fetch_add(1, Ordering::SeqCst);
        self.last_outcome.store(found, Ordering::SeqCst);
    }

    fn on_backtrack(&self, cell: Coord) {
        self.live.lock().unwrap().remove(&cell);
    }
}

/// Build a grid from string rows, panicking on malformed input.
pub fn grid_from(rows: &[&str]) -> Grid {
    Grid::parse(&rows.join("\n")).expect("test grid must parse")
}
