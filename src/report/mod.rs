//! Path reporting: the engine's outbound notification interface.
//!
//! The search engine emits cell-visit and outcome events through the
//! `PathReporter` trait and never depends on what the receiver does with
//! them. Rendering, pacing, and any other display concerns live entirely
//! in the implementor.

pub mod console;

use crate::grid::Coord;
use std::fmt;

/// Display names for branch tags, in allocation order.
const PALETTE: [&str; 5] = ["cyan", "magenta", "green", "blue", "orange"];

/// Identity tag assigned to a branch for display purposes.
///
/// Tags are allocated by atomic increment and cycle through a fixed
/// palette, so concurrent branches can be told apart in the event stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorTag(pub usize);

impl ColorTag {
    pub fn name(self) -> &'static str {
        PALETTE[self.0 % PALETTE.len()]
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Receives visit and outcome notifications from the search engine.
///
/// Calls arrive from multiple branch threads; `on_visit` is serialized by
/// the engine's visited lock, the rest may interleave. Implementations
/// must not assume any ordering between sibling branches' events.
pub trait PathReporter: Send + Sync {
    /// A branch claimed `cell` and is exploring onward from it.
    fn on_visit(&self, cell: Coord, color: ColorTag);

    /// A branch reached the goal; emitted once per run.
    fn on_final(&self, cell: Coord);

    /// Terminal outcome of the run; emitted exactly once.
    fn on_outcome(&self, found: bool);

    /// Diagnostic hook: a branch abandoned `cell` with no success.
    /// The default policy ignores backtracks.
    fn on_backtrack(&self, _cell: Coord) {}
}

/// Reporter that discards every notification.
pub struct NullReporter;

impl PathReporter for NullReporter {
    fn on_visit(&self, _cell: Coord, _color: ColorTag) {}
    fn on_final(&self, _cell: Coord) {}
    fn on_outcome(&self, _found: bool) {}
}
