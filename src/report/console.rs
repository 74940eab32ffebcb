//! Channel-backed console reporter.
//!
//! Branch events are pushed onto an unbounded channel so the engine never
//! blocks on rendering; a printer thread drains the channel, writes one
//! line per event, and applies the per-visit pacing delay. The delay is
//! observability pacing only and has no bearing on search correctness.

use crate::grid::Coord;
use crate::report::{ColorTag, PathReporter};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Default per-visit pacing delay.
pub const DEFAULT_VISIT_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
enum ReportEvent {
    Visit { cell: Coord, color: ColorTag },
    Final { cell: Coord },
    Outcome { found: bool },
}

/// Reporter that forwards events to a printer thread.
pub struct ConsoleReporter {
    tx: Sender<ReportEvent>,
}

/// Join handle for the printer thread. Call `finish` after the run, once
/// every reporter clone has been dropped, to flush the remaining events.
pub struct ConsoleHandle {
    handle: JoinHandle<()>,
}

impl ConsoleReporter {
    /// Spawn the printer thread with the given per-visit delay.
    pub fn spawn(delay: Duration) -> (Self, ConsoleHandle) {
        let (tx, rx) = unbounded();
        let handle = thread::spawn(move || print_loop(rx, delay));
        (Self { tx }, ConsoleHandle { handle })
    }
}

impl PathReporter for ConsoleReporter {
    fn on_visit(&self, cell: Coord, color: ColorTag) {
        let _ = self.tx.send(ReportEvent::Visit { cell, color });
    }

    fn on_final(&self, cell: Coord) {
        let _ = self.tx.send(ReportEvent::Final { cell });
    }

    fn on_outcome(&self, found: bool) {
        let _ = self.tx.send(ReportEvent::Outcome { found });
    }
}

impl ConsoleHandle {
    /// Wait for the printer to drain. Returns once all senders are gone.
    pub fn finish(self) {
        let _ = self.handle.join();
    }
}

fn print_loop(rx: Receiver<ReportEvent>, delay: Duration) {
    while let Ok(event) = rx.recv() {
        match event {
            ReportEvent::Visit { cell, color } => {
                println!("visit {cell} [{color}]");
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
            }
            ReportEvent::Final { cell } => {
                println!("goal  {cell}");
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
            }
            ReportEvent::Outcome { found } => {
                if found {
                    println!("outcome: solution found");
                } else {
                    println!("outcome: no solution exists");
                }
            }
        }
    }
}
