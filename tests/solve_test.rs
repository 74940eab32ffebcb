//! Scenario and property tests for the search engine.

mod common;

use common::{grid_from, RecordingReporter};
use rat_maze::grid::{Coord, Grid, Move};
use rat_maze::search::{solve, SolveConfig};
use rat_maze::MazeError;
use std::sync::Arc;

/// One worker slot: the root claims it, so every fork recurses inline and
/// the exploration order is fully deterministic.
fn sequential() -> SolveConfig {
    SolveConfig::default().with_workers(1)
}

#[test]
fn test_single_cell_maze_trivially_solved() {
    let reporter = Arc::new(RecordingReporter::default());
    let report = solve(
        Grid::open(1).unwrap(),
        Coord::new(0, 0),
        Coord::new(0, 0),
        &sequential(),
        reporter.clone(),
    );

    assert!(report.found);
    // Start == goal succeeds via the goal check alone: zero visits.
    assert!(reporter.visits().is_empty());
    assert_eq!(reporter.finals(), vec![Coord::new(0, 0)]);
    assert_eq!(reporter.outcome_count(), 1);
    assert!(reporter.last_outcome());
    assert!(report.path_cells.is_empty());
}

#[test]
fn test_fully_open_3x3_solved() {
    let reporter = Arc::new(RecordingReporter::default());
    let report = solve(
        Grid::open(3).unwrap(),
        Coord::new(0, 0),
        Coord::new(2, 2),
        &SolveConfig::default(),
        reporter.clone(),
    );

    assert!(report.found);
    assert_eq!(reporter.finals(), vec![Coord::new(2, 2)]);
    assert_eq!(reporter.outcome_count(), 1);
    assert_eq!(reporter.double_claims(), 0);
}

#[test]
fn test_walled_in_start_has_no_solution() {
    // Both neighbors of the start are blocked; the goal stays unreachable
    // through down/right moves alone.
    let grid = grid_from(&["101", "011", "111"]);
    let reporter = Arc::new(RecordingReporter::default());
    let report = solve(
        grid,
        Coord::new(0, 0),
        Coord::new(2, 2),
        &SolveConfig::default(),
        reporter.clone(),
    );

    assert!(!report.found);
    assert_eq!(reporter.outcome_count(), 1);
    assert!(!reporter.last_outcome());
    assert!(reporter.finals().is_empty());
    // Full backtracking: the overlay is all-false again.
    assert!(report.path_cells.is_empty());
}

#[test]
fn test_l_corridor_marks_exact_path() {
    let grid = grid_from(&["10000", "10000", "10000", "10000", "11111"]);
    let report = solve(
        grid,
        Coord::new(0, 0),
        Coord::new(4, 4),
        &SolveConfig::default(),
        Arc::new(RecordingReporter::default()),
    );

    assert!(report.found);
    // The surviving marks are exactly the corridor; the goal cell is
    // reported via on_final and never marked.
    let expected: Vec<Coord> = vec![
        Coord::new(0, 0),
        Coord::new(1, 0),
        Coord::new(2, 0),
        Coord::new(3, 0),
        Coord::new(4, 0),
        Coord::new(4, 1),
        Coord::new(4, 2),
        Coord::new(4, 3),
    ];
    assert_eq!(report.path_cells, expected);
}

#[test]
fn test_dead_ends_fully_backtracked() {
    // A corridor that advances a few cells and then dead-ends: the run
    // must fail and leave no marks behind.
    let grid = grid_from(&["1110", "0010", "0010", "0001"]);
    let reporter = Arc::new(RecordingReporter::default());
    let report = solve(
        grid,
        Coord::new(0, 0),
        Coord::new(3, 3),
        &SolveConfig::default(),
        reporter.clone(),
    );

    assert!(!report.found);
    assert!(report.path_cells.is_empty());
    assert!(report.statistics.cells_visited > 0, "must have explored");
    assert_eq!(
        report.statistics.cells_visited, report.statistics.backtracks,
        "every claim must be backtracked on a failed run"
    );
    assert_eq!(reporter.double_claims(), 0);
}

#[test]
fn test_sequential_exploration_is_down_first() {
    let reporter = Arc::new(RecordingReporter::default());
    let report = solve(
        Grid::open(2).unwrap(),
        Coord::new(0, 0),
        Coord::new(1, 1),
        &sequential(),
        reporter.clone(),
    );

    assert!(report.found);
    assert_eq!(
        reporter.visited_cells(),
        vec![Coord::new(0, 0), Coord::new(1, 0)],
        "down must be explored before right"
    );
    assert_eq!(reporter.finals(), vec![Coord::new(1, 1)]);
}

#[test]
fn test_exploration_order_is_configurable() {
    let reporter = Arc::new(RecordingReporter::default());
    let config = sequential().with_moves([Move::Right, Move::Down]);
    let report = solve(
        Grid::open(2).unwrap(),
        Coord::new(0, 0),
        Coord::new(1, 1),
        &config,
        reporter.clone(),
    );

    assert!(report.found);
    assert_eq!(
        reporter.visited_cells(),
        vec![Coord::new(0, 0), Coord::new(0, 1)],
        "right-down order must explore right first"
    );
}

#[test]
fn test_sequential_branch_reuses_color() {
    let reporter = Arc::new(RecordingReporter::default());
    solve(
        Grid::open(3).unwrap(),
        Coord::new(0, 0),
        Coord::new(2, 2),
        &sequential(),
        reporter.clone(),
    );

    let visits = reporter.visits();
    assert!(!visits.is_empty());
    let root_color = visits[0].1;
    assert!(
        visits.iter().all(|&(_, color)| color == root_color),
        "inline exploration must keep the dispatching branch's tag"
    );
}

#[test]
fn test_empty_maze_rejected() {
    assert!(matches!(Grid::parse(""), Err(MazeError::InvalidDimension)));
    assert!(matches!(Grid::open(0), Err(MazeError::InvalidDimension)));
}

#[test]
fn test_author_owns_endpoints() {
    // A maze whose stored start/goal are blocked is still solvable once
    // the author-side contract (endpoints forced open) is applied.
    let mut grid = grid_from(&["01", "10"]);
    grid.force_open(Coord::new(0, 0));
    grid.force_open(Coord::new(1, 1));
    let report = solve(
        grid,
        Coord::new(0, 0),
        Coord::new(1, 1),
        &sequential(),
        Arc::new(RecordingReporter::default()),
    );
    // (0,0) -> down (1,0) open -> right (1,1) goal.
    assert!(report.found);
}
