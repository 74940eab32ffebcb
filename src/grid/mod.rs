//! Grid model: the immutable passability matrix and the visited overlay.
//!
//! A `Grid` is fixed for the lifetime of a search and safe to read from any
//! number of branches concurrently. The `VisitedSet` is the only mutable
//! search state; all mark/unmark traffic goes through the shared lock owned
//! by the engine.

use crate::error::MazeError;
use std::fmt;

/// State of a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Open,
    Blocked,
}

/// A cell coordinate. `x` is the row index (moving down increases `x`),
/// `y` is the column index (moving right increases `y`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The neighbor reached by taking `mv` from this cell.
    pub fn step(self, mv: Move) -> Coord {
        match mv {
            Move::Down => Coord::new(self.x + 1, self.y),
            Move::Right => Coord::new(self.x, self.y + 1),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A candidate move direction. The engine only ever moves down or right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Down,
    Right,
}

/// N×N matrix of open/blocked cells, row-major.
///
/// Reads are pure: out-of-range coordinates answer `false` from `is_open`
/// and `in_bounds` rather than faulting.
#[derive(Debug, Clone)]
pub struct Grid {
    n: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from rows of cells. Rejects empty and non-square input.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, MazeError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(MazeError::InvalidDimension);
        }
        let width = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MazeError::RaggedRow {
                    line: i + 1,
                    expected: width,
                    found: row.len(),
                });
            }
        }
        if rows.len() != width {
            return Err(MazeError::NotSquare {
                rows: rows.len(),
                cols: width,
            });
        }
        Ok(Self {
            n: width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Parse a maze from text, one row per line.
    ///
    /// Recognized cells: `1`, `.`, `S`, `E` are open; `0`, `#` are blocked.
    /// Blank lines are skipped so trailing newlines are harmless.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let mut rows = Vec::new();
        for (line_idx, line) in text.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            let mut row = Vec::with_capacity(line.len());
            for (col_idx, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '1' | '.' | 'S' | 's' | 'E' | 'e' => Cell::Open,
                    '0' | '#' => Cell::Blocked,
                    _ => {
                        return Err(MazeError::BadCell {
                            line: line_idx + 1,
                            col: col_idx + 1,
                            ch,
                        })
                    }
                };
                row.push(cell);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// An all-open N×N grid.
    pub fn open(n: usize) -> Result<Self, MazeError> {
        if n == 0 {
            return Err(MazeError::InvalidDimension);
        }
        Ok(Self {
            n,
            cells: vec![Cell::Open; n * n],
        })
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn in_bounds(&self, cell: Coord) -> bool {
        cell.x < self.n && cell.y < self.n
    }

    /// Whether the cell is passable. Out-of-range coordinates are not.
    pub fn is_open(&self, cell: Coord) -> bool {
        self.in_bounds(cell) && self.cells[cell.x * self.n + cell.y] == Cell::Open
    }

    /// Force a cell open. The maze author owns the endpoints: start and
    /// goal are always passable regardless of what the stored maze says,
    /// and the engine never special-cases them.
    pub fn force_open(&mut self, cell: Coord) {
        if self.in_bounds(cell) {
            self.cells[cell.x * self.n + cell.y] = Cell::Open;
        }
    }
}

/// N×N boolean overlay marking cells currently owned by a branch.
///
/// A mark means some in-progress or completed branch owns the cell; the
/// mark is cleared when that branch abandons the cell without success.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    n: usize,
    marks: Vec<bool>,
}

impl VisitedSet {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            marks: vec![false; n * n],
        }
    }

    pub fn is_marked(&self, cell: Coord) -> bool {
        cell.x < self.n && cell.y < self.n && self.marks[cell.x * self.n + cell.y]
    }

    pub fn mark(&mut self, cell: Coord) {
        self.marks[cell.x * self.n + cell.y] = true;
    }

    pub fn unmark(&mut self, cell: Coord) {
        self.marks[cell.x * self.n + cell.y] = false;
    }

    /// All currently marked cells in row-major order.
    pub fn marked_cells(&self) -> Vec<Coord> {
        let mut cells = Vec::new();
        for x in 0..self.n {
            for y in 0..self.n {
                if self.marks[x * self.n + y] {
                    cells.push(Coord::new(x, y));
                }
            }
        }
        cells
    }

    pub fn is_clear(&self) -> bool {
        self.marks.iter().all(|m| !m)
    }
}
