//! Error types for rat-maze.
//!
//! Everything here is rejected before a search starts. The search engine
//! itself has no fatal conditions: cooperative cancellation and falling
//! back to inline exploration when the pool is saturated are normal
//! control paths, and "no solution exists" is an outcome, not an error.

use thiserror::Error;

/// Errors produced while reading or constructing a maze.
#[derive(Error, Debug)]
pub enum MazeError {
    /// The maze has no cells at all.
    #[error("maze must have at least one row and one column")]
    InvalidDimension,

    /// The maze has a different number of rows and columns.
    #[error("maze must be square: found {rows} rows of {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    /// A row differs in length from the first row.
    #[error("line {line}: expected {expected} cells, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A cell character outside the recognized alphabet.
    #[error("line {line}, column {col}: unrecognized cell character {ch:?}")]
    BadCell { line: usize, col: usize, ch: char },

    /// I/O errors (reading a maze file, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
