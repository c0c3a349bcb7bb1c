//! Error types for grid construction and path queries.
//!
//! An unreachable goal is not an error: searches report it as `Ok(None)`.

use core::fmt;

use crate::cell::Cell;

/// Problems with the obstacle table handed to [ObstacleGrid](crate::ObstacleGrid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows or no columns.
    EmptyGrid,
    /// A row has a different length than the first one.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A table value is neither passable (`0`) nor blocked (`1`).
    InvalidValue { row: usize, col: usize, value: u8 },
    /// A character is neither passable (`0`, `.`) nor blocked (`1`, `#`).
    InvalidCell { row: usize, col: usize, value: char },
    /// A blocked cell lies outside the grid dimensions.
    CellOutOfBounds { cell: Cell, rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, found, expected
            ),
            Self::InvalidValue { row, col, value } => {
                write!(f, "invalid cell value {} at ({}, {})", value, row, col)
            }
            Self::InvalidCell { row, col, value } => {
                write!(f, "invalid cell value {:?} at ({}, {})", value, row, col)
            }
            Self::CellOutOfBounds { cell, rows, cols } => {
                write!(f, "cell {} lies outside a {}x{} grid", cell, rows, cols)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Contract violations and aborted searches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// Start or goal is not addressable on the grid.
    OutOfBounds { cell: Cell, rows: usize, cols: usize },
    /// The expansion bound was reached before the search finished.
    ExpansionLimit { limit: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { cell, rows, cols } => {
                write!(f, "cell {} lies outside a {}x{} grid", cell, rows, cols)
            }
            Self::ExpansionLimit { limit } => {
                write!(f, "search stopped after {} expansions", limit)
            }
        }
    }
}

impl std::error::Error for SearchError {}
