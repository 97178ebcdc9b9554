//! Grid construction and query errors.

use thiserror::Error;

/// Caller contract violations on the grid surface.
///
/// These are precondition failures, not recoverable runtime conditions:
/// the right response is to fix the calling code, not to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid was requested with a zero dimension.
    #[error("Grid dimensions must be positive (got {rows}x{cols})")]
    ZeroDimension { rows: usize, cols: usize },

    /// A coordinate fell outside `[0, rows) x [0, cols)`.
    #[error("Position ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Errors in the string patterns accepted by `Life::from_rows` and the
/// `life_grid!` macro.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Pattern must have at least one row and one column")]
    Empty,

    #[error("Row {row} is {found} symbols wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unknown symbol {symbol:?} at ({row}, {col}); the seed alphabet is '.' (dead) and '*' (live)")]
    UnknownSymbol { row: usize, col: usize, symbol: char },
}
