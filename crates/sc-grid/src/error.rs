//! Grid-subsystem error type.

use thiserror::Error;

use sc_core::CellCoord;

/// Errors produced by `sc-grid`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// No traversable path exists between the two cells.  A first-class
    /// outcome, not an exception: route caching records it as "no feasible
    /// route" and never falls back to coordinate distance.
    #[error("no traversable path from {from} to {to}")]
    PathNotFound { from: CellCoord, to: CellCoord },

    #[error("cell {0} is outside the {1}x{2} grid")]
    OutOfBounds(CellCoord, u32, u32),

    #[error("cell {0} is blocked")]
    Blocked(CellCoord),
}

pub type GridResult<T> = Result<T, GridError>;
