//! Error types for cellgrid-core

use thiserror::Error;

use crate::point::SheetPoint;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cellgrid-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Row or column is zero or beyond the store's configured maximum
    #[error("Invalid coordinate: row {row}, column {column}")]
    InvalidCoordinate { row: u32, column: u32 },

    /// Invalid A1-style point or range text
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// No cell is stored at the point
    #[error("No cell at {0}")]
    NotFound(SheetPoint),

    /// The two swap regions differ in shape
    #[error("Region shapes differ: {rows1}x{columns1} vs {rows2}x{columns2}")]
    ShapeMismatch {
        rows1: u32,
        columns1: u32,
        rows2: u32,
        columns2: u32,
    },

    /// The two swap regions share at least one slot
    #[error("Swap regions overlap")]
    OverlappingRegions,

    /// A slot inside a swap region is empty
    #[error("Swap region slot {0} is empty")]
    EmptySlotInSwapRegion(SheetPoint),

    /// Nonsensical store options
    #[error("Invalid store options: {0}")]
    InvalidOptions(String),

    /// Derived bookkeeping disagrees with the stored slots
    #[error("Inconsistent bookkeeping: {0}")]
    Inconsistent(String),
}

impl Error {
    /// Create an invalid-coordinate error
    pub fn invalid_coordinate(row: u32, column: u32) -> Self {
        Error::InvalidCoordinate { row, column }
    }
}
