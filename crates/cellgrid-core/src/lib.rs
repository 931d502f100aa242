//! # cellgrid-core
//!
//! Sparse, growable two-dimensional cell storage for spreadsheet documents.
//!
//! This crate provides:
//! - [`CellStore`] - Records addressed by (row, column), with occupancy
//!   counters, used-extent bounds and deletion tracking
//! - [`SheetPoint`] and [`SheetRange`] - 1-based coordinates and rectangles
//! - [`CellRecord`] - The one capability the store needs from a record
//! - [`CellStoreOptions`] - Initial capacities and addressable bounds
//!
//! ## Example
//!
//! ```rust
//! use cellgrid_core::{CellStore, SheetPoint, SheetRange};
//!
//! let mut store = CellStore::new();
//! store.add(SheetPoint::new(1, 1), "Hello").unwrap();
//! store.add(SheetPoint::parse("C2").unwrap(), "World").unwrap();
//!
//! assert_eq!(store.count(), 2);
//! assert_eq!(store.max_row_used(), 2);
//!
//! let words: Vec<_> = store
//!     .cells(SheetRange::parse("A1:C2").unwrap())
//!     .copied()
//!     .collect();
//! assert_eq!(words, ["Hello", "World"]);
//!
//! store.remove(SheetPoint::new(1, 1)).unwrap();
//! assert!(store.deleted().contains(&SheetPoint::new(1, 1)));
//! ```

pub mod error;
pub mod options;
pub mod point;
pub mod record;
pub mod store;

// Re-exports for convenience
pub use error::{Error, Result};
pub use options::CellStoreOptions;
pub use point::{RangePoints, SheetPoint, SheetRange};
pub use record::CellRecord;
pub use store::{CellStore, Cells};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;

/// Row capacity of a freshly created or cleared store
pub const INITIAL_ROW_CAPACITY: u32 = 10_000;

/// Column capacity of a freshly created or cleared store
pub const INITIAL_COLUMN_CAPACITY: u32 = 50;
