//! The capability a stored record must provide

use crate::point::SheetPoint;

/// A record that knows its own coordinate
///
/// The store never reads or writes anything else on a record. It calls
/// [`set_point`](CellRecord::set_point) only while relocating records during
/// [`CellStore::swap_regions`](crate::CellStore::swap_regions).
pub trait CellRecord {
    /// The coordinate this record believes it lives at
    fn point(&self) -> SheetPoint;

    /// Update the record's back-reference to its coordinate
    fn set_point(&mut self, point: SheetPoint);
}
