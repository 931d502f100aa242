//! Exchanging the contents of two same-shaped regions

use super::CellStore;
use crate::error::{Error, Result};
use crate::point::SheetRange;
use crate::record::CellRecord;

impl<C: CellRecord> CellStore<C> {
    /// Swap the records of two regions position by position
    ///
    /// Both regions must have the same shape, must not overlap, and every
    /// slot in both must be occupied. All of that is checked before anything
    /// moves, so on error the store is untouched. Each moved record has its
    /// back-reference updated to its new point. Occupancy counts do not
    /// change.
    pub fn swap_regions(&mut self, first: SheetRange, second: SheetRange) -> Result<()> {
        if !first.same_shape(&second) {
            return Err(Error::ShapeMismatch {
                rows1: first.row_count(),
                columns1: first.column_count(),
                rows2: second.row_count(),
                columns2: second.column_count(),
            });
        }
        if first.overlaps(&second) {
            return Err(Error::OverlappingRegions);
        }
        if let Some(empty) = first
            .points()
            .chain(second.points())
            .find(|point| !self.contains(*point))
        {
            return Err(Error::EmptySlotInSwapRegion(empty));
        }

        for (a, b) in first.points().zip(second.points()) {
            self.grid.swap(a, b);
            if let Some(cell) = self.grid.get_mut(a.row, a.column) {
                cell.set_point(a);
            }
            if let Some(cell) = self.grid.get_mut(b.row, b.column) {
                cell.set_point(b);
            }
        }

        tracing::trace!(%first, %second, "swapped regions");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::SheetPoint;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct Tagged {
        tag: &'static str,
        at: SheetPoint,
    }

    impl CellRecord for Tagged {
        fn point(&self) -> SheetPoint {
            self.at
        }

        fn set_point(&mut self, point: SheetPoint) {
            self.at = point;
        }
    }

    fn put(store: &mut CellStore<Tagged>, a1: &str, tag: &'static str) {
        let at = SheetPoint::parse(a1).unwrap();
        store.add(at, Tagged { tag, at }).unwrap();
    }

    #[test]
    fn test_swap_single_cells() {
        let mut store = CellStore::new();
        put(&mut store, "A1", "left");
        put(&mut store, "C3", "right");

        store
            .swap_regions(SheetRange::parse("A1").unwrap(), SheetRange::parse("C3").unwrap())
            .unwrap();

        let a1 = store.get(SheetPoint::new(1, 1)).unwrap();
        assert_eq!(a1.tag, "right");
        assert_eq!(a1.point(), SheetPoint::new(1, 1));
        let c3 = store.get(SheetPoint::new(3, 3)).unwrap();
        assert_eq!(c3.tag, "left");
        assert_eq!(c3.point(), SheetPoint::new(3, 3));
        assert_eq!(store.count(), 2);
        store.check_consistency().unwrap();
    }

    #[test]
    fn test_swap_rejects_shape_mismatch() {
        let mut store = CellStore::new();
        put(&mut store, "A1", "a");
        put(&mut store, "B1", "b");
        put(&mut store, "D4", "d");

        let err = store
            .swap_regions(SheetRange::parse("A1:B1").unwrap(), SheetRange::parse("D4").unwrap())
            .unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }

    #[test]
    fn test_swap_rejects_overlap() {
        let mut store = CellStore::new();
        for a1 in ["A1", "B1", "C1"] {
            put(&mut store, a1, "x");
        }

        let err = store
            .swap_regions(SheetRange::parse("A1:B1").unwrap(), SheetRange::parse("B1:C1").unwrap())
            .unwrap_err();
        assert_eq!(err, Error::OverlappingRegions);
    }

    #[test]
    fn test_swap_rejects_empty_slot_without_moving() {
        let mut store = CellStore::new();
        put(&mut store, "A1", "a1");
        put(&mut store, "A2", "a2");
        put(&mut store, "E5", "e5");

        let err = store
            .swap_regions(SheetRange::parse("A1:A2").unwrap(), SheetRange::parse("E5:E6").unwrap())
            .unwrap_err();
        assert_eq!(err, Error::EmptySlotInSwapRegion(SheetPoint::new(6, 5)));

        assert_eq!(store.get(SheetPoint::new(1, 1)).unwrap().tag, "a1");
        assert_eq!(store.get(SheetPoint::new(5, 5)).unwrap().tag, "e5");
    }
}
