//! Backing storage for [`CellStore`](super::CellStore)
//!
//! A dense array addressed by (row, column), paged by row: the outer vector
//! holds one optional page per row index, and a page is a boxed slice with one
//! slot per column index. Pages are allocated when a row first receives a
//! cell, so far-apart rows cost one pointer each until they are used.
//!
//! Index 0 of either dimension is never written; the arrays are sized
//! `capacity + 1` so that every 1-based index up to the capacity is valid.

use crate::point::SheetPoint;

type Page<C> = Box<[Option<C>]>;

pub(crate) struct Grid<C> {
    pages: Vec<Option<Page<C>>>,
    row_capacity: u32,
    column_capacity: u32,
}

impl<C> Grid<C> {
    pub(crate) fn new(row_capacity: u32, column_capacity: u32) -> Self {
        let mut pages = Vec::new();
        pages.resize_with(row_capacity as usize + 1, || None);
        Self {
            pages,
            row_capacity,
            column_capacity,
        }
    }

    pub(crate) fn row_capacity(&self) -> u32 {
        self.row_capacity
    }

    pub(crate) fn column_capacity(&self) -> u32 {
        self.column_capacity
    }

    /// Grow so that `(row, column)` is addressable.
    ///
    /// Returns `true` when either dimension grew. The caller guarantees the
    /// point lies within `max_row` x `max_column`.
    pub(crate) fn ensure(&mut self, row: u32, column: u32, max_row: u32, max_column: u32) -> bool {
        if row < self.row_capacity && column < self.column_capacity {
            return false;
        }

        let old_rows = self.row_capacity;
        let old_columns = self.column_capacity;

        if row >= self.row_capacity {
            self.row_capacity = grown_capacity(self.row_capacity, row, max_row);
            self.pages
                .resize_with(self.row_capacity as usize + 1, || None);
        }

        if column >= self.column_capacity {
            self.column_capacity = grown_capacity(self.column_capacity, column, max_column);
            let width = self.column_capacity as usize + 1;
            for page in self.pages.iter_mut().flatten() {
                let mut slots = std::mem::take(page).into_vec();
                slots.resize_with(width, || None);
                *page = slots.into_boxed_slice();
            }
        }

        tracing::debug!(
            old_rows,
            old_columns,
            rows = self.row_capacity,
            columns = self.column_capacity,
            "grew cell store capacity"
        );
        true
    }

    /// The allocated page for `row`, if any
    pub(crate) fn page(&self, row: u32) -> Option<&[Option<C>]> {
        self.pages.get(row as usize)?.as_deref()
    }

    pub(crate) fn get(&self, row: u32, column: u32) -> Option<&C> {
        self.page(row)?.get(column as usize)?.as_ref()
    }

    pub(crate) fn get_mut(&mut self, row: u32, column: u32) -> Option<&mut C> {
        self.pages
            .get_mut(row as usize)?
            .as_deref_mut()?
            .get_mut(column as usize)?
            .as_mut()
    }

    /// Empty the slot and hand back its occupant
    pub(crate) fn take(&mut self, row: u32, column: u32) -> Option<C> {
        self.pages
            .get_mut(row as usize)?
            .as_deref_mut()?
            .get_mut(column as usize)?
            .take()
    }

    /// Store `cell` at `(row, column)`, returning the previous occupant.
    ///
    /// The point must already be within capacity (see [`Grid::ensure`]).
    pub(crate) fn replace(&mut self, row: u32, column: u32, cell: C) -> Option<C> {
        let width = self.column_capacity as usize + 1;
        let page = self.pages[row as usize].get_or_insert_with(|| empty_page(width));
        page[column as usize].replace(cell)
    }

    /// Exchange the occupants of two slots
    pub(crate) fn swap(&mut self, a: SheetPoint, b: SheetPoint) {
        let first = self.take(a.row, a.column);
        let second = self.take(b.row, b.column);
        if let Some(cell) = second {
            self.replace(a.row, a.column, cell);
        }
        if let Some(cell) = first {
            self.replace(b.row, b.column, cell);
        }
    }
}

fn empty_page<C>(width: usize) -> Page<C> {
    std::iter::repeat_with(|| None).take(width).collect()
}

/// Growth policy for one dimension.
///
/// Double the current capacity; if that still does not reach `index`, jump to
/// 1.5x `index` instead. The result never exceeds `max`.
pub(crate) fn grown_capacity(current: u32, index: u32, max: u32) -> u32 {
    if index < current {
        return current;
    }

    let mut capacity = current as u64 * 2;
    if capacity < index as u64 {
        capacity = index as u64 * 3 / 2;
    }

    capacity.min(max as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_doubles() {
        assert_eq!(grown_capacity(10_000, 10_000, 1_048_576), 20_000);
        assert_eq!(grown_capacity(50, 99, 16_384), 100);
        assert_eq!(grown_capacity(50, 100, 16_384), 100);
    }

    #[test]
    fn test_growth_jumps_past_doubling() {
        assert_eq!(grown_capacity(10_000, 500_000, 1_048_576), 750_000);
        assert_eq!(grown_capacity(50, 101, 16_384), 151);
    }

    #[test]
    fn test_growth_clamps_to_bound() {
        assert_eq!(grown_capacity(10_000, 1_000_000, 1_048_576), 1_048_576);
        assert_eq!(grown_capacity(10_000, 1_048_576, 1_048_576), 1_048_576);
        assert_eq!(grown_capacity(12_000, 16_000, 16_384), 16_384);
    }

    #[test]
    fn test_growth_noop_within_capacity() {
        assert_eq!(grown_capacity(50, 49, 16_384), 50);
    }

    #[test]
    fn test_column_growth_keeps_slots() {
        let mut grid: Grid<&str> = Grid::new(4, 2);
        grid.replace(1, 1, "a");
        grid.replace(3, 1, "b");

        assert!(grid.ensure(3, 7, 100, 100));
        assert_eq!(grid.row_capacity(), 4);
        assert_eq!(grid.column_capacity(), 10);

        grid.replace(3, 7, "c");
        assert_eq!(grid.get(1, 1), Some(&"a"));
        assert_eq!(grid.get(3, 1), Some(&"b"));
        assert_eq!(grid.get(3, 7), Some(&"c"));
        assert_eq!(grid.page(1).map(|p| p.len()), Some(11));
    }

    #[test]
    fn test_swap_slots() {
        let mut grid: Grid<u8> = Grid::new(10, 10);
        grid.replace(1, 1, 1);
        grid.replace(5, 5, 2);

        grid.swap(SheetPoint::new(1, 1), SheetPoint::new(5, 5));
        assert_eq!(grid.get(1, 1), Some(&2));
        assert_eq!(grid.get(5, 5), Some(&1));
    }
}
