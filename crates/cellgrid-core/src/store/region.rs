//! Rectangular region queries and directional bounds

use super::grid::Grid;
use super::CellStore;
use crate::point::{SheetPoint, SheetRange};

/// Row-major iterator over the occupied slots of a region
///
/// Created by [`CellStore::entries`] and friends. The region is clamped to
/// the store's used extent when the iterator is built, and unallocated rows
/// are skipped without visiting their columns.
pub struct Cells<'a, C> {
    grid: &'a Grid<C>,
    first_column: u32,
    last_row: u32,
    last_column: u32,
    row: u32,
    column: u32,
}

impl<'a, C> Cells<'a, C> {
    fn new(grid: &'a Grid<C>, range: SheetRange, max_row: u32, max_column: u32) -> Self {
        let first_column = range.first.column.max(1);
        Self {
            grid,
            first_column,
            last_row: range.last.row.min(max_row),
            last_column: range.last.column.min(max_column),
            row: range.first.row.max(1),
            column: first_column,
        }
    }
}

impl<'a, C> Clone for Cells<'a, C> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid,
            first_column: self.first_column,
            last_row: self.last_row,
            last_column: self.last_column,
            row: self.row,
            column: self.column,
        }
    }
}

impl<'a, C> Iterator for Cells<'a, C> {
    type Item = (SheetPoint, &'a C);

    fn next(&mut self) -> Option<Self::Item> {
        while self.row <= self.last_row {
            if let Some(page) = self.grid.page(self.row) {
                while self.column <= self.last_column {
                    let column = self.column;
                    self.column += 1;
                    if let Some(cell) = page[column as usize].as_ref() {
                        return Some((SheetPoint::new(self.row, column), cell));
                    }
                }
            }
            self.row += 1;
            self.column = self.first_column;
        }
        None
    }
}

impl<C> CellStore<C> {
    /// The whole used extent, `(1, 1)` to `(max_row_used, max_column_used)`
    pub fn used_range(&self) -> Option<SheetRange> {
        if self.is_empty() {
            return None;
        }
        Some(SheetRange::from_indices(
            1,
            1,
            self.max_row_used,
            self.max_column_used,
        ))
    }

    /// Occupied slots in `range` with their points, row by row
    pub fn entries(&self, range: SheetRange) -> Cells<'_, C> {
        Cells::new(&self.grid, range, self.max_row_used, self.max_column_used)
    }

    /// Records in `range`, row by row
    pub fn cells(&self, range: SheetRange) -> impl Iterator<Item = &C> + Clone + '_ {
        self.entries(range).map(|(_, cell)| cell)
    }

    /// Points of the occupied slots in `range`, row by row
    pub fn points(&self, range: SheetRange) -> impl Iterator<Item = SheetPoint> + Clone + '_ {
        self.entries(range).map(|(point, _)| point)
    }

    /// Every occupied slot in the store, row by row
    pub fn iter(&self) -> Cells<'_, C> {
        Cells::new(
            &self.grid,
            SheetRange::from_indices(1, 1, self.max_row_used, self.max_column_used),
            self.max_row_used,
            self.max_column_used,
        )
    }

    /// Records in the used extent that satisfy `predicate`
    pub fn cells_where<'a, P>(&'a self, mut predicate: P) -> impl Iterator<Item = &'a C> + 'a
    where
        P: FnMut(&C) -> bool + 'a,
    {
        self.iter()
            .map(|(_, cell)| cell)
            .filter(move |cell| predicate(*cell))
    }

    /// Records in one row
    pub fn cells_in_row(&self, row: u32) -> impl Iterator<Item = &C> + Clone + '_ {
        self.cells(SheetRange::from_indices(row, 1, row, self.max_column_used))
    }

    /// Records in one column
    pub fn cells_in_column(&self, column: u32) -> impl Iterator<Item = &C> + Clone + '_ {
        self.cells(SheetRange::from_indices(1, column, self.max_row_used, column))
    }

    /// Remove every record in `range`
    ///
    /// Same effect as calling [`remove`](CellStore::remove) on each occupied
    /// point. The removed records are returned in row-major order.
    pub fn remove_all(&mut self, range: SheetRange) -> Vec<(SheetPoint, C)> {
        let points: Vec<SheetPoint> = self.points(range).collect();
        let removed: Vec<(SheetPoint, C)> = points
            .into_iter()
            .filter_map(|point| self.take_cell(point).map(|cell| (point, cell)))
            .collect();

        tracing::trace!(%range, removed = removed.len(), "removed region");
        removed
    }

    // === Directional bounds ===

    /// First occupied row in `column`, or 0 if the column is empty
    pub fn min_row_in_column(&self, column: u32) -> u32 {
        if column == 0 || column > self.max_column_used {
            return 0;
        }
        (1..=self.max_row_used)
            .find(|&row| self.grid.get(row, column).is_some())
            .unwrap_or(0)
    }

    /// Last occupied row in `column`, or 0 if the column is empty
    pub fn max_row_in_column(&self, column: u32) -> u32 {
        if column == 0 || column > self.max_column_used {
            return 0;
        }
        (1..=self.max_row_used)
            .rev()
            .find(|&row| self.grid.get(row, column).is_some())
            .unwrap_or(0)
    }

    /// First occupied column in `row`, or 0 if the row is empty
    pub fn min_column_in_row(&self, row: u32) -> u32 {
        if row == 0 || row > self.max_row_used {
            return 0;
        }
        (1..=self.max_column_used)
            .find(|&column| self.grid.get(row, column).is_some())
            .unwrap_or(0)
    }

    /// Last occupied column in `row`, or 0 if the row is empty
    pub fn max_column_in_row(&self, row: u32) -> u32 {
        if row == 0 || row > self.max_row_used {
            return 0;
        }
        (1..=self.max_column_used)
            .rev()
            .find(|&column| self.grid.get(row, column).is_some())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn p(row: u32, column: u32) -> SheetPoint {
        SheetPoint::new(row, column)
    }

    fn sample() -> CellStore<u32> {
        let mut store = CellStore::new();
        for (i, (row, column)) in [(1, 1), (1, 3), (2, 2), (4, 1), (4, 5), (7, 3)]
            .into_iter()
            .enumerate()
        {
            store.add(p(row, column), i as u32).unwrap();
        }
        store
    }

    #[test]
    fn test_region_row_major() {
        let store = sample();
        let points: Vec<_> = store.points(SheetRange::from_indices(1, 1, 4, 3)).collect();
        assert_eq!(points, vec![p(1, 1), p(1, 3), p(2, 2), p(4, 1)]);

        let cells: Vec<_> = store.cells(SheetRange::from_indices(1, 1, 4, 3)).copied().collect();
        assert_eq!(cells, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_region_clamps_to_used_extent() {
        let store = sample();
        let all: Vec<_> = store
            .points(SheetRange::from_indices(1, 1, 1_000_000, 16_000))
            .collect();
        assert_eq!(all.len(), 6);
        assert_eq!(store.iter().count(), 6);
        assert_eq!(store.points(SheetRange::from_indices(8, 1, 20, 20)).count(), 0);
    }

    #[test]
    fn test_region_is_restartable() {
        let store = sample();
        let cells = store.cells(SheetRange::from_indices(1, 1, 7, 5));
        let first: Vec<_> = cells.clone().collect();
        let second: Vec<_> = cells.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rows_and_columns() {
        let store = sample();
        assert_eq!(store.cells_in_row(4).copied().collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(store.cells_in_column(3).copied().collect::<Vec<_>>(), vec![1, 5]);
        assert_eq!(store.cells_in_row(3).count(), 0);
    }

    #[test]
    fn test_cells_where() {
        let store = sample();
        let even: Vec<_> = store.cells_where(|v| v % 2 == 0).copied().collect();
        assert_eq!(even, vec![0, 2, 4]);
    }

    #[test]
    fn test_remove_all() {
        let mut store = sample();
        let removed = store.remove_all(SheetRange::from_indices(1, 1, 2, 3));

        assert_eq!(removed, vec![(p(1, 1), 0), (p(1, 3), 1), (p(2, 2), 2)]);
        assert_eq!(store.count(), 3);
        assert!(store.deleted().contains(&p(1, 3)));
        assert_eq!(store.rows_used().get(&1), None);
        assert_eq!(store.columns_used().get(&1), Some(&1));
        store.check_consistency().unwrap();
    }

    #[test]
    fn test_directional_bounds() {
        let store = sample();
        assert_eq!(store.min_column_in_row(4), 1);
        assert_eq!(store.max_column_in_row(4), 5);
        assert_eq!(store.min_row_in_column(3), 1);
        assert_eq!(store.max_row_in_column(3), 7);

        assert_eq!(store.min_column_in_row(3), 0);
        assert_eq!(store.max_row_in_column(4), 0);
        assert_eq!(store.max_column_in_row(99), 0);
        assert_eq!(store.min_row_in_column(0), 0);
    }

    #[test]
    fn test_used_range() {
        let mut store = sample();
        assert_eq!(store.used_range(), Some(SheetRange::from_indices(1, 1, 7, 5)));
        store.clear();
        assert_eq!(store.used_range(), None);
    }
}
