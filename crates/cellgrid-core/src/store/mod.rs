//! Sparse two-dimensional cell store
//!
//! [`CellStore`] keeps records in a growable dense grid addressed by
//! [`SheetPoint`], alongside bookkeeping derived from the occupied slots:
//!
//! - per-row and per-column occupancy counts (rows/columns with no cells are
//!   absent, never present with a zero count)
//! - the highest row and column that received a cell since the last clear
//! - the set of points that held a cell since the last clear and are now empty
//!
//! All of it is updated alongside every mutation, so the queries are O(1).

mod grid;
mod region;
mod swap;

use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;

use ahash::{AHashMap, AHashSet};

use crate::error::{Error, Result};
use crate::options::CellStoreOptions;
use crate::point::SheetPoint;
use grid::Grid;

pub use region::Cells;

/// Growable grid of records indexed by 1-based (row, column)
///
/// The store owns the records it holds. [`add`](CellStore::add) moves a record
/// in, [`remove`](CellStore::remove) moves it back out to the caller.
///
/// Iterators borrow the store, so it cannot be mutated while a region is
/// being walked.
pub struct CellStore<C> {
    grid: Grid<C>,
    options: CellStoreOptions,
    count: usize,
    max_row_used: u32,
    max_column_used: u32,
    rows_used: AHashMap<u32, u32>,
    columns_used: AHashMap<u32, u32>,
    deleted: AHashSet<SheetPoint>,
}

impl<C> CellStore<C> {
    /// Create an empty store with default capacities and Excel bounds
    pub fn new() -> Self {
        Self::from_valid_options(CellStoreOptions::default())
    }

    /// Create an empty store with custom capacities and bounds
    pub fn with_options(options: CellStoreOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::from_valid_options(options))
    }

    fn from_valid_options(options: CellStoreOptions) -> Self {
        Self {
            grid: Grid::new(options.initial_row_capacity, options.initial_column_capacity),
            options,
            count: 0,
            max_row_used: 0,
            max_column_used: 0,
            rows_used: AHashMap::new(),
            columns_used: AHashMap::new(),
            deleted: AHashSet::new(),
        }
    }

    /// The options this store was created with
    pub fn options(&self) -> &CellStoreOptions {
        &self.options
    }

    fn check_point(&self, point: SheetPoint) -> Result<()> {
        if point.row == 0
            || point.column == 0
            || point.row > self.options.max_row
            || point.column > self.options.max_column
        {
            return Err(Error::invalid_coordinate(point.row, point.column));
        }
        Ok(())
    }

    /// Whether the point lies inside the tracked used extent
    fn in_used_extent(&self, point: SheetPoint) -> bool {
        point.row != 0
            && point.column != 0
            && point.row <= self.max_row_used
            && point.column <= self.max_column_used
    }

    // === Mutation ===

    /// Store a record at `point`
    ///
    /// Grows the backing grid if the point is beyond current capacity. When
    /// the slot was already occupied the previous record is returned and the
    /// occupancy counts are left as they were.
    pub fn add(&mut self, point: SheetPoint, cell: C) -> Result<Option<C>> {
        self.check_point(point)?;

        self.grid.ensure(
            point.row,
            point.column,
            self.options.max_row,
            self.options.max_column,
        );
        let displaced = self.grid.replace(point.row, point.column, cell);

        if displaced.is_none() {
            self.count += 1;
            increment_usage(&mut self.rows_used, point.row);
            increment_usage(&mut self.columns_used, point.column);
        }

        self.max_row_used = self.max_row_used.max(point.row);
        self.max_column_used = self.max_column_used.max(point.column);
        self.deleted.remove(&point);

        Ok(displaced)
    }

    /// Remove and return the record at `point`
    ///
    /// Returns [`Error::NotFound`] if the slot is empty; nothing changes in
    /// that case.
    pub fn remove(&mut self, point: SheetPoint) -> Result<C> {
        self.check_point(point)?;
        self.take_cell(point).ok_or(Error::NotFound(point))
    }

    /// Empty an occupied slot, keeping the bookkeeping in step
    fn take_cell(&mut self, point: SheetPoint) -> Option<C> {
        if !self.in_used_extent(point) {
            return None;
        }

        let cell = self.grid.take(point.row, point.column)?;
        self.count -= 1;
        decrement_usage(&mut self.rows_used, point.row);
        decrement_usage(&mut self.columns_used, point.column);
        self.deleted.insert(point);
        Some(cell)
    }

    /// Drop every record and reset capacity to the initial defaults
    ///
    /// Every point occupied at the time of the call is recorded as deleted.
    pub fn clear(&mut self) {
        let cleared = self.count;
        if cleared > 0 {
            let points: Vec<SheetPoint> = self.iter().map(|(point, _)| point).collect();
            self.deleted.extend(points);
        }

        self.count = 0;
        self.rows_used.clear();
        self.columns_used.clear();
        self.max_row_used = 0;
        self.max_column_used = 0;
        self.grid = Grid::new(
            self.options.initial_row_capacity,
            self.options.initial_column_capacity,
        );

        tracing::debug!(cleared, deleted = self.deleted.len(), "cleared cell store");
    }

    // === Point queries ===

    /// Get the record at `point`
    ///
    /// Points outside the used extent read as empty.
    pub fn get(&self, point: SheetPoint) -> Option<&C> {
        if !self.in_used_extent(point) {
            return None;
        }
        self.grid.get(point.row, point.column)
    }

    /// Get a mutable reference to the record at `point`
    pub fn get_mut(&mut self, point: SheetPoint) -> Option<&mut C> {
        if !self.in_used_extent(point) {
            return None;
        }
        self.grid.get_mut(point.row, point.column)
    }

    /// Check if a record is stored at `point`
    pub fn contains(&self, point: SheetPoint) -> bool {
        self.get(point).is_some()
    }

    // === Bookkeeping ===

    /// Number of occupied slots
    pub fn count(&self) -> usize {
        self.count
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Highest row that received a record since the last clear (0 if none)
    pub fn max_row_used(&self) -> u32 {
        self.max_row_used
    }

    /// Highest column that received a record since the last clear (0 if none)
    pub fn max_column_used(&self) -> u32 {
        self.max_column_used
    }

    /// Current row capacity of the backing grid
    pub fn row_capacity(&self) -> u32 {
        self.grid.row_capacity()
    }

    /// Current column capacity of the backing grid
    pub fn column_capacity(&self) -> u32 {
        self.grid.column_capacity()
    }

    /// Occupied-cell count per row (row index → count)
    pub fn rows_used(&self) -> &AHashMap<u32, u32> {
        &self.rows_used
    }

    /// Occupied-cell count per column (column index → count)
    pub fn columns_used(&self) -> &AHashMap<u32, u32> {
        &self.columns_used
    }

    /// Points that held a record since the last clear and are now empty
    pub fn deleted(&self) -> &AHashSet<SheetPoint> {
        &self.deleted
    }

    /// Recompute all derived bookkeeping from the slots and compare
    ///
    /// Walks the whole used extent, so it is meant for tests and debugging.
    pub fn check_consistency(&self) -> Result<()> {
        let mut rows: AHashMap<u32, u32> = AHashMap::new();
        let mut columns: AHashMap<u32, u32> = AHashMap::new();
        let mut count = 0usize;

        for (point, _) in self.iter() {
            count += 1;
            increment_usage(&mut rows, point.row);
            increment_usage(&mut columns, point.column);
            if self.deleted.contains(&point) {
                return Err(Error::Inconsistent(format!(
                    "{} is occupied but marked deleted",
                    point
                )));
            }
        }

        if count != self.count {
            return Err(Error::Inconsistent(format!(
                "count is {} but {} slots are occupied",
                self.count, count
            )));
        }
        if *rows != *self.rows_used {
            return Err(Error::Inconsistent("row usage counts differ".into()));
        }
        if *columns != *self.columns_used {
            return Err(Error::Inconsistent("column usage counts differ".into()));
        }
        if self.max_row_used > self.row_capacity()
            || self.max_column_used > self.column_capacity()
        {
            return Err(Error::Inconsistent(format!(
                "used extent {}x{} exceeds capacity {}x{}",
                self.max_row_used,
                self.max_column_used,
                self.row_capacity(),
                self.column_capacity()
            )));
        }
        Ok(())
    }
}

impl<C> Default for CellStore<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for CellStore<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellStore")
            .field("count", &self.count)
            .field("max_row_used", &self.max_row_used)
            .field("max_column_used", &self.max_column_used)
            .field("row_capacity", &self.row_capacity())
            .field("column_capacity", &self.column_capacity())
            .field("deleted", &self.deleted.len())
            .finish_non_exhaustive()
    }
}

fn increment_usage<K: Hash + Eq>(usage: &mut AHashMap<K, u32>, key: K) {
    *usage.entry(key).or_insert(0) += 1;
}

fn decrement_usage<K: Hash + Eq>(usage: &mut AHashMap<K, u32>, key: K) {
    if let Entry::Occupied(mut entry) = usage.entry(key) {
        *entry.get_mut() -= 1;
        if *entry.get() == 0 {
            entry.remove();
        }
    }
}
