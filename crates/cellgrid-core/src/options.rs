//! Cell store configuration

use crate::error::{Error, Result};
use crate::{INITIAL_COLUMN_CAPACITY, INITIAL_ROW_CAPACITY, MAX_COLS, MAX_ROWS};

/// Capacity and bound settings for a [`CellStore`](crate::CellStore)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellStoreOptions {
    /// Row capacity on creation and after every clear
    pub initial_row_capacity: u32,
    /// Column capacity on creation and after every clear
    pub initial_column_capacity: u32,
    /// Highest addressable row; capacity never grows past it
    pub max_row: u32,
    /// Highest addressable column; capacity never grows past it
    pub max_column: u32,
}

impl CellStoreOptions {
    /// Set the initial row capacity
    pub fn with_initial_row_capacity(mut self, rows: u32) -> Self {
        self.initial_row_capacity = rows;
        self
    }

    /// Set the initial column capacity
    pub fn with_initial_column_capacity(mut self, columns: u32) -> Self {
        self.initial_column_capacity = columns;
        self
    }

    /// Set the highest addressable row
    pub fn with_max_row(mut self, max_row: u32) -> Self {
        self.max_row = max_row;
        self
    }

    /// Set the highest addressable column
    pub fn with_max_column(mut self, max_column: u32) -> Self {
        self.max_column = max_column;
        self
    }

    /// Check that the settings describe a usable store
    pub fn validate(&self) -> Result<()> {
        if self.max_row == 0 || self.max_column == 0 {
            return Err(Error::InvalidOptions(format!(
                "bounds must be non-zero (max_row {}, max_column {})",
                self.max_row, self.max_column
            )));
        }
        if self.initial_row_capacity == 0 || self.initial_row_capacity > self.max_row {
            return Err(Error::InvalidOptions(format!(
                "initial row capacity {} outside 1..={}",
                self.initial_row_capacity, self.max_row
            )));
        }
        if self.initial_column_capacity == 0 || self.initial_column_capacity > self.max_column {
            return Err(Error::InvalidOptions(format!(
                "initial column capacity {} outside 1..={}",
                self.initial_column_capacity, self.max_column
            )));
        }
        Ok(())
    }
}

impl Default for CellStoreOptions {
    fn default() -> Self {
        Self {
            initial_row_capacity: INITIAL_ROW_CAPACITY,
            initial_column_capacity: INITIAL_COLUMN_CAPACITY,
            max_row: MAX_ROWS,
            max_column: MAX_COLS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let options = CellStoreOptions::default();
        assert_eq!(options.initial_row_capacity, 10_000);
        assert_eq!(options.initial_column_capacity, 50);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_rejects_capacity_above_bound() {
        let options = CellStoreOptions::default()
            .with_max_row(100)
            .with_initial_row_capacity(200);
        assert!(matches!(options.validate(), Err(Error::InvalidOptions(_))));

        let options = CellStoreOptions::default().with_initial_column_capacity(0);
        assert!(options.validate().is_err());
    }
}
