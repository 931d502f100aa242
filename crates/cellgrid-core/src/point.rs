//! Sheet coordinates and rectangular regions
//!
//! Unlike display addresses, a [`SheetPoint`] is 1-based in both dimensions:
//! row 1, column 1 is `A1`. Zero is never a valid row or column.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A (row, column) coordinate, both 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetPoint {
    /// Row index (1-based)
    pub row: u32,
    /// Column index (1-based, A=1, B=2, ..., XFD=16384)
    pub column: u32,
}

impl SheetPoint {
    /// Create a new point
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Parse an A1-style reference (`$` markers are accepted and ignored)
    ///
    /// # Examples
    /// ```
    /// use cellgrid_core::SheetPoint;
    ///
    /// let point = SheetPoint::parse("B3").unwrap();
    /// assert_eq!(point, SheetPoint::new(3, 2));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let bytes = s.as_bytes();
        let mut pos = 0;

        if bytes.get(pos) == Some(&b'$') {
            pos += 1;
        }
        let col_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }
        if pos == col_start {
            return Err(Error::InvalidRange(format!("no column letters in '{}'", s)));
        }
        let column = Self::letters_to_column(&s[col_start..pos])?;

        if bytes.get(pos) == Some(&b'$') {
            pos += 1;
        }
        let row: u32 = s[pos..]
            .parse()
            .map_err(|_| Error::InvalidRange(format!("invalid row number in '{}'", s)))?;
        if row == 0 {
            return Err(Error::InvalidRange(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Ok(Self { row, column })
    }

    /// Convert a 1-based column index to letters (1 = A, 26 = Z, 27 = AA)
    pub fn column_to_letters(column: u32) -> String {
        let mut result = String::new();
        let mut n = column;

        while n > 0 {
            n -= 1;
            result.insert(0, ((n % 26) as u8 + b'A') as char);
            n /= 26;
        }

        result
    }

    /// Convert column letters to a 1-based index (A = 1, Z = 26, AA = 27)
    pub fn letters_to_column(letters: &str) -> Result<u32> {
        if letters.is_empty() || letters.len() > 6 {
            return Err(Error::InvalidRange(format!(
                "invalid column letters '{}'",
                letters
            )));
        }

        let mut column: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidRange(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            column = column * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
        }

        Ok(column)
    }

    /// Offset this point by a number of rows and columns
    pub fn offset(&self, rows: u32, columns: u32) -> Self {
        Self::new(self.row + rows, self.column + columns)
    }
}

impl fmt::Display for SheetPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::column_to_letters(self.column), self.row)
    }
}

impl FromStr for SheetPoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<(u32, u32)> for SheetPoint {
    fn from((row, column): (u32, u32)) -> Self {
        Self::new(row, column)
    }
}

/// An axis-aligned rectangle of points, inclusive on both corners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetRange {
    /// Top-left corner
    pub first: SheetPoint,
    /// Bottom-right corner
    pub last: SheetPoint,
}

impl SheetRange {
    /// Create a new range, normalizing so `first` is top-left
    pub fn new(a: SheetPoint, b: SheetPoint) -> Self {
        Self {
            first: SheetPoint::new(a.row.min(b.row), a.column.min(b.column)),
            last: SheetPoint::new(a.row.max(b.row), a.column.max(b.column)),
        }
    }

    /// Create a range from row/column indices
    pub fn from_indices(row_start: u32, column_start: u32, row_end: u32, column_end: u32) -> Self {
        Self::new(
            SheetPoint::new(row_start, column_start),
            SheetPoint::new(row_end, column_end),
        )
    }

    /// Create a single-cell range
    pub fn single(point: SheetPoint) -> Self {
        Self {
            first: point,
            last: point,
        }
    }

    /// Parse a range from A1:B10 notation
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.split_once(':') {
            Some((a, b)) => Ok(Self::new(SheetPoint::parse(a)?, SheetPoint::parse(b)?)),
            None => Ok(Self::single(SheetPoint::parse(s)?)),
        }
    }

    /// Number of rows in the range
    pub fn row_count(&self) -> u32 {
        self.last.row - self.first.row + 1
    }

    /// Number of columns in the range
    pub fn column_count(&self) -> u32 {
        self.last.column - self.first.column + 1
    }

    /// Total number of points in the range
    pub fn point_count(&self) -> u64 {
        self.row_count() as u64 * self.column_count() as u64
    }

    /// Whether both ranges have the same number of rows and columns
    pub fn same_shape(&self, other: &SheetRange) -> bool {
        self.row_count() == other.row_count() && self.column_count() == other.column_count()
    }

    /// Check if a point is within this range
    pub fn contains(&self, point: &SheetPoint) -> bool {
        point.row >= self.first.row
            && point.row <= self.last.row
            && point.column >= self.first.column
            && point.column <= self.last.column
    }

    /// Check if this range shares any point with another
    pub fn overlaps(&self, other: &SheetRange) -> bool {
        self.first.row <= other.last.row
            && self.last.row >= other.first.row
            && self.first.column <= other.last.column
            && self.last.column >= other.first.column
    }

    /// Iterate over every point in the range, row by row
    pub fn points(&self) -> RangePoints {
        RangePoints {
            range: *self,
            next: Some(self.first),
        }
    }
}

impl fmt::Display for SheetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first == self.last {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{}:{}", self.first, self.last)
        }
    }
}

impl FromStr for SheetRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Row-major iterator over the points of a [`SheetRange`]
#[derive(Debug, Clone)]
pub struct RangePoints {
    range: SheetRange,
    next: Option<SheetPoint>,
}

impl Iterator for RangePoints {
    type Item = SheetPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        self.next = if current.column < self.range.last.column {
            Some(SheetPoint::new(current.row, current.column + 1))
        } else if current.row < self.range.last.row {
            Some(SheetPoint::new(current.row + 1, self.range.first.column))
        } else {
            None
        };

        Some(current)
    }
}
