//! Grid cell coordinates.
//!
//! Rows and columns are 1-based. Row 1 is the bottom hem and the highest
//! row is the neckline. Coordinates are signed so that neighbor and offset
//! arithmetic can step outside the grid; such cells are simply inactive.

use crate::error::DesignError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `(row, col)` position on a pattern grid.
///
/// Ordering is row-major ascending, which is the traversal order every
/// deterministic algorithm in the workspace relies on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Creates a new cell.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Persisted key in the `{row}-{col}` format.
    pub fn key(&self) -> String {
        format!("{}-{}", self.row, self.col)
    }

    /// Parses a persisted `{row}-{col}` key.
    pub fn from_key(key: &str) -> Result<Self, DesignError> {
        let invalid = || DesignError::InvalidKey(key.to_string());
        let (row, col) = key.split_once('-').ok_or_else(invalid)?;
        let row = row.trim().parse::<i32>().map_err(|_| invalid())?;
        let col = col.trim().parse::<i32>().map_err(|_| invalid())?;
        Ok(Self { row, col })
    }

    /// Returns this cell shifted by the given offsets.
    pub fn offset(&self, rows: i32, cols: i32) -> Self {
        Self::new(self.row + rows, self.col + cols)
    }

    /// The 4-connected neighbors: up, down, left, right.
    pub fn neighbors(&self) -> [Cell; 4] {
        [
            self.offset(1, 0),
            self.offset(-1, 0),
            self.offset(0, -1),
            self.offset(0, 1),
        ]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for Cell {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cell::from_key(s)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
