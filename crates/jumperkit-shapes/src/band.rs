//! Row bands: contiguous row ranges sharing one column rule.

use serde::{Deserialize, Serialize};

/// How a band decides its active column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ColumnRule {
    /// Constant padding on both sides.
    Fixed { columns: u32, padding: u32 },
    /// Arithmetic taper: `start_columns + (row - start) * step` active columns.
    Taper { start_columns: u32, step: i32 },
}

/// An inclusive row range `[start, end]` and its column rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowBand {
    pub start: u32,
    pub end: u32,
    pub rule: ColumnRule,
}

impl RowBand {
    /// Creates a fixed-width band.
    pub fn fixed(start: u32, end: u32, columns: u32, padding: u32) -> Self {
        Self {
            start,
            end,
            rule: ColumnRule::Fixed { columns, padding },
        }
    }

    /// Creates a tapering band.
    pub fn taper(start: u32, end: u32, start_columns: u32, step: i32) -> Self {
        Self {
            start,
            end,
            rule: ColumnRule::Taper {
                start_columns,
                step,
            },
        }
    }

    /// Whether `row` falls inside this band.
    pub fn contains(&self, row: u32) -> bool {
        self.start <= row && row <= self.end
    }

    /// Number of rows in the band.
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start) + 1
    }

    /// Active column count the rule declares for `row`.
    ///
    /// For fixed bands this is the declared count, which may disagree with
    /// the padding; the padding is authoritative for the active range.
    pub fn active_columns(&self, row: u32, max_columns: u32) -> i64 {
        match self.rule {
            ColumnRule::Fixed { padding, .. } => i64::from(max_columns) - 2 * i64::from(padding),
            ColumnRule::Taper {
                start_columns,
                step,
            } => {
                let steps = i64::from(row) - i64::from(self.start);
                i64::from(start_columns) + steps * i64::from(step)
            }
        }
    }

    /// Symmetric padding for `row`. Negative when a taper overshoots the grid.
    pub fn padding(&self, row: u32, max_columns: u32) -> i64 {
        match self.rule {
            ColumnRule::Fixed { padding, .. } => i64::from(padding),
            ColumnRule::Taper { .. } => {
                (i64::from(max_columns) - self.active_columns(row, max_columns)) / 2
            }
        }
    }
}
