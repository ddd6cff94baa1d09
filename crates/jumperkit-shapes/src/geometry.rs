//! Shape geometry: which cells of the grid belong to the silhouette.
//!
//! A geometry is validated once, in [`ShapeGeometry::load`], and is
//! immutable afterwards. Every other component trusts its invariants:
//! each row in `1..=total_rows` is covered by exactly one band and has a
//! non-empty, centered active range `(padding, max_columns - padding]`.

use crate::band::{ColumnRule, RowBand};
use crate::descriptor::{RowBandDescriptor, ShapeGeometryDescriptor};
use jumperkit_core::{Cell, ConfigError};
use tracing::warn;

/// Largest accepted row or column count.
pub const MAX_GRID_DIMENSION: u32 = 1000;

/// Inclusive active column range of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRange {
    pub min_col: i32,
    pub max_col: i32,
}

impl ColumnRange {
    pub fn contains(&self, col: i32) -> bool {
        self.min_col <= col && col <= self.max_col
    }

    /// Number of active columns.
    pub fn width(&self) -> u32 {
        (self.max_col - self.min_col + 1).max(0) as u32
    }
}

/// Validated grid geometry for one garment configuration and size.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeGeometry {
    config_id: String,
    size: String,
    total_rows: u32,
    max_columns: u32,
    center_row: f64,
    center_column: f64,
    bands: Vec<RowBand>,
    /// Padding per row, index `row - 1`.
    paddings: Vec<u32>,
}

impl ShapeGeometry {
    /// Validates a descriptor and builds the geometry.
    ///
    /// Rejects missing fields, out-of-range dimensions, overlapping bands,
    /// rows left uncovered (all of them are listed), and rows whose rule
    /// leaves no active cell.
    pub fn load(
        config_id: impl Into<String>,
        size: impl Into<String>,
        descriptor: &ShapeGeometryDescriptor,
    ) -> Result<Self, ConfigError> {
        let config_id = config_id.into();
        let size = size.into();
        let context = format!("{}/{}", config_id, size);

        let total_rows = require(descriptor.total_rows, "total_rows", &context)?;
        let max_columns = require(descriptor.max_columns, "max_columns", &context)?;
        check_dimension("total_rows", total_rows)?;
        check_dimension("max_columns", max_columns)?;

        let mut bands = descriptor
            .bands
            .iter()
            .enumerate()
            .map(|(index, band)| build_band(index, band, total_rows, &context))
            .collect::<Result<Vec<_>, _>>()?;
        bands.sort_by_key(|band| band.start);

        let paddings = compute_paddings(&bands, total_rows, max_columns, &context)?;

        Ok(Self {
            config_id,
            size,
            total_rows,
            max_columns,
            center_row: descriptor
                .center_row
                .unwrap_or((f64::from(total_rows) + 1.0) / 2.0),
            center_column: descriptor
                .center_column
                .unwrap_or((f64::from(max_columns) + 1.0) / 2.0),
            bands,
            paddings,
        })
    }

    /// A plain rectangle with every cell active.
    ///
    /// Used as the last-resort fallback when no configuration can be loaded.
    pub fn rectangle(total_rows: u32, max_columns: u32) -> Self {
        let total_rows = total_rows.clamp(1, MAX_GRID_DIMENSION);
        let max_columns = max_columns.clamp(1, MAX_GRID_DIMENSION);
        Self {
            config_id: "legacy".to_string(),
            size: "default".to_string(),
            total_rows,
            max_columns,
            center_row: (f64::from(total_rows) + 1.0) / 2.0,
            center_column: (f64::from(max_columns) + 1.0) / 2.0,
            bands: vec![RowBand::fixed(1, total_rows, max_columns, 0)],
            paddings: vec![0; total_rows as usize],
        }
    }

    pub fn config_id(&self) -> &str {
        &self.config_id
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn total_rows(&self) -> u32 {
        self.total_rows
    }

    pub fn max_columns(&self) -> u32 {
        self.max_columns
    }

    pub fn center_row(&self) -> f64 {
        self.center_row
    }

    pub fn center_column(&self) -> f64 {
        self.center_column
    }

    /// Bands ordered by starting row.
    pub fn bands(&self) -> &[RowBand] {
        &self.bands
    }

    /// Whether `(config_id, size)` identifies this geometry.
    pub fn is(&self, config_id: &str, size: &str) -> bool {
        self.config_id == config_id && self.size == size
    }

    pub fn contains_row(&self, row: i32) -> bool {
        row >= 1 && row <= self.total_rows as i32
    }

    /// The band covering `row`, if the row exists.
    pub fn band_for_row(&self, row: i32) -> Option<&RowBand> {
        if !self.contains_row(row) {
            return None;
        }
        let row = row as u32;
        self.bands.iter().find(|band| band.contains(row))
    }

    /// Inclusive active column range for `row`, `None` outside the grid.
    pub fn column_bounds(&self, row: i32) -> Option<ColumnRange> {
        if !self.contains_row(row) {
            return None;
        }
        let padding = self.paddings[(row - 1) as usize] as i32;
        Some(ColumnRange {
            min_col: padding + 1,
            max_col: self.max_columns as i32 - padding,
        })
    }

    /// Number of active cells in `row`, zero outside the grid.
    pub fn row_width(&self, row: i32) -> u32 {
        self.column_bounds(row).map_or(0, |range| range.width())
    }

    /// The active-cell predicate.
    pub fn is_active(&self, row: i32, col: i32) -> bool {
        col >= 1
            && col <= self.max_columns as i32
            && self
                .column_bounds(row)
                .is_some_and(|range| range.contains(col))
    }

    pub fn is_cell_active(&self, cell: Cell) -> bool {
        self.is_active(cell.row, cell.col)
    }

    /// Every active cell, row-major ascending.
    pub fn active_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (1..=self.total_rows as i32).flat_map(move |row| {
            let range = self.column_bounds(row);
            range
                .into_iter()
                .flat_map(move |r| (r.min_col..=r.max_col).map(move |col| Cell::new(row, col)))
        })
    }

    pub fn active_cell_count(&self) -> usize {
        (1..=self.total_rows as i32)
            .map(|row| self.row_width(row) as usize)
            .sum()
    }
}

fn require(value: Option<u32>, field: &str, context: &str) -> Result<u32, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingField {
        field: field.to_string(),
        context: context.to_string(),
    })
}

fn check_dimension(field: &str, value: u32) -> Result<(), ConfigError> {
    if value == 0 || value > MAX_GRID_DIMENSION {
        return Err(ConfigError::InvalidDimension {
            field: field.to_string(),
            value: i64::from(value),
        });
    }
    Ok(())
}

fn build_band(
    index: usize,
    band: &RowBandDescriptor,
    total_rows: u32,
    context: &str,
) -> Result<RowBand, ConfigError> {
    let band_context = format!("{} band {}", context, index + 1);
    let start = require(band.start, "start", &band_context)?;
    let end = require(band.end, "end", &band_context)?;

    if start == 0 {
        return Err(ConfigError::InvalidDimension {
            field: format!("band {} start", index + 1),
            value: 0,
        });
    }
    if end < start || end > total_rows {
        return Err(ConfigError::InvalidDimension {
            field: format!("band {} end", index + 1),
            value: i64::from(end),
        });
    }

    let rule = match (band.start_columns, band.columns, band.padding) {
        (Some(start_columns), _, _) => ColumnRule::Taper {
            start_columns,
            step: band.step.ok_or_else(|| ConfigError::MissingField {
                field: "step".to_string(),
                context: band_context.clone(),
            })?,
        },
        (None, Some(columns), padding) => ColumnRule::Fixed {
            columns,
            padding: padding.unwrap_or(0),
        },
        (None, None, Some(padding)) => ColumnRule::Fixed {
            columns: 0,
            padding,
        },
        (None, None, None) => {
            return Err(ConfigError::MissingField {
                field: "columns".to_string(),
                context: band_context,
            })
        }
    };

    Ok(RowBand { start, end, rule })
}

fn compute_paddings(
    bands: &[RowBand],
    total_rows: u32,
    max_columns: u32,
    context: &str,
) -> Result<Vec<u32>, ConfigError> {
    let mut owner: Vec<Option<usize>> = vec![None; total_rows as usize];
    for (index, band) in bands.iter().enumerate() {
        for row in band.start..=band.end {
            let slot = &mut owner[(row - 1) as usize];
            if slot.is_some() {
                return Err(ConfigError::OverlappingBands { row });
            }
            *slot = Some(index);
        }
    }

    let uncovered: Vec<u32> = owner
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.is_none())
        .map(|(i, _)| i as u32 + 1)
        .collect();
    if !uncovered.is_empty() {
        return Err(ConfigError::RowCoverageGap { uncovered });
    }

    let mut paddings = Vec::with_capacity(total_rows as usize);
    for (i, slot) in owner.iter().enumerate() {
        let row = i as u32 + 1;
        let Some(band) = slot.map(|index| &bands[index]) else {
            continue;
        };

        if let ColumnRule::Taper { .. } = band.rule {
            let columns = band.active_columns(row, max_columns);
            if columns < 1 || columns > i64::from(max_columns) {
                return Err(ConfigError::ColumnsOutOfRange {
                    row,
                    columns,
                    max_columns,
                });
            }
        }

        let padding = band.padding(row, max_columns).max(0) as u32;
        if padding.saturating_mul(2) >= max_columns {
            return Err(ConfigError::EmptyRow { row, padding });
        }

        if let ColumnRule::Fixed { columns, .. } = band.rule {
            if row == band.start && columns != 0 {
                if columns > max_columns {
                    return Err(ConfigError::ColumnsOutOfRange {
                        row,
                        columns: i64::from(columns),
                        max_columns,
                    });
                }
                let width = i64::from(max_columns) - 2 * i64::from(padding);
                if i64::from(columns) != width {
                    warn!(
                        "{}: band at row {} declares {} columns but padding {} leaves {}",
                        context, row, columns, padding, width
                    );
                }
            }
        }

        paddings.push(padding);
    }

    Ok(paddings)
}
