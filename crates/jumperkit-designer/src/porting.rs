//! Porting: remapping a design from one garment geometry to another.
//!
//! Source cells are visited row-major ascending. For `scale`, where
//! several source cells can round onto the same target cell, that order
//! decides the winner: the first cell visited keeps the target. Offset
//! strategies are injective, so their collision policy never triggers.

use crate::store::DesignStore;
use jumperkit_core::{Cell, PortStrategy};
use jumperkit_shapes::ShapeGeometry;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Cell counts for a port, shown in the porting preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortStats {
    pub input: usize,
    pub output: usize,
    pub lost: usize,
}

impl PortStats {
    fn new(input: usize, output: usize) -> Self {
        Self {
            input,
            output,
            lost: input.saturating_sub(output),
        }
    }

    /// Whether every input cell survived.
    pub fn is_lossless(&self) -> bool {
        self.lost == 0
    }
}

/// A ported design and its statistics.
#[derive(Debug, Clone)]
pub struct PortResult {
    pub store: DesignStore,
    pub stats: PortStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collision {
    KeepFirst,
    Overwrite,
}

#[derive(Debug, Clone, Copy)]
enum Mapping {
    Scale {
        source_rows: i64,
        source_cols: i64,
        target_rows: i64,
        target_cols: i64,
    },
    Offset { rows: i32, cols: i32 },
    Discard,
}

impl Mapping {
    fn for_strategy(strategy: PortStrategy, source: &ShapeGeometry, target: &ShapeGeometry) -> Self {
        let row_delta = target.total_rows() as i32 - source.total_rows() as i32;
        let col_delta = target.max_columns() as i32 - source.max_columns() as i32;
        match strategy {
            PortStrategy::Scale => Mapping::Scale {
                source_rows: i64::from(source.total_rows()),
                source_cols: i64::from(source.max_columns()),
                target_rows: i64::from(target.total_rows()),
                target_cols: i64::from(target.max_columns()),
            },
            PortStrategy::CenterClip | PortStrategy::AnchorCenter => Mapping::Offset {
                rows: row_delta.div_euclid(2),
                cols: col_delta.div_euclid(2),
            },
            PortStrategy::AnchorTopLeft => Mapping::Offset {
                rows: row_delta,
                cols: 0,
            },
            PortStrategy::AnchorBottomCenter => Mapping::Offset {
                rows: 0,
                cols: col_delta.div_euclid(2),
            },
            PortStrategy::Discard => Mapping::Discard,
        }
    }

    fn collision(&self) -> Collision {
        match self {
            Mapping::Scale { .. } => Collision::KeepFirst,
            _ => Collision::Overwrite,
        }
    }

    fn map(&self, cell: Cell) -> Option<Cell> {
        match *self {
            Mapping::Scale {
                source_rows,
                source_cols,
                target_rows,
                target_cols,
            } => Some(Cell::new(
                scale_coordinate(cell.row, target_rows, source_rows),
                scale_coordinate(cell.col, target_cols, source_cols),
            )),
            Mapping::Offset { rows, cols } => Some(cell.offset(rows, cols)),
            Mapping::Discard => None,
        }
    }
}

/// `round(value * target / source)`, halves rounded up.
fn scale_coordinate(value: i32, target: i64, source: i64) -> i32 {
    let scaled = (i64::from(value) * target) as f64 / source as f64;
    (scaled + 0.5).floor() as i32
}

/// Remaps `source` onto `target` using `strategy`.
///
/// Cells landing outside the target silhouette are dropped.
pub fn port(source: &DesignStore, target: Arc<ShapeGeometry>, strategy: PortStrategy) -> PortResult {
    let mapping = Mapping::for_strategy(strategy, source.geometry(), &target);
    let mut store = DesignStore::with_normalizer(target, source.normalizer().clone());

    for (cell, color) in source.entries() {
        let Some(mapped) = mapping.map(cell) else {
            continue;
        };
        if !store.geometry().is_cell_active(mapped) {
            continue;
        }
        if mapping.collision() == Collision::KeepFirst && store.get(mapped).is_some() {
            continue;
        }
        store.set(mapped, color.clone());
    }

    let stats = PortStats::new(source.len(), store.len());
    debug!(
        "Ported {} cells with {}: {} kept, {} lost",
        stats.input, strategy, stats.output, stats.lost
    );
    PortResult { store, stats }
}

/// Statistics for porting `source` with `strategy`, without keeping the result.
pub fn preview(source: &DesignStore, target: &Arc<ShapeGeometry>, strategy: PortStrategy) -> PortStats {
    port(source, Arc::clone(target), strategy).stats
}

/// Statistics for every strategy, in [`PortStrategy::ALL`] order.
pub fn preview_all(source: &DesignStore, target: &Arc<ShapeGeometry>) -> Vec<(PortStrategy, PortStats)> {
    PortStrategy::ALL
        .into_iter()
        .map(|strategy| (strategy, preview(source, target, strategy)))
        .collect()
}
