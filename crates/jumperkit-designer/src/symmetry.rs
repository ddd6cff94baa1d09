//! Mirror symmetry: live mirrored cell sets and one-shot reflection.
//!
//! Column mirror: `max_columns - col + 1`. Row mirror: `total_rows - row + 1`.

use crate::operation::{CellDelta, Operation, OperationKind};
use crate::store::DesignStore;
use jumperkit_core::{Axis, Cell, Color, ColorNormalizer, MirrorMode};
use jumperkit_shapes::ShapeGeometry;
use smallvec::SmallVec;
use tracing::debug;

/// Up to four cells: original, H-mirror, V-mirror, HV-mirror.
pub type MirroredCells = SmallVec<[Cell; 4]>;

pub fn mirror_col(geometry: &ShapeGeometry, col: i32) -> i32 {
    geometry.max_columns() as i32 - col + 1
}

pub fn mirror_row(geometry: &ShapeGeometry, row: i32) -> i32 {
    geometry.total_rows() as i32 - row + 1
}

/// Mirror image of `cell` across `axis`.
pub fn mirror_cell(geometry: &ShapeGeometry, cell: Cell, axis: Axis) -> Cell {
    match axis {
        Axis::Horizontal => Cell::new(cell.row, mirror_col(geometry, cell.col)),
        Axis::Vertical => Cell::new(mirror_row(geometry, cell.row), cell.col),
    }
}

/// The cells a paint action at `cell` affects under `mode`.
///
/// Always contains `cell` first. Mirror images are added only when they
/// are active and not already present.
pub fn mirrored_cells(geometry: &ShapeGeometry, cell: Cell, mode: MirrorMode) -> MirroredCells {
    let mut cells = MirroredCells::new();
    cells.push(cell);

    let h = Cell::new(cell.row, mirror_col(geometry, cell.col));
    let v = Cell::new(mirror_row(geometry, cell.row), cell.col);
    let hv = Cell::new(v.row, h.col);

    let candidates = [
        (mode.horizontal, h),
        (mode.vertical, v),
        (mode.horizontal && mode.vertical, hv),
    ];
    for (enabled, candidate) in candidates {
        if enabled && geometry.is_cell_active(candidate) && !cells.contains(&candidate) {
            cells.push(candidate);
        }
    }
    cells
}

/// Copies every colored cell onto its mirror image across `axis`.
///
/// Sources are read from a snapshot taken before any write, so a cell
/// overwritten earlier in the same pass is still read with its original
/// color. Cells on the axis and mirrors that already match are skipped.
pub fn reflect(store: &mut DesignStore, axis: Axis, normalizer: &ColorNormalizer) -> Operation {
    let mut op = Operation::new(OperationKind::Reflect);
    let geometry = store.geometry().clone();

    let snapshot: Vec<(Cell, Color)> = store
        .entries()
        .filter(|(_, color)| !normalizer.is_uncolored(Some(color)))
        .map(|(cell, color)| (cell, color.clone()))
        .collect();

    for (cell, color) in snapshot {
        let mirror = mirror_cell(&geometry, cell, axis);
        if mirror == cell || !geometry.is_cell_active(mirror) {
            continue;
        }
        let old = store.get(mirror).cloned();
        if normalizer.same(old.as_ref(), Some(&color)) {
            continue;
        }
        store.set(mirror, color.clone());
        op.push(CellDelta::new(mirror, old, Some(color)));
    }

    debug!("Reflect across {} axis changed {} cells", axis, op.len());
    op
}
