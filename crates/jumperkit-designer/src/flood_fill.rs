//! Region fill over 4-connected active cells.

use crate::operation::{CellDelta, Operation, OperationKind};
use crate::store::DesignStore;
use jumperkit_core::{Cell, Color, ColorNormalizer};
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// Fills the region containing `start` with `fill`.
///
/// Breadth-first over up/down/left/right neighbors. A cell joins the
/// region iff it is active, not yet visited, and its normalized color
/// equals the start cell's color at the time the fill began. Only
/// visited cells are ever written, so the visited set alone guards
/// against revisits.
///
/// Returns an empty operation when `start` is inactive or already
/// carries the fill color.
pub fn flood_fill(
    store: &mut DesignStore,
    start: Cell,
    fill: &Color,
    normalizer: &ColorNormalizer,
) -> Operation {
    let mut op = Operation::new(OperationKind::Fill);
    let geometry = store.geometry().clone();
    if !geometry.is_cell_active(start) {
        return op;
    }

    let target = normalizer.normalize(store.get(start));
    if target == normalizer.normalize(Some(fill)) {
        return op;
    }
    let value = normalizer.to_stored(Some(fill));

    let mut visited: HashSet<Cell> = HashSet::new();
    let mut queue: VecDeque<Cell> = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        let old = store.get(cell).cloned();
        store.write(cell, value.clone());
        op.push(CellDelta::new(cell, old, value.clone()));

        for neighbor in cell.neighbors() {
            if !geometry.is_cell_active(neighbor) || visited.contains(&neighbor) {
                continue;
            }
            if normalizer.normalize(store.get(neighbor)) != target {
                continue;
            }
            visited.insert(neighbor);
            queue.push_back(neighbor);
        }
    }

    debug!("Flood fill from {} changed {} cells", start, op.len());
    op
}
