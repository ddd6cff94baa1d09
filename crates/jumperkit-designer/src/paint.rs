//! Direct edits: painting, erasing, clearing, and copying between panels.
//!
//! Each function mutates the store and returns the [`Operation`] it
//! performed. Inactive cells and cells whose color would not change are
//! skipped, so the result may be empty.

use crate::operation::{CellDelta, Operation, OperationKind};
use crate::store::DesignStore;
use jumperkit_core::{Cell, Color, ColorNormalizer};

/// Paints every cell in `cells` with `color`.
///
/// Painting with an uncolored value (background, `transparent`, empty)
/// erases instead.
pub fn paint(
    store: &mut DesignStore,
    cells: impl IntoIterator<Item = Cell>,
    color: &Color,
    normalizer: &ColorNormalizer,
) -> Operation {
    let kind = if normalizer.is_uncolored(Some(color)) {
        OperationKind::Erase
    } else {
        OperationKind::Paint
    };
    write_cells(store, cells, normalizer.to_stored(Some(color)), kind, normalizer)
}

/// Uncolors every cell in `cells`.
pub fn erase(
    store: &mut DesignStore,
    cells: impl IntoIterator<Item = Cell>,
    normalizer: &ColorNormalizer,
) -> Operation {
    write_cells(store, cells, None, OperationKind::Erase, normalizer)
}

fn write_cells(
    store: &mut DesignStore,
    cells: impl IntoIterator<Item = Cell>,
    value: Option<Color>,
    kind: OperationKind,
    normalizer: &ColorNormalizer,
) -> Operation {
    let mut op = Operation::new(kind);
    for cell in cells {
        if !store.geometry().is_cell_active(cell) {
            continue;
        }
        let old = store.get(cell).cloned();
        if normalizer.same(old.as_ref(), value.as_ref()) {
            continue;
        }
        store.write(cell, value.clone());
        op.push(CellDelta::new(cell, old, value.clone()));
    }
    op
}

/// Uncolors the whole panel as one operation.
pub fn clear_all(store: &mut DesignStore) -> Operation {
    let mut op = Operation::new(OperationKind::Clear);
    for (cell, color) in store.entries() {
        op.push(CellDelta::new(cell, Some(color.clone()), None));
    }
    store.clear();
    op
}

/// Replaces `target`'s content with `source`'s, cell for cell.
///
/// Source cells that are inactive in the target geometry are dropped, and
/// cells whose color already matches after normalization are left alone.
pub fn copy_into(
    source: &DesignStore,
    target: &mut DesignStore,
    normalizer: &ColorNormalizer,
) -> Operation {
    let mut op = Operation::new(OperationKind::CopyPanel);

    let stale: Vec<(Cell, Color)> = target
        .entries()
        .filter(|(cell, _)| source.get(*cell).is_none())
        .map(|(cell, color)| (cell, color.clone()))
        .collect();
    for (cell, color) in stale {
        target.remove(cell);
        op.push(CellDelta::new(cell, Some(color), None));
    }

    for (cell, color) in source.entries() {
        if !target.geometry().is_cell_active(cell) {
            continue;
        }
        let old = target.get(cell).cloned();
        if normalizer.same(old.as_ref(), Some(color)) {
            continue;
        }
        target.set(cell, color.clone());
        op.push(CellDelta::new(cell, old, Some(color.clone())));
    }
    op
}
