//! Editing actions on the active panel, and undo/redo.

use super::EditorSession;
use crate::flood_fill::flood_fill;
use crate::operation::{Operation, OperationKind};
use crate::paint::{clear_all, copy_into, erase, paint};
use crate::store::DesignStore;
use crate::symmetry::{mirrored_cells, reflect};
use jumperkit_core::{Axis, Cell, Color, ColorNormalizer, Panel};
use tracing::debug;

impl EditorSession {
    /// Runs `edit` against the active panel and records the result.
    fn edit_active(
        &mut self,
        edit: impl FnOnce(&mut DesignStore, &ColorNormalizer) -> Operation,
    ) -> Operation {
        let panel = self.design.panel_mut(self.active_panel);
        let op = edit(&mut panel.store, &self.normalizer);
        if !op.is_empty() {
            panel.touch();
            self.history.record(op.clone());
        }
        op
    }

    /// Paints `cell` and, with a mirror mode on, its mirror images.
    pub fn paint_cell(&mut self, cell: Cell, color: &Color) -> Operation {
        if !self.geometry.is_cell_active(cell) {
            return Operation::new(OperationKind::Paint);
        }
        let cells = mirrored_cells(&self.geometry, cell, self.mirror);
        self.edit_active(|store, normalizer| paint(store, cells, color, normalizer))
    }

    /// Paints a batch of cells as one operation, e.g. a drag stroke.
    pub fn paint_cells(&mut self, cells: &[Cell], color: &Color) -> Operation {
        let mut targets = Vec::with_capacity(cells.len());
        for &cell in cells {
            if self.geometry.is_cell_active(cell) {
                targets.extend(mirrored_cells(&self.geometry, cell, self.mirror));
            }
        }
        self.edit_active(|store, normalizer| paint(store, targets, color, normalizer))
    }

    /// Uncolors `cell` and its live mirror images.
    pub fn erase_cell(&mut self, cell: Cell) -> Operation {
        if !self.geometry.is_cell_active(cell) {
            return Operation::new(OperationKind::Erase);
        }
        let cells = mirrored_cells(&self.geometry, cell, self.mirror);
        self.edit_active(|store, normalizer| erase(store, cells, normalizer))
    }

    /// Flood fills from `start`. Mirror mode does not apply.
    pub fn fill(&mut self, start: Cell, color: &Color) -> Operation {
        self.edit_active(|store, normalizer| flood_fill(store, start, color, normalizer))
    }

    /// Reflects the whole active panel across `axis`.
    pub fn reflect(&mut self, axis: Axis) -> Operation {
        self.edit_active(|store, normalizer| reflect(store, axis, normalizer))
    }

    /// Uncolors the whole active panel.
    pub fn clear_panel(&mut self) -> Operation {
        self.edit_active(|store, _| clear_all(store))
    }

    /// Replaces `to` with the content of `from`.
    ///
    /// Only the active panel has history, so the copy is recorded only
    /// when `to` is the active panel. The operation is returned either way.
    pub fn copy_panel(&mut self, from: Panel, to: Panel) -> Operation {
        if from == to {
            return Operation::new(OperationKind::CopyPanel);
        }
        let source = self.design.panel(from).store.clone();
        if to == self.active_panel {
            return self.edit_active(|store, normalizer| copy_into(&source, store, normalizer));
        }

        let target = self.design.panel_mut(to);
        let op = copy_into(&source, &mut target.store, &self.normalizer);
        if !op.is_empty() {
            target.touch();
        }
        debug!("Copied {} panel onto inactive {} panel", from, to);
        op
    }

    /// Reverts the last recorded operation on the active panel.
    pub fn undo(&mut self) -> Option<Operation> {
        let panel = self.design.panel_mut(self.active_panel);
        let op = self.history.undo(&mut panel.store)?.clone();
        panel.touch();
        Some(op)
    }

    /// Re-applies the last undone operation on the active panel.
    pub fn redo(&mut self) -> Option<Operation> {
        let panel = self.design.panel_mut(self.active_panel);
        let op = self.history.redo(&mut panel.store)?.clone();
        panel.touch();
        Some(op)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
