//! Undo/redo history for one panel's editing session.
//!
//! Two bounded stacks. Recording a new operation clears redo; the undo
//! stack evicts its oldest entry once capacity is exceeded. The session
//! resets history on panel switch, shape change, and design load, so
//! recorded deltas always address the current geometry.

use crate::operation::{Operation, OperationKind};
use crate::store::DesignStore;
use std::collections::VecDeque;
use tracing::debug;

/// Default maximum number of undoable operations.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Undo/redo stacks of [`Operation`]s.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    undo_stack: VecDeque<Operation>,
    redo_stack: Vec<Operation>,
    capacity: usize,
}

impl HistoryLog {
    /// Creates a history holding at most `capacity` undoable operations.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            undo_stack: VecDeque::with_capacity(capacity),
            redo_stack: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Records an operation that has already been applied.
    ///
    /// Empty operations are ignored. Returns whether anything was recorded.
    pub fn record(&mut self, op: Operation) -> bool {
        if op.is_empty() {
            return false;
        }
        self.redo_stack.clear();
        self.undo_stack.push_back(op);
        while self.undo_stack.len() > self.capacity {
            self.undo_stack.pop_front();
        }
        true
    }

    /// Reverts the most recent operation on `store`.
    pub fn undo(&mut self, store: &mut DesignStore) -> Option<&Operation> {
        let op = self.undo_stack.pop_back()?;
        op.apply_reverse(store);
        debug!("Undo {} ({} cells)", op.kind(), op.len());
        self.redo_stack.push(op);
        self.redo_stack.last()
    }

    /// Re-applies the most recently undone operation on `store`.
    pub fn redo(&mut self, store: &mut DesignStore) -> Option<&Operation> {
        let op = self.redo_stack.pop()?;
        op.apply_forward(store);
        debug!("Redo {} ({} cells)", op.kind(), op.len());
        self.undo_stack.push_back(op);
        self.undo_stack.back()
    }

    /// Empties both stacks.
    pub fn reset(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Kind of the operation `undo` would revert.
    pub fn peek_undo_kind(&self) -> Option<OperationKind> {
        self.undo_stack.back().map(Operation::kind)
    }

    /// Kind of the operation `redo` would re-apply.
    pub fn peek_redo_kind(&self) -> Option<OperationKind> {
        self.redo_stack.last().map(Operation::kind)
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
