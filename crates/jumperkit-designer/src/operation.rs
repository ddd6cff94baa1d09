//! Undoable operations: ordered batches of cell color deltas.

use crate::store::DesignStore;
use jumperkit_core::{Cell, Color};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of user action produced an operation, for undo/redo labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Paint,
    Erase,
    Fill,
    Reflect,
    Clear,
    CopyPanel,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paint => write!(f, "Paint"),
            Self::Erase => write!(f, "Erase"),
            Self::Fill => write!(f, "Fill"),
            Self::Reflect => write!(f, "Reflect"),
            Self::Clear => write!(f, "Clear"),
            Self::CopyPanel => write!(f, "Copy Panel"),
        }
    }
}

/// One cell's color change. `None` means uncolored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellDelta {
    pub cell: Cell,
    pub old: Option<Color>,
    pub new: Option<Color>,
}

impl CellDelta {
    pub fn new(cell: Cell, old: Option<Color>, new: Option<Color>) -> Self {
        Self { cell, old, new }
    }
}

/// An ordered list of deltas forming one undoable action.
///
/// An empty operation is a valid result meaning "nothing changed"; callers
/// check [`Operation::is_empty`] before recording or refreshing views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    kind: OperationKind,
    deltas: Vec<CellDelta>,
}

impl Operation {
    pub fn new(kind: OperationKind) -> Self {
        Self {
            kind,
            deltas: Vec::new(),
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn deltas(&self) -> &[CellDelta] {
        &self.deltas
    }

    pub fn push(&mut self, delta: CellDelta) {
        self.deltas.push(delta);
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    /// Cells touched, in delta order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.deltas.iter().map(|d| d.cell)
    }

    /// Writes every delta's new color, first to last.
    pub fn apply_forward(&self, store: &mut DesignStore) {
        for delta in &self.deltas {
            store.write(delta.cell, delta.new.clone());
        }
    }

    /// Writes every delta's old color, last to first.
    pub fn apply_reverse(&self, store: &mut DesignStore) {
        for delta in self.deltas.iter().rev() {
            store.write(delta.cell, delta.old.clone());
        }
    }
}
