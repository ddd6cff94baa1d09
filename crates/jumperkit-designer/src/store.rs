//! Design store: the colored-cell mapping of one garment panel.
//!
//! Absence of a key means uncolored, and it is the only stored form of
//! uncolored: writing an uncolored value removes the entry. Writes addressed
//! at cells that are not active under the store's geometry are ignored, so
//! callers can hand over mirrored, ported, or filled candidate sets without
//! pre-filtering.

use jumperkit_core::{Cell, Color, ColorNormalizer};
use jumperkit_shapes::ShapeGeometry;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

/// Colored cells of one panel.
///
/// Entries iterate row-major ascending. That order is deterministic but
/// carries no meaning beyond the porting tie-break documented there.
#[derive(Debug, Clone)]
pub struct DesignStore {
    geometry: Arc<ShapeGeometry>,
    normalizer: ColorNormalizer,
    cells: BTreeMap<Cell, Color>,
}

/// Outcome of importing a persisted mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub invalid_keys: usize,
    pub inactive: usize,
    pub uncolored: usize,
}

impl ImportSummary {
    pub fn skipped(&self) -> usize {
        self.invalid_keys + self.inactive + self.uncolored
    }
}

impl DesignStore {
    /// Creates an empty store over `geometry` with the default background.
    pub fn new(geometry: Arc<ShapeGeometry>) -> Self {
        Self::with_normalizer(geometry, ColorNormalizer::default())
    }

    /// Creates an empty store whose uncolored values follow `normalizer`.
    pub fn with_normalizer(geometry: Arc<ShapeGeometry>, normalizer: ColorNormalizer) -> Self {
        Self {
            geometry,
            normalizer,
            cells: BTreeMap::new(),
        }
    }

    pub fn geometry(&self) -> &Arc<ShapeGeometry> {
        &self.geometry
    }

    pub fn normalizer(&self) -> &ColorNormalizer {
        &self.normalizer
    }

    pub fn get(&self, cell: Cell) -> Option<&Color> {
        self.cells.get(&cell)
    }

    /// Colors an active cell. Returns `false` (and does nothing) for inactive cells.
    ///
    /// An uncolored value (empty, `transparent`, background) removes the entry.
    pub fn set(&mut self, cell: Cell, color: Color) -> bool {
        if !self.geometry.is_cell_active(cell) {
            return false;
        }
        if self.normalizer.is_uncolored(Some(&color)) {
            self.cells.remove(&cell);
        } else {
            self.cells.insert(cell, color);
        }
        true
    }

    /// Uncolors a cell, returning its previous color.
    pub fn remove(&mut self, cell: Cell) -> Option<Color> {
        self.cells.remove(&cell)
    }

    /// Sets or removes depending on `color`.
    pub fn write(&mut self, cell: Cell, color: Option<Color>) -> bool {
        match color {
            Some(color) => self.set(cell, color),
            None => {
                self.remove(cell);
                true
            }
        }
    }

    /// Colored cells, row-major ascending.
    pub fn entries(&self) -> impl Iterator<Item = (Cell, &Color)> {
        self.cells.iter().map(|(cell, color)| (*cell, color))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Drops entries no longer active under the store's geometry.
    pub fn retain_active(&mut self) -> usize {
        let before = self.cells.len();
        let geometry = Arc::clone(&self.geometry);
        self.cells.retain(|cell, _| geometry.is_cell_active(*cell));
        before - self.cells.len()
    }

    /// Cell count per normalized color, ignoring uncolored entries.
    pub fn color_counts(&self, normalizer: &ColorNormalizer) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for color in self.cells.values() {
            if let Some(key) = normalizer.normalize(Some(color)) {
                *counts.entry(key).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Persisted form: `"{row}-{col}"` to color text.
    pub fn export(&self) -> BTreeMap<String, String> {
        self.cells
            .iter()
            .map(|(cell, color)| (cell.key(), color.as_str().to_string()))
            .collect()
    }

    /// Rebuilds a store from its persisted form.
    ///
    /// Malformed keys, inactive cells, and uncolored values are skipped and
    /// counted rather than failing the whole import.
    pub fn import(
        geometry: Arc<ShapeGeometry>,
        entries: &BTreeMap<String, String>,
        normalizer: &ColorNormalizer,
    ) -> (Self, ImportSummary) {
        let mut store = Self::with_normalizer(geometry, normalizer.clone());
        let mut summary = ImportSummary::default();

        for (key, value) in entries {
            let cell = match Cell::from_key(key) {
                Ok(cell) => cell,
                Err(e) => {
                    warn!("Skipping design entry: {}", e);
                    summary.invalid_keys += 1;
                    continue;
                }
            };
            let color = Color::new(value.as_str());
            if normalizer.is_uncolored(Some(&color)) {
                summary.uncolored += 1;
            } else if store.set(cell, color) {
                summary.imported += 1;
            } else {
                summary.inactive += 1;
            }
        }

        if summary.inactive > 0 {
            warn!(
                "Skipped {} cells outside shape {}/{}",
                summary.inactive,
                store.geometry.config_id(),
                store.geometry.size()
            );
        }
        (store, summary)
    }
}
