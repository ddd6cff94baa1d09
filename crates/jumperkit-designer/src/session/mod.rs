//! Editor session: the orchestration context around the stateless engines.
//!
//! The session owns the garment design, the active panel, the live mirror
//! mode, and the undo history. Every editing action calls an engine,
//! records its [`Operation`](crate::Operation) and hands it back so the
//! caller can refresh whatever views depend on the touched cells.
//!
//! This module is split into submodules:
//! - `editing`: paint, fill, reflect, clear, copy, undo/redo
//! - `shape`: configuration/size changes and porting previews
//! - `file_io`: conversion to and from persisted documents

mod editing;
mod file_io;
mod shape;

pub use file_io::LoadReport;
pub use shape::{PortReport, ShapeChangePreview};

use crate::history::{HistoryLog, DEFAULT_HISTORY_CAPACITY};
use crate::store::DesignStore;
use chrono::{DateTime, Utc};
use jumperkit_core::{ColorNormalizer, MirrorMode, Panel, DEFAULT_BACKGROUND};
use jumperkit_shapes::{ShapeCatalog, ShapeGeometry};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Session tunables, usually taken from the editor settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub history_capacity: usize,
    pub background: String,
    pub mirror: MirrorMode,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            background: DEFAULT_BACKGROUND.to_string(),
            mirror: MirrorMode::OFF,
        }
    }
}

/// One panel's cells and when they last changed.
#[derive(Debug, Clone)]
pub struct PanelDesign {
    pub store: DesignStore,
    pub modified: DateTime<Utc>,
}

impl PanelDesign {
    fn new(geometry: Arc<ShapeGeometry>, normalizer: &ColorNormalizer, now: DateTime<Utc>) -> Self {
        Self {
            store: DesignStore::with_normalizer(geometry, normalizer.clone()),
            modified: now,
        }
    }

    pub(crate) fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

/// Front and back panels of one garment.
#[derive(Debug, Clone)]
pub struct GarmentDesign {
    pub id: Uuid,
    pub name: String,
    pub created: DateTime<Utc>,
    pub front: PanelDesign,
    pub back: PanelDesign,
}

impl GarmentDesign {
    /// An empty design over `geometry`.
    pub fn new(
        name: impl Into<String>,
        geometry: Arc<ShapeGeometry>,
        normalizer: &ColorNormalizer,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created: now,
            front: PanelDesign::new(Arc::clone(&geometry), normalizer, now),
            back: PanelDesign::new(geometry, normalizer, now),
        }
    }

    pub fn panel(&self, panel: Panel) -> &PanelDesign {
        match panel {
            Panel::Front => &self.front,
            Panel::Back => &self.back,
        }
    }

    pub fn panel_mut(&mut self, panel: Panel) -> &mut PanelDesign {
        match panel {
            Panel::Front => &mut self.front,
            Panel::Back => &mut self.back,
        }
    }

    /// Total colored cells over both panels.
    pub fn colored_cells(&self) -> usize {
        self.front.store.len() + self.back.store.len()
    }
}

/// Editing context for one open design.
#[derive(Debug, Clone)]
pub struct EditorSession {
    catalog: Arc<ShapeCatalog>,
    geometry: Arc<ShapeGeometry>,
    design: GarmentDesign,
    active_panel: Panel,
    mirror: MirrorMode,
    history: HistoryLog,
    normalizer: ColorNormalizer,
}

impl EditorSession {
    /// Opens a blank design on the catalog's default garment.
    pub fn new(catalog: Arc<ShapeCatalog>, options: SessionOptions) -> Self {
        let geometry = catalog.default_geometry();
        debug!(
            "New session on {}/{} ({}x{})",
            geometry.config_id(),
            geometry.size(),
            geometry.total_rows(),
            geometry.max_columns()
        );
        let normalizer = ColorNormalizer::new(&options.background);
        Self {
            design: GarmentDesign::new("Untitled", Arc::clone(&geometry), &normalizer),
            catalog,
            geometry,
            active_panel: Panel::Front,
            mirror: options.mirror,
            history: HistoryLog::new(options.history_capacity),
            normalizer,
        }
    }

    pub fn catalog(&self) -> &Arc<ShapeCatalog> {
        &self.catalog
    }

    pub fn geometry(&self) -> &Arc<ShapeGeometry> {
        &self.geometry
    }

    pub fn design(&self) -> &GarmentDesign {
        &self.design
    }

    pub fn active_panel(&self) -> Panel {
        self.active_panel
    }

    pub fn mirror_mode(&self) -> MirrorMode {
        self.mirror
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn normalizer(&self) -> &ColorNormalizer {
        &self.normalizer
    }

    /// Cells of `panel`.
    pub fn store(&self, panel: Panel) -> &DesignStore {
        &self.design.panel(panel).store
    }

    /// Cells of the panel being edited.
    pub fn active_store(&self) -> &DesignStore {
        self.store(self.active_panel)
    }

    pub fn set_mirror_mode(&mut self, mode: MirrorMode) {
        self.mirror = mode;
    }

    /// Makes `panel` the edited panel. History is per panel, so it resets.
    pub fn switch_panel(&mut self, panel: Panel) {
        if panel == self.active_panel {
            return;
        }
        self.active_panel = panel;
        self.history.reset();
        debug!("Switched to {} panel", panel);
    }

    /// Renames the design.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.design.name = name.into();
    }
}
