//! File I/O operations (save, load, new) for the editor session.

use super::{EditorSession, GarmentDesign, PanelDesign};
use crate::serialization::{DesignDocument, DESIGN_FORMAT_VERSION};
use crate::store::{DesignStore, ImportSummary};
use jumperkit_core::Panel;
use std::sync::Arc;
use tracing::{info, warn};

/// Import outcome for both panels of a loaded document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub front: ImportSummary,
    pub back: ImportSummary,
    /// Whether the requested garment was missing and a fallback was used.
    pub fell_back: bool,
}

impl LoadReport {
    pub fn skipped(&self) -> usize {
        self.front.skipped() + self.back.skipped()
    }
}

impl EditorSession {
    /// Snapshot of the design in its persisted form.
    pub fn to_document(&self) -> DesignDocument {
        DesignDocument {
            version: DESIGN_FORMAT_VERSION,
            id: self.design.id,
            name: self.design.name.clone(),
            config_id: self.geometry.config_id().to_string(),
            size: self.geometry.size().to_string(),
            front: self.design.front.store.export(),
            back: self.design.back.store.export(),
            created: self.design.created,
            front_modified: self.design.front.modified,
            back_modified: self.design.back.modified,
        }
    }

    /// Replaces the open design with `document`.
    ///
    /// An unknown garment falls back to the catalog default. Entries that
    /// are malformed or inactive under the resulting geometry are skipped
    /// and counted. History resets and the front panel becomes active.
    pub fn load_document(&mut self, document: &DesignDocument) -> LoadReport {
        let exact = self.catalog.get(&document.config_id, &document.size).ok();
        let fell_back = exact.is_none();
        let geometry =
            exact.unwrap_or_else(|| self.catalog.get_or_default(&document.config_id, &document.size));

        let (front, front_summary) =
            DesignStore::import(Arc::clone(&geometry), document.panel(Panel::Front), &self.normalizer);
        let (back, back_summary) =
            DesignStore::import(Arc::clone(&geometry), document.panel(Panel::Back), &self.normalizer);

        self.design = GarmentDesign {
            id: document.id,
            name: document.name.clone(),
            created: document.created,
            front: PanelDesign {
                store: front,
                modified: document.front_modified,
            },
            back: PanelDesign {
                store: back,
                modified: document.back_modified,
            },
        };
        self.geometry = geometry;
        self.active_panel = Panel::Front;
        self.history.reset();

        let report = LoadReport {
            front: front_summary,
            back: back_summary,
            fell_back,
        };
        if report.skipped() > 0 {
            warn!("Skipped {} design entries while loading", report.skipped());
        }
        info!(
            "Loaded design '{}' on {}/{} ({} cells)",
            self.design.name,
            self.geometry.config_id(),
            self.geometry.size(),
            self.design.colored_cells()
        );
        report
    }

    /// Starts a blank design on the current geometry.
    pub fn new_design(&mut self, name: impl Into<String>) {
        self.design = GarmentDesign::new(name, Arc::clone(&self.geometry), &self.normalizer);
        self.active_panel = Panel::Front;
        self.history.reset();
    }

    /// Save design to file.
    pub fn save_to_file(&self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        self.to_document().save_to_file(path)
    }

    /// Load design from file.
    pub fn load_from_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<LoadReport> {
        let document = DesignDocument::load_from_file(path)?;
        Ok(self.load_document(&document))
    }
}
