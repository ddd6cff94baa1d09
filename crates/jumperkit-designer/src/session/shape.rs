//! Garment configuration and size changes.

use super::EditorSession;
use crate::porting::{port, preview_all, PortStats};
use jumperkit_core::{ConfigError, Panel, PortStrategy};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// What a shape change did to each panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortReport {
    pub config_id: String,
    pub size: String,
    pub strategy: PortStrategy,
    pub front: PortStats,
    pub back: PortStats,
}

impl PortReport {
    pub fn stats(&self, panel: Panel) -> PortStats {
        match panel {
            Panel::Front => self.front,
            Panel::Back => self.back,
        }
    }

    /// Cells lost over both panels.
    pub fn total_lost(&self) -> usize {
        self.front.lost + self.back.lost
    }
}

/// Per-strategy statistics for a prospective shape change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeChangePreview {
    pub front: Vec<(PortStrategy, PortStats)>,
    pub back: Vec<(PortStrategy, PortStats)>,
}

impl EditorSession {
    /// Moves the design onto another garment geometry.
    ///
    /// Both panels are ported with `strategy` and history is reset. An
    /// unknown configuration or size leaves the session untouched.
    pub fn change_shape(
        &mut self,
        config_id: &str,
        size: &str,
        strategy: PortStrategy,
    ) -> Result<PortReport, ConfigError> {
        let target = self.catalog.get(config_id, size)?;

        let front = port(&self.design.front.store, Arc::clone(&target), strategy);
        let back = port(&self.design.back.store, Arc::clone(&target), strategy);

        self.design.front.store = front.store;
        self.design.back.store = back.store;
        self.design.front.touch();
        self.design.back.touch();
        self.geometry = target;
        self.history.reset();

        info!(
            "Changed shape to {}/{} with {}: {} front and {} back cells lost",
            config_id, size, strategy, front.stats.lost, back.stats.lost
        );

        Ok(PortReport {
            config_id: config_id.to_string(),
            size: size.to_string(),
            strategy,
            front: front.stats,
            back: back.stats,
        })
    }

    /// Statistics every strategy would produce for a shape change.
    pub fn preview_shape_change(
        &self,
        config_id: &str,
        size: &str,
    ) -> Result<ShapeChangePreview, ConfigError> {
        let target = self.catalog.get(config_id, size)?;
        Ok(ShapeChangePreview {
            front: preview_all(&self.design.front.store, &target),
            back: preview_all(&self.design.back.store, &target),
        })
    }
}
