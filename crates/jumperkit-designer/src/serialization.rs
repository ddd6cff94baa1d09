//! Serialization and deserialization for design files.
//!
//! Two on-disk formats exist. Version 1 is a flat JSON object mapping
//! `"{row}-{col}"` keys to colors, with no shape metadata. Version 2 carries
//! both panels, the garment configuration, and timestamps. Reading accepts
//! either; writing always produces version 2.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use jumperkit_core::{DesignError, Panel, DEFAULT_CONFIG_ID, DEFAULT_SIZE};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

/// Current design file format version
pub const DESIGN_FORMAT_VERSION: u64 = 2;

/// Flat single-panel format
pub const LEGACY_FORMAT_VERSION: u64 = 1;

/// Persisted panel content: cell key to color text.
pub type CellMap = BTreeMap<String, String>;

/// Complete design file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignDocument {
    pub version: u64,
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    pub config_id: String,
    pub size: String,
    #[serde(default)]
    pub front: CellMap,
    #[serde(default)]
    pub back: CellMap,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub front_modified: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub back_modified: DateTime<Utc>,
}

impl DesignDocument {
    /// Create an empty design for a garment configuration.
    pub fn new(
        name: impl Into<String>,
        config_id: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            version: DESIGN_FORMAT_VERSION,
            id: Uuid::new_v4(),
            name: name.into(),
            config_id: config_id.into(),
            size: size.into(),
            front: CellMap::new(),
            back: CellMap::new(),
            created: now,
            front_modified: now,
            back_modified: now,
        }
    }

    /// Upgrade a version 1 flat mapping.
    ///
    /// The cells become the front panel of the default configuration and
    /// the back panel starts empty.
    pub fn from_legacy(cells: CellMap) -> Self {
        let mut document = Self::new("Untitled", DEFAULT_CONFIG_ID, DEFAULT_SIZE);
        info!(
            "Migrated version {} design with {} cells to {}/{}",
            LEGACY_FORMAT_VERSION,
            cells.len(),
            DEFAULT_CONFIG_ID,
            DEFAULT_SIZE
        );
        document.front = cells;
        document
    }

    pub fn panel(&self, panel: Panel) -> &CellMap {
        match panel {
            Panel::Front => &self.front,
            Panel::Back => &self.back,
        }
    }

    pub fn panel_mut(&mut self, panel: Panel) -> &mut CellMap {
        match panel {
            Panel::Front => &mut self.front,
            Panel::Back => &mut self.back,
        }
    }

    pub fn modified(&self, panel: Panel) -> DateTime<Utc> {
        match panel {
            Panel::Front => self.front_modified,
            Panel::Back => self.back_modified,
        }
    }

    /// Parse either format, migrating version 1 documents.
    pub fn from_json(json: &str) -> std::result::Result<Self, DesignError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Interpret an already parsed JSON value.
    pub fn from_value(value: Value) -> std::result::Result<Self, DesignError> {
        match detect_version(&value)? {
            LEGACY_FORMAT_VERSION => Ok(Self::from_legacy(legacy_cells(value)?)),
            DESIGN_FORMAT_VERSION => Ok(serde_json::from_value(value)?),
            other => Err(DesignError::UnsupportedVersion(other)),
        }
    }

    /// Serialize as a version 2 document.
    pub fn to_json(&self) -> std::result::Result<String, DesignError> {
        let mut document = self.clone();
        document.version = DESIGN_FORMAT_VERSION;
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Save design to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json().context("Failed to serialize design")?;

        std::fs::write(path.as_ref(), json).context("Failed to write design file")?;

        Ok(())
    }

    /// Load design from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read design file")?;

        let design = Self::from_json(&content)
            .with_context(|| format!("Failed to parse design file {}", path.as_ref().display()))?;

        Ok(design)
    }
}

/// Format version of a parsed design document.
///
/// Objects without a `version` key are version 1. A version 1 file may
/// also carry an explicit `"version": 1` next to its cell keys.
pub fn detect_version(value: &Value) -> std::result::Result<u64, DesignError> {
    let object = value.as_object().ok_or_else(|| {
        DesignError::MalformedDocument("top level is not a JSON object".to_string())
    })?;
    match object.get("version") {
        None => Ok(LEGACY_FORMAT_VERSION),
        Some(version) => version.as_u64().ok_or_else(|| {
            DesignError::MalformedDocument(format!("version is not an integer: {}", version))
        }),
    }
}

fn legacy_cells(value: Value) -> std::result::Result<CellMap, DesignError> {
    let Value::Object(object) = value else {
        return Err(DesignError::MalformedDocument(
            "top level is not a JSON object".to_string(),
        ));
    };

    let mut cells = CellMap::new();
    for (key, value) in object {
        if key == "version" {
            continue;
        }
        match value {
            Value::String(color) => {
                cells.insert(key, color);
            }
            other => {
                return Err(DesignError::MalformedDocument(format!(
                    "cell '{}' has non-string color {}",
                    key, other
                )));
            }
        }
    }
    Ok(cells)
}
