//! Editor settings for JumperKit
//!
//! Provides settings file handling and validation. Supports JSON and TOML
//! file formats, chosen by extension, stored in the platform config
//! directory by default.
//!
//! Settings are organized into sections:
//! - History (undo depth)
//! - Canvas (background color, which also counts as "uncolored")
//! - Garment (default configuration, size, porting strategy)
//! - Symmetry (live mirror toggles)
//! - Shapes (extra shape catalog file)

use crate::error::{SettingsError, SettingsResult};
use jumperkit_core::{MirrorMode, PortStrategy, DEFAULT_BACKGROUND, DEFAULT_CONFIG_ID, DEFAULT_SIZE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "jumperkit";

/// Settings file name inside [`APP_DIR_NAME`].
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Undo history settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of undoable operations per panel
    pub capacity: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { capacity: 100 }
    }
}

/// Canvas settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Background color; cells of this color count as uncolored
    pub background_color: String,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

/// Garment defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GarmentSettings {
    /// Configuration opened for new designs
    pub default_config: String,
    /// Size opened for new designs
    pub default_size: String,
    /// Strategy preselected when the shape changes
    pub port_strategy: PortStrategy,
}

impl Default for GarmentSettings {
    fn default() -> Self {
        Self {
            default_config: DEFAULT_CONFIG_ID.to_string(),
            default_size: DEFAULT_SIZE.to_string(),
            port_strategy: PortStrategy::default(),
        }
    }
}

/// Live mirror toggles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymmetrySettings {
    pub mirror_horizontal: bool,
    pub mirror_vertical: bool,
}

/// Shape catalog settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeSettings {
    /// JSON catalog merged over the built-in shapes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

/// Complete editor settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub history: HistorySettings,
    pub canvas: CanvasSettings,
    pub garment: GarmentSettings,
    pub symmetry: SymmetrySettings,
    pub shapes: ShapeSettings,
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl EditorSettings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/jumperkit/settings.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, treating a missing file as defaults
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save settings to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        if self.history.capacity == 0 {
            return Err(SettingsError::invalid("history.capacity", "must be > 0"));
        }

        if self.canvas.background_color.trim().is_empty() {
            return Err(SettingsError::invalid(
                "canvas.background_color",
                "must not be empty",
            ));
        }

        if self.garment.default_config.trim().is_empty() {
            return Err(SettingsError::invalid(
                "garment.default_config",
                "must not be empty",
            ));
        }

        if self.garment.default_size.trim().is_empty() {
            return Err(SettingsError::invalid(
                "garment.default_size",
                "must not be empty",
            ));
        }

        Ok(())
    }

    /// Live mirror mode described by the symmetry section
    pub fn mirror_mode(&self) -> MirrorMode {
        MirrorMode::new(self.symmetry.mirror_horizontal, self.symmetry.mirror_vertical)
    }
}
