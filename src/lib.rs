//! # JumperKit
//!
//! An editor engine for colorwork patterns on garment-shaped grids. Users
//! paint cells of a jumper silhouette, mirror edits, flood-fill regions,
//! undo and redo, and switch garment shapes or sizes while keeping as much
//! of the pattern as possible.
//!
//! ## Architecture
//!
//! JumperKit is organized as a workspace with multiple crates:
//!
//! 1. **jumperkit-core** - Cells, colors, shared vocabulary, error taxonomy
//! 2. **jumperkit-shapes** - Row-band geometry and the shape catalog
//! 3. **jumperkit-designer** - Design store, fill, symmetry, history, porting, files
//! 4. **jumperkit-settings** - Editor settings (JSON/TOML)
//! 5. **jumperkit** - Wiring and the headless command-line tool

use anyhow::Context;
use std::sync::Arc;
use tracing::info;

pub use jumperkit_designer as designer;
pub use jumperkit_shapes as shapes;

pub use jumperkit_core::{
    Axis, Cell, Color, ColorNormalizer, ConfigError, DesignError, Error, MirrorMode, Panel,
    PortStrategy, Result,
};

pub use jumperkit_designer::{
    DesignDocument, DesignStore, EditorSession, HistoryLog, Operation, OperationKind, PortReport,
    PortStats, SessionOptions,
};

pub use jumperkit_settings::{EditorSettings, SettingsError};

pub use jumperkit_shapes::{ShapeCatalog, ShapeGeometry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Logs go to stderr so command output on stdout stays clean. The level
/// comes from `RUST_LOG`, defaulting to `info`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

/// Loads the editor settings from their default location.
///
/// A missing file (or a platform without a config directory) yields defaults.
pub fn load_settings() -> anyhow::Result<EditorSettings> {
    match EditorSettings::default_path() {
        Some(path) => EditorSettings::load_or_default(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => Ok(EditorSettings::default()),
    }
}

/// The built-in catalog, extended by the settings' extra catalog file.
///
/// Rejected shapes in the extra catalog are logged and skipped.
pub fn load_catalog(settings: &EditorSettings) -> anyhow::Result<ShapeCatalog> {
    let mut catalog = ShapeCatalog::builtin().context("Built-in shape catalog is invalid")?;

    if let Some(path) = &settings.shapes.catalog_path {
        let load = ShapeCatalog::load_from_file(path)
            .with_context(|| format!("Failed to load shape catalog {}", path.display()))?;
        info!(
            "Merged {} shapes from {} ({} rejected)",
            load.catalog.len(),
            path.display(),
            load.rejected.len()
        );
        catalog.extend(load.catalog);
    }

    Ok(catalog.with_default(
        settings.garment.default_config.as_str(),
        settings.garment.default_size.as_str(),
    ))
}

/// Session options derived from the settings.
pub fn session_options(settings: &EditorSettings) -> SessionOptions {
    SessionOptions {
        history_capacity: settings.history.capacity,
        background: settings.canvas.background_color.clone(),
        mirror: settings.mirror_mode(),
    }
}

/// Opens an editor session configured from `settings`.
pub fn open_session(settings: &EditorSettings) -> anyhow::Result<EditorSession> {
    let catalog = Arc::new(load_catalog(settings)?);
    Ok(EditorSession::new(catalog, session_options(settings)))
}
