//! JumperKit Settings Crate
//!
//! Editor preferences: history depth, canvas background, default garment,
//! porting strategy, live mirror toggles, and an optional extra shape catalog.

pub mod config;
pub mod error;

pub use config::{
    CanvasSettings, EditorSettings, GarmentSettings, HistorySettings, ShapeSettings,
    SymmetrySettings,
};
pub use error::{SettingsError, SettingsResult};
