//! # JumperKit Core
//!
//! Core types shared by every JumperKit crate: grid cells and their
//! persisted key format, opaque color values with "uncolored"
//! normalization, panel and strategy vocabulary, and the error taxonomy.

pub mod cell;
pub mod color;
pub mod error;
pub mod types;

pub use cell::Cell;
pub use color::{Color, ColorNormalizer, DEFAULT_BACKGROUND, TRANSPARENT};
pub use error::{ConfigError, DesignError, Error, Result};
pub use types::{Axis, MirrorMode, Panel, PortStrategy};

/// Configuration used when a design carries no shape metadata (legacy v1 files).
pub const DEFAULT_CONFIG_ID: &str = "classic";

/// Size used together with [`DEFAULT_CONFIG_ID`].
pub const DEFAULT_SIZE: &str = "m";
