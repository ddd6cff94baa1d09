//! # JumperKit Shapes
//!
//! Geometry of a garment silhouette laid flat: a grid whose rows each hold
//! a contiguous, centered run of active columns. Rows are grouped into
//! bands sharing one column rule.
//!
//! ## Core Components
//!
//! - **RowBand**: a contiguous row range with a fixed or tapering column rule
//! - **ShapeGeometry**: a validated, immutable grid for one configuration and size
//! - **ShapeCatalog**: every known configuration/size pair, with fallback
//!
//! ```rust,ignore
//! use jumperkit_shapes::ShapeCatalog;
//!
//! let catalog = ShapeCatalog::builtin()?;
//! let geometry = catalog.get("classic", "m")?;
//! assert!(geometry.is_active(1, geometry.max_columns() as i32 / 2));
//! ```

pub mod band;
pub mod catalog;
pub mod descriptor;
pub mod geometry;

pub use band::{ColumnRule, RowBand};
pub use catalog::{CatalogLoad, ConfigEntry, RejectedShape, ShapeCatalog};
pub use descriptor::{CatalogDescriptor, ConfigDescriptor, RowBandDescriptor, ShapeGeometryDescriptor};
pub use geometry::{ColumnRange, ShapeGeometry, MAX_GRID_DIMENSION};
