//! # JumperKit Designer
//!
//! The pattern grid engine: colored cells over a garment silhouette and the
//! algorithms that edit them.
//!
//! ## Core Components
//!
//! - **DesignStore**: colored cells of one panel, keyed row-major
//! - **Operations**: undoable batches of cell color deltas
//! - **Flood Fill**: 4-connected region fill
//! - **Symmetry**: live mirror multiplier and one-shot reflection
//! - **History**: bounded undo/redo stacks
//! - **Porting**: remapping a design onto another garment geometry
//! - **Serialization**: version 1 and version 2 design documents
//! - **EditorSession**: orchestration context owning both panels and history
//!
//! The engines are plain functions over a [`DesignStore`]; they mutate it
//! and return the [`Operation`] they performed. Only [`EditorSession`]
//! holds state across calls.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jumperkit_designer::{EditorSession, SessionOptions};
//! use jumperkit_shapes::ShapeCatalog;
//!
//! let catalog = std::sync::Arc::new(ShapeCatalog::builtin()?);
//! let mut session = EditorSession::new(catalog, SessionOptions::default());
//! session.paint_cell(Cell::new(10, 20), &Color::new("#aa3355"));
//! session.undo();
//! ```

pub mod flood_fill;
pub mod history;
pub mod operation;
pub mod paint;
pub mod porting;
pub mod serialization;
pub mod session;
pub mod store;
pub mod symmetry;

pub use flood_fill::flood_fill;
pub use history::{HistoryLog, DEFAULT_HISTORY_CAPACITY};
pub use operation::{CellDelta, Operation, OperationKind};
pub use paint::{clear_all, copy_into, erase, paint};
pub use porting::{port, preview, preview_all, PortResult, PortStats};
pub use serialization::{
    detect_version, CellMap, DesignDocument, DESIGN_FORMAT_VERSION, LEGACY_FORMAT_VERSION,
};
pub use session::{
    EditorSession, GarmentDesign, LoadReport, PanelDesign, PortReport, SessionOptions,
    ShapeChangePreview,
};
pub use store::{DesignStore, ImportSummary};
pub use symmetry::{mirror_cell, mirrored_cells, reflect, MirroredCells};
