//! Error handling for JumperKit
//!
//! Provides error types for every layer of the pattern engine:
//! - Configuration errors (malformed or incomplete shape geometry)
//! - Design errors (persisted design documents and cell keys)
//!
//! Operations addressed at inactive cells are not errors: stores ignore
//! them, since mirrored, ported, and filled cell sets include inactive
//! candidates by construction. All error types use `thiserror`.

use thiserror::Error;

/// Shape configuration error
///
/// Fatal to loading one geometry only. Callers fall back to a default
/// geometry instead of aborting.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required descriptor field is missing
    #[error("Missing required field '{field}' in {context}")]
    MissingField {
        /// The missing field name.
        field: String,
        /// Where the field was expected (e.g. "band 2").
        context: String,
    },

    /// A grid dimension is zero or too large
    #[error("Invalid dimension for '{field}': {value}")]
    InvalidDimension {
        /// The dimension field name.
        field: String,
        /// The rejected value.
        value: i64,
    },

    /// Bands leave some rows uncovered
    #[error("Rows not covered by any band: {}", format_rows(.uncovered))]
    RowCoverageGap {
        /// Every uncovered row, ascending. The first entry is the first offender.
        uncovered: Vec<u32>,
    },

    /// Two bands claim the same row
    #[error("Row {row} is covered by more than one band")]
    OverlappingBands {
        /// The first row found in two bands.
        row: u32,
    },

    /// A band yields more active columns than the grid has, or fewer than one
    #[error("Row {row} has {columns} active columns (grid width {max_columns})")]
    ColumnsOutOfRange {
        /// The offending row.
        row: u32,
        /// The computed active column count.
        columns: i64,
        /// The grid width.
        max_columns: u32,
    },

    /// Padding leaves a covered row without any active cell
    #[error("Row {row} has no active cells (padding {padding})")]
    EmptyRow {
        /// The offending row.
        row: u32,
        /// The padding that consumed the row.
        padding: u32,
    },

    /// The configuration id is not in the catalog
    #[error("Unknown shape configuration: {0}")]
    UnknownConfig(String),

    /// The size key is not defined for the configuration
    #[error("Unknown size '{size}' for configuration '{config}'")]
    UnknownSize {
        /// The configuration id.
        config: String,
        /// The requested size key.
        size: String,
    },

    /// The descriptor text could not be parsed
    #[error("Shape descriptor parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The descriptor file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_rows(rows: &[u32]) -> String {
    rows.iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ConfigError {
    /// First uncovered row, if this is a coverage error.
    pub fn first_uncovered_row(&self) -> Option<u32> {
        match self {
            ConfigError::RowCoverageGap { uncovered } => uncovered.first().copied(),
            _ => None,
        }
    }
}

/// Design document error
#[derive(Error, Debug)]
pub enum DesignError {
    /// A persisted cell key is not of the form `{row}-{col}`
    #[error("Invalid cell key: '{0}'")]
    InvalidKey(String),

    /// The document declares a version this build cannot read
    #[error("Unsupported design version: {0}")]
    UnsupportedVersion(u64),

    /// The document shape matches neither the legacy nor the current format
    #[error("Malformed design document: {0}")]
    MalformedDocument(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main error type for JumperKit
#[derive(Error, Debug)]
pub enum Error {
    /// Shape configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Design document error
    #[error(transparent)]
    Design(#[from] DesignError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Check if this is a design document error
    pub fn is_design_error(&self) -> bool {
        matches!(self, Error::Design(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
