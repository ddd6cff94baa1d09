//! Serde descriptors for shape configuration files.
//!
//! Descriptors are loose on purpose: every field is optional at the serde
//! level so that missing data surfaces as a [`ConfigError::MissingField`]
//! naming the band, rather than an opaque parse error.
//!
//! [`ConfigError::MissingField`]: jumperkit_core::ConfigError::MissingField

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row band as written in a configuration file.
///
/// Either `columns` (+ optional `padding`) for a fixed band, or
/// `start_columns` + `step` for a tapering band.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowBandDescriptor {
    pub start: Option<u32>,
    pub end: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    #[serde(alias = "startColumns", skip_serializing_if = "Option::is_none")]
    pub start_columns: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<i32>,
}

impl RowBandDescriptor {
    pub fn fixed(start: u32, end: u32, columns: u32, padding: u32) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            columns: Some(columns),
            padding: Some(padding),
            ..Self::default()
        }
    }

    pub fn taper(start: u32, end: u32, start_columns: u32, step: i32) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            start_columns: Some(start_columns),
            step: Some(step),
            ..Self::default()
        }
    }
}

/// A garment geometry for one size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeGeometryDescriptor {
    #[serde(alias = "totalRows")]
    pub total_rows: Option<u32>,
    #[serde(alias = "maxColumns")]
    pub max_columns: Option<u32>,
    #[serde(alias = "centerRow", skip_serializing_if = "Option::is_none")]
    pub center_row: Option<f64>,
    #[serde(alias = "centerColumn", skip_serializing_if = "Option::is_none")]
    pub center_column: Option<f64>,
    pub bands: Vec<RowBandDescriptor>,
}

impl ShapeGeometryDescriptor {
    pub fn new(total_rows: u32, max_columns: u32, bands: Vec<RowBandDescriptor>) -> Self {
        Self {
            total_rows: Some(total_rows),
            max_columns: Some(max_columns),
            center_row: None,
            center_column: None,
            bands,
        }
    }

    /// Parses a single geometry descriptor from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A garment configuration: display name plus one geometry per size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sizes: BTreeMap<String, ShapeGeometryDescriptor>,
}

/// A whole catalog file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDescriptor {
    #[serde(default)]
    pub configs: BTreeMap<String, ConfigDescriptor>,
}
