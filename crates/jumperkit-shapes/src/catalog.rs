//! Shape catalog: every known garment configuration and size.
//!
//! Loading is lenient per geometry: an invalid size is rejected with its
//! [`ConfigError`] while the rest of the file still loads, so one broken
//! configuration never takes down unrelated ones. Lookups that fail fall
//! back to the default pair and finally to a plain rectangle.

use crate::descriptor::{CatalogDescriptor, ShapeGeometryDescriptor};
use crate::geometry::ShapeGeometry;
use jumperkit_core::{ConfigError, DEFAULT_CONFIG_ID, DEFAULT_SIZE};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

const BUILTIN_CATALOG: &str = include_str!("../data/builtin_shapes.json");

/// Dimensions of the last-resort rectangle geometry.
const FALLBACK_ROWS: u32 = 50;
const FALLBACK_COLUMNS: u32 = 50;

/// A configuration and its sizes.
#[derive(Debug, Clone, Default)]
pub struct ConfigEntry {
    pub name: String,
    sizes: BTreeMap<String, Arc<ShapeGeometry>>,
}

impl ConfigEntry {
    /// Size keys, sorted.
    pub fn sizes(&self) -> impl Iterator<Item = &str> {
        self.sizes.keys().map(String::as_str)
    }

    pub fn geometry(&self, size: &str) -> Option<&Arc<ShapeGeometry>> {
        self.sizes.get(size)
    }

    pub fn geometries(&self) -> impl Iterator<Item = &Arc<ShapeGeometry>> {
        self.sizes.values()
    }
}

/// A geometry that failed validation while loading a catalog.
#[derive(Debug)]
pub struct RejectedShape {
    pub config_id: String,
    pub size: String,
    pub error: ConfigError,
}

/// Result of a lenient catalog load.
#[derive(Debug)]
pub struct CatalogLoad {
    pub catalog: ShapeCatalog,
    pub rejected: Vec<RejectedShape>,
}

impl CatalogLoad {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Every loaded geometry, keyed by configuration id then size.
#[derive(Debug, Clone)]
pub struct ShapeCatalog {
    configs: BTreeMap<String, ConfigEntry>,
    default_config: String,
    default_size: String,
}

impl ShapeCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            configs: BTreeMap::new(),
            default_config: DEFAULT_CONFIG_ID.to_string(),
            default_size: DEFAULT_SIZE.to_string(),
        }
    }

    /// The catalog shipped with the application.
    ///
    /// Unlike user catalogs this is strict: any rejected geometry is an error.
    pub fn builtin() -> Result<Self, ConfigError> {
        let mut load = Self::from_json(BUILTIN_CATALOG)?;
        if let Some(rejected) = load.rejected.pop() {
            return Err(rejected.error);
        }
        Ok(load.catalog)
    }

    /// Builds a catalog from parsed descriptors, collecting rejections.
    pub fn from_descriptor(descriptor: &CatalogDescriptor) -> CatalogLoad {
        let mut catalog = Self::new();
        let mut rejected = Vec::new();

        for (config_id, config) in &descriptor.configs {
            for (size, shape) in &config.sizes {
                match ShapeGeometry::load(config_id.as_str(), size.as_str(), shape) {
                    Ok(geometry) => catalog.insert(&config.name, geometry),
                    Err(error) => {
                        warn!("Rejected shape {}/{}: {}", config_id, size, error);
                        rejected.push(RejectedShape {
                            config_id: config_id.clone(),
                            size: size.clone(),
                            error,
                        });
                    }
                }
            }
        }

        info!(
            "Loaded {} shape geometries ({} rejected)",
            catalog.len(),
            rejected.len()
        );
        CatalogLoad { catalog, rejected }
    }

    /// Parses a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<CatalogLoad, ConfigError> {
        let descriptor: CatalogDescriptor = serde_json::from_str(json)?;
        Ok(Self::from_descriptor(&descriptor))
    }

    /// Reads a catalog file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<CatalogLoad, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Overrides the default configuration/size pair used for fallback.
    pub fn with_default(mut self, config_id: impl Into<String>, size: impl Into<String>) -> Self {
        self.default_config = config_id.into();
        self.default_size = size.into();
        self
    }

    pub fn default_pair(&self) -> (&str, &str) {
        (&self.default_config, &self.default_size)
    }

    fn insert(&mut self, name: &str, geometry: ShapeGeometry) {
        let entry = self
            .configs
            .entry(geometry.config_id().to_string())
            .or_default();
        if entry.name.is_empty() {
            entry.name = if name.is_empty() {
                geometry.config_id().to_string()
            } else {
                name.to_string()
            };
        }
        entry
            .sizes
            .insert(geometry.size().to_string(), Arc::new(geometry));
    }

    /// Adds every geometry of `other`, replacing existing pairs.
    pub fn extend(&mut self, other: ShapeCatalog) {
        for (config_id, entry) in other.configs {
            let target = self.configs.entry(config_id).or_default();
            if target.name.is_empty() {
                target.name = entry.name;
            }
            target.sizes.extend(entry.sizes);
        }
    }

    /// Validates and adds a custom uploaded geometry.
    ///
    /// Replaces any existing geometry for the same pair. On error the
    /// catalog is left untouched.
    pub fn insert_custom(
        &mut self,
        config_id: &str,
        name: &str,
        size: &str,
        descriptor: &ShapeGeometryDescriptor,
    ) -> Result<Arc<ShapeGeometry>, ConfigError> {
        let geometry = ShapeGeometry::load(config_id, size, descriptor)?;
        self.insert(name, geometry);
        info!("Added custom shape {}/{}", config_id, size);
        self.get(config_id, size)
    }

    /// Looks up a geometry.
    pub fn get(&self, config_id: &str, size: &str) -> Result<Arc<ShapeGeometry>, ConfigError> {
        let entry = self
            .configs
            .get(config_id)
            .ok_or_else(|| ConfigError::UnknownConfig(config_id.to_string()))?;
        entry
            .geometry(size)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownSize {
                config: config_id.to_string(),
                size: size.to_string(),
            })
    }

    /// Looks up a geometry, falling back to the default one on failure.
    pub fn get_or_default(&self, config_id: &str, size: &str) -> Arc<ShapeGeometry> {
        match self.get(config_id, size) {
            Ok(geometry) => geometry,
            Err(e) => {
                warn!("{}; falling back to default shape", e);
                self.default_geometry()
            }
        }
    }

    /// The default pair's geometry, or the legacy rectangle if it is missing.
    pub fn default_geometry(&self) -> Arc<ShapeGeometry> {
        self.get(&self.default_config, &self.default_size)
            .unwrap_or_else(|e| {
                warn!("{}; using legacy rectangle", e);
                Arc::new(ShapeGeometry::rectangle(FALLBACK_ROWS, FALLBACK_COLUMNS))
            })
    }

    pub fn config(&self, config_id: &str) -> Option<&ConfigEntry> {
        self.configs.get(config_id)
    }

    /// Configuration ids, sorted.
    pub fn config_ids(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }

    /// Size keys of a configuration, empty if unknown.
    pub fn sizes(&self, config_id: &str) -> Vec<&str> {
        self.configs
            .get(config_id)
            .map(|entry| entry.sizes().collect())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigEntry)> {
        self.configs.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    /// Total number of geometries.
    pub fn len(&self) -> usize {
        self.configs.values().map(|entry| entry.sizes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::new()
    }
}
