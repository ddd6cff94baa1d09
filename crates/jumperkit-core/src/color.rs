//! Color values and "uncolored" normalization.
//!
//! Colors are opaque strings (`#rrggbb`, `rgb(...)`, ...). The engine only
//! ever compares them, after normalization collapses every representation
//! of "no color" into one class.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default canvas background color.
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Literal treated as uncolored regardless of background.
pub const TRANSPARENT: &str = "transparent";

/// An opaque color value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Wraps a color string as-is.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw color text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical comparison form: trimmed, lowercase, no inner whitespace.
    fn canonical(&self) -> String {
        canonical(&self.0)
    }
}

fn canonical(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Collapses equivalent "no color" representations before comparison.
///
/// Absent, empty, `transparent`, and the background literal all normalize
/// to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorNormalizer {
    background: String,
}

impl ColorNormalizer {
    /// Creates a normalizer for the given canvas background.
    pub fn new(background: impl AsRef<str>) -> Self {
        Self {
            background: canonical(background.as_ref()),
        }
    }

    /// The canonical background literal.
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Normalized comparison key, `None` meaning uncolored.
    pub fn normalize(&self, color: Option<&Color>) -> Option<String> {
        let canonical = color?.canonical();
        if canonical.is_empty() || canonical == TRANSPARENT || canonical == self.background {
            None
        } else {
            Some(canonical)
        }
    }

    /// Whether the color counts as uncolored.
    pub fn is_uncolored(&self, color: Option<&Color>) -> bool {
        self.normalize(color).is_none()
    }

    /// Whether two colors are equal after normalization.
    pub fn same(&self, a: Option<&Color>, b: Option<&Color>) -> bool {
        self.normalize(a) == self.normalize(b)
    }

    /// Maps uncolored representations to `None`, keeping the original text otherwise.
    pub fn to_stored(&self, color: Option<&Color>) -> Option<Color> {
        if self.is_uncolored(color) {
            None
        } else {
            color.cloned()
        }
    }
}

impl Default for ColorNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_BACKGROUND)
    }
}
