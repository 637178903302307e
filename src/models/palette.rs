//! Palette data structures and the built-in palette catalog.
//!
//! A palette is a named, complete mapping from semantic color roles
//! (e.g. "primary", "base-100") to hex color values. The catalog is the
//! read-only registry of built-in palettes, embedded at compile time.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::RgbColor;

/// A named, complete set of semantic color-role-to-value assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Palette identifier (e.g. "emerald", "forest").
    pub name: String,
    /// Role name to hex color value, in deterministic key order.
    pub colors: BTreeMap<String, String>,
}

impl Palette {
    /// Returns true if the palette defines the given color role.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.colors.contains_key(key)
    }

    /// Get the hex value for a color role, if defined.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.colors.get(key).map(String::as_str)
    }

    /// Number of color roles defined by this palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette defines no color roles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// The read-only registry of built-in palettes.
#[derive(Debug, Clone, Deserialize)]
pub struct PaletteCatalog {
    /// Built-in palettes in display order.
    pub palettes: Vec<Palette>,
}

impl PaletteCatalog {
    /// Load the palette catalog from embedded JSON data.
    ///
    /// Every color value is validated as a hex color at load time, so
    /// downstream consumers can rely on catalog values being well-formed.
    ///
    /// # Errors
    /// Returns an error if the JSON data cannot be parsed or contains an
    /// invalid color value.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("../data/palettes.json");
        let catalog: Self =
            serde_json::from_str(json_data).context("Failed to parse embedded palette catalog")?;

        for palette in &catalog.palettes {
            for (key, value) in &palette.colors {
                RgbColor::from_hex(value).context(format!(
                    "Invalid color value for '{key}' in built-in palette '{}'",
                    palette.name
                ))?;
            }
        }

        Ok(catalog)
    }

    /// Look up a palette by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.name == name)
    }

    /// Iterate over palette names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.iter().map(|p| p.name.as_str())
    }

    /// Number of built-in palettes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}

impl Default for PaletteCatalog {
    fn default() -> Self {
        Self::load().unwrap_or_else(|_| Self {
            palettes: Vec::new(),
        })
    }
}
