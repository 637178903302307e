//! Configuration management for the application.
//!
//! This module handles loading and validating the declarative theme
//! configuration file, in TOML or JSON5 format. The configuration is
//! constructed once at startup and never mutated afterward; `content` and
//! `plugins` are opaque pass-through values owned by the consuming CSS
//! build step.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::resolver::{ResolveOptions, ThemeSpec};

/// Configuration file names probed during discovery, in precedence order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["palettier.toml", "palettier.json5", "palettier.json"];

/// Declarative build-step configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Source-file glob patterns scanned for utility-class usage.
    /// Pass-through: no glob processing happens here.
    #[serde(default)]
    pub content: Vec<String>,
    /// Theming plugins registered with the build step. Pass-through.
    #[serde(default)]
    pub plugins: Vec<String>,
    /// Ordered theme specs; the first entry is the default theme.
    #[serde(default)]
    pub themes: Vec<ThemeSpec>,
    /// Allow theme overrides to introduce roles the base palette lacks.
    #[serde(default)]
    pub allow_new_keys: bool,
}

impl Default for Config {
    /// Mirrors the original artifact: templ sources, the daisyui-style
    /// theming plugin, a derived "light" theme and a pass-through "forest".
    fn default() -> Self {
        Self {
            content: vec!["web/**/*.templ".to_string()],
            plugins: vec!["daisyui".to_string()],
            themes: vec![
                ThemeSpec::Derived {
                    name: "light".to_string(),
                    base: "emerald".to_string(),
                    overrides: std::iter::once(("primary".to_string(), "#1EB854".to_string()))
                        .collect(),
                },
                ThemeSpec::Named {
                    name: "forest".to_string(),
                },
            ],
            allow_new_keys: false,
        }
    }
}

impl Config {
    /// Loads configuration from the given file.
    ///
    /// The format is chosen by extension: `.toml` parses as TOML, `.json5`
    /// and `.json` parse as JSON5 (a superset of JSON, so plain JSON files
    /// work unchanged).
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&content)
                .context(format!("Failed to parse config file: {}", path.display()))?,
            Some("json5" | "json") => json5::from_str(&content)
                .context(format!("Failed to parse config file: {}", path.display()))?,
            _ => anyhow::bail!(
                "Unsupported config format: {} (expected .toml, .json5 or .json)",
                path.display()
            ),
        };

        if config.content.is_empty() {
            tracing::warn!(
                path = %path.display(),
                "config declares no content globs; the consuming build step will scan nothing"
            );
        }

        Ok(config)
    }

    /// Finds the configuration file in a project directory.
    ///
    /// Probes `palettier.toml`, then `palettier.json5`, then `palettier.json`.
    #[must_use]
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Loads the discovered config from a project directory, falling back to
    /// the built-in default when no config file exists.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        match Self::discover(dir) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::from_path(&path)
            }
            None => {
                tracing::debug!(dir = %dir.display(), "no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Resolution policy derived from this configuration.
    #[must_use]
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            allow_new_keys: self.allow_new_keys,
        }
    }

    /// Writes a starter config file for a new project.
    ///
    /// # Errors
    /// Fails if the file already exists or cannot be written.
    pub fn write_starter(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists: {}", path.display());
        }
        fs::write(path, STARTER_CONFIG)
            .context(format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

/// Template written by `palettier init`.
const STARTER_CONFIG: &str = r##"# Palettier theme configuration.

# Source files the consuming CSS build step scans for utility-class usage.
content = ["web/**/*.templ"]

# Theming plugins registered with the build step.
plugins = ["daisyui"]

# Allow overrides to introduce roles the base palette does not define.
# allow_new_keys = true

# Ordered theme list; the first entry is the default theme.
[[themes]]
name = "light"
base = "emerald"

[themes.overrides]
primary = "#1EB854"

[[themes]]
name = "forest"
"##;
