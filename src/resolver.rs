//! Theme configuration resolution.
//!
//! Resolves an ordered list of declarative theme specs against the built-in
//! palette catalog, producing fully-resolved theme definitions for the
//! consuming build pipeline. Resolution is a pure function of its inputs:
//! no I/O, no shared state, fresh output per call.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::models::{Palette, PaletteCatalog, RgbColor};

/// One entry of the declarative theme configuration.
///
/// A theme is either derived from a base palette with role overrides, or a
/// bare reference to a catalog palette that passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeSpec {
    /// A base palette with a partial set of role overrides applied on top.
    Derived {
        /// Name of the resolved theme (may differ from the base palette).
        name: String,
        /// Catalog palette the theme is derived from.
        base: String,
        /// Role overrides replacing values from the base palette.
        #[serde(default)]
        overrides: BTreeMap<String, String>,
    },
    /// A catalog palette referenced by name, used as-is.
    Named {
        /// Catalog palette name, also the resolved theme name.
        name: String,
    },
}

impl ThemeSpec {
    /// The name the resolved theme will carry.
    #[must_use]
    pub fn theme_name(&self) -> &str {
        match self {
            Self::Derived { name, .. } | Self::Named { name } => name,
        }
    }
}

/// A named, fully-resolved role-to-color mapping ready for consumption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    /// Theme name as surfaced to the end consumer.
    pub name: String,
    /// Complete role-to-hex-value mapping.
    pub colors: BTreeMap<String, String>,
}

/// Policy knobs for theme resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Allow overrides to introduce roles the base palette does not define.
    ///
    /// Off by default: an override key absent from the base palette is
    /// rejected rather than silently extending the palette.
    pub allow_new_keys: bool,
}

/// Errors produced during theme resolution.
///
/// Any failure aborts the whole resolution; there is no partial output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A referenced base or pass-through palette is not in the catalog.
    UnknownPalette {
        /// The missing palette name.
        name: String,
    },
    /// An override names a role the base palette does not define.
    UnknownColorKey {
        /// The offending override key.
        key: String,
        /// The base palette that lacks the key.
        palette: String,
    },
    /// An override value does not parse as a hex color.
    InvalidColor {
        /// Theme whose override is malformed.
        theme: String,
        /// Role being overridden.
        key: String,
        /// The rejected value.
        value: String,
    },
    /// Two entries resolve to the same theme name.
    DuplicateTheme {
        /// The repeated theme name.
        name: String,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPalette { name } => {
                write!(f, "Unknown palette '{name}' (not in the built-in catalog)")
            }
            Self::UnknownColorKey { key, palette } => {
                write!(
                    f,
                    "Override key '{key}' is not defined by base palette '{palette}'"
                )
            }
            Self::InvalidColor { theme, key, value } => {
                write!(
                    f,
                    "Invalid color value '{value}' for key '{key}' in theme '{theme}'"
                )
            }
            Self::DuplicateTheme { name } => {
                write!(f, "Theme '{name}' is defined more than once")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Resolve an ordered sequence of theme specs into theme definitions.
///
/// Output order matches input order exactly; the first entry is
/// conventionally the default theme of the consuming UI.
///
/// # Errors
///
/// Fails fast on the first unknown palette, unknown override key (unless
/// `options.allow_new_keys`), malformed override value, or duplicate
/// theme name.
pub fn resolve_themes(
    specs: &[ThemeSpec],
    catalog: &PaletteCatalog,
    options: &ResolveOptions,
) -> Result<Vec<ThemeDefinition>, ResolveError> {
    let mut resolved = Vec::with_capacity(specs.len());
    let mut seen: HashSet<&str> = HashSet::with_capacity(specs.len());

    for spec in specs {
        let name = spec.theme_name();
        if !seen.insert(name) {
            return Err(ResolveError::DuplicateTheme {
                name: name.to_string(),
            });
        }

        let definition = match spec {
            ThemeSpec::Derived {
                name,
                base,
                overrides,
            } => {
                let palette = lookup(catalog, base)?;
                let mut colors = palette.colors.clone();

                for (key, value) in overrides {
                    if !palette.has_key(key) && !options.allow_new_keys {
                        return Err(ResolveError::UnknownColorKey {
                            key: key.clone(),
                            palette: base.clone(),
                        });
                    }
                    if RgbColor::from_hex(value).is_err() {
                        return Err(ResolveError::InvalidColor {
                            theme: name.clone(),
                            key: key.clone(),
                            value: value.clone(),
                        });
                    }
                    colors.insert(key.clone(), value.clone());
                }

                tracing::debug!(
                    theme = %name,
                    base = %base,
                    overrides = overrides.len(),
                    "resolved derived theme"
                );

                ThemeDefinition {
                    name: name.clone(),
                    colors,
                }
            }
            ThemeSpec::Named { name } => {
                let palette = lookup(catalog, name)?;
                tracing::debug!(theme = %name, "resolved pass-through theme");
                ThemeDefinition {
                    name: name.clone(),
                    colors: palette.colors.clone(),
                }
            }
        };

        resolved.push(definition);
    }

    Ok(resolved)
}

fn lookup<'a>(catalog: &'a PaletteCatalog, name: &str) -> Result<&'a Palette, ResolveError> {
    catalog.get(name).ok_or_else(|| ResolveError::UnknownPalette {
        name: name.to_string(),
    })
}
