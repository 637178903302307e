//! Palettier theme resolution library
//!
//! This library resolves a declarative theme configuration (base palettes,
//! role overrides, pass-through theme references) against a built-in palette
//! catalog, producing the ordered theme list a CSS build pipeline consumes.
//! Glob scanning, CSS generation and the plugin runtime belong to the
//! consuming build tool; only the configuration values live here.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod resolver;

pub use config::Config;
pub use models::{Palette, PaletteCatalog, RgbColor};
pub use resolver::{resolve_themes, ResolveError, ResolveOptions, ThemeDefinition, ThemeSpec};
