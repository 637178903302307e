//! Data models for palettes and color values.
//!
//! This module contains the core data structures used throughout the
//! application. Models are designed to be independent of CLI and I/O logic.

pub mod palette;
pub mod rgb;

// Re-export all model types
pub use palette::{Palette, PaletteCatalog};
pub use rgb::RgbColor;
