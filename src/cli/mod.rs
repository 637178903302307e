//! CLI command handlers for Palettier.
//!
//! This module provides headless, scriptable access to Palettier's core
//! functionality for automation, testing, and CI/CD integration.

pub mod common;
pub mod config;
pub mod init;
pub mod palettes;
pub mod resolve;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use init::InitArgs;
pub use palettes::PalettesArgs;
pub use resolve::ResolveArgs;
pub use validate::ValidateArgs;
