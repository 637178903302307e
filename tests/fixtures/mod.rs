//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Path to the palettier binary built for integration tests.
pub fn palettier_bin() -> String {
    env!("CARGO_BIN_EXE_palettier").to_string()
}

/// Creates a Command running in the given project directory.
pub fn palettier_command(args: &[&str], project_dir: &Path) -> Command {
    let mut cmd = Command::new(palettier_bin());
    cmd.current_dir(project_dir);
    cmd.args(args);
    cmd
}

/// Creates an isolated project directory containing the given config file.
///
/// Returns the temp dir guard and the config file path.
pub fn project_with_config(file_name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(file_name);
    fs::write(&path, contents).expect("Failed to write config fixture");
    (dir, path)
}

/// The original artifact's configuration in TOML form: a derived "light"
/// theme on the emerald palette and a pass-through "forest".
pub const ARTIFACT_CONFIG_TOML: &str = r##"
content = ["web/**/*.templ"]
plugins = ["daisyui"]

[[themes]]
name = "light"
base = "emerald"

[themes.overrides]
primary = "#1EB854"

[[themes]]
name = "forest"
"##;

/// A config whose derived theme references a palette missing from the catalog.
pub const UNKNOWN_PALETTE_CONFIG_TOML: &str = r#"
content = ["web/**/*.templ"]

[[themes]]
name = "broken"
base = "nonexistent"
"#;

/// A config whose override names a role the base palette does not define.
pub const UNKNOWN_KEY_CONFIG_TOML: &str = r##"
content = ["web/**/*.templ"]

[[themes]]
name = "light"
base = "emerald"

[themes.overrides]
accentXYZ = "#000000"
"##;
