//! End-to-end tests for `palettier validate`.

mod fixtures;
use fixtures::*;

#[test]
fn test_validate_valid_config() {
    let (dir, _path) = project_with_config("palettier.toml", ARTIFACT_CONFIG_TOML);

    let output = palettier_command(&["validate"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid"));
}

#[test]
fn test_validate_json_schema() {
    let (dir, _path) = project_with_config("palettier.toml", ARTIFACT_CONFIG_TOML);

    let output = palettier_command(&["validate", "--json"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["valid"], true);
    assert_eq!(result["checks"]["config"], "passed");
    assert_eq!(result["checks"]["themes"], "passed");
    assert!(result["messages"].as_array().unwrap().is_empty());
}

#[test]
fn test_validate_unknown_palette() {
    let (dir, _path) = project_with_config("palettier.toml", UNKNOWN_PALETTE_CONFIG_TOML);

    let output = palettier_command(&["validate", "--json"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(result["valid"], false);
    assert_eq!(result["checks"]["themes"], "failed");
    let messages = result["messages"].as_array().unwrap();
    assert!(messages.iter().any(|m| {
        m["severity"] == "error" && m["message"].as_str().unwrap().contains("nonexistent")
    }));
}

#[test]
fn test_validate_unknown_override_key() {
    let (dir, _path) = project_with_config("palettier.toml", UNKNOWN_KEY_CONFIG_TOML);

    let output = palettier_command(&["validate", "--json"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["valid"], false);
}

#[test]
fn test_validate_allow_new_keys_config_field() {
    let (dir, _path) = project_with_config(
        "palettier.toml",
        r##"
content = ["web/**/*.templ"]
allow_new_keys = true

[[themes]]
name = "light"
base = "emerald"

[themes.overrides]
accentXYZ = "#000000"
"##,
    );

    let output = palettier_command(&["validate", "--json"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "allow_new_keys should permit palette extension. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_validate_malformed_config() {
    let (dir, _path) = project_with_config("palettier.toml", "this is not [ valid toml");

    let output = palettier_command(&["validate", "--json"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["valid"], false);
    assert_eq!(result["checks"]["config"], "failed");
    assert_eq!(result["checks"]["themes"], "skipped");
}

#[test]
fn test_validate_empty_theme_list_warns() {
    let (dir, _path) = project_with_config("palettier.toml", r#"content = ["web/**/*.templ"]"#);

    let output = palettier_command(&["validate", "--json"], dir.path())
        .output()
        .expect("Failed to execute command");

    // Warnings do not fail validation
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["valid"], true);
    let messages = result["messages"].as_array().unwrap();
    assert!(messages.iter().any(|m| m["severity"] == "warning"));
}
