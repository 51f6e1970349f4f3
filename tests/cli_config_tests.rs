//! End-to-end tests for `carousel-tui config` commands.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Path to the carousel-tui binary
fn carousel_bin() -> String {
    std::env::var("CARGO_BIN_EXE_carousel-tui")
        .unwrap_or_else(|_| "target/debug/carousel-tui".to_string())
}

/// Creates a Command with isolated config directory for testing.
fn isolated_config_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(carousel_bin());
    cmd.env("CAROUSEL_TUI_CONFIG_DIR", config_dir);
    cmd.args(args);
    cmd
}

// ============================================================================
// Path Command Tests
// ============================================================================

#[test]
fn test_config_path_honors_env_override() {
    let temp_dir = TempDir::new().unwrap();
    let output = isolated_config_command(&["config", "path"], temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        temp_dir.path().join("config.toml").display().to_string()
    );
}

#[test]
fn test_config_path_with_explicit_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("custom.toml");
    let output = isolated_config_command(
        &["config", "path", "--config", file.to_str().unwrap()],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        file.display().to_string()
    );
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_defaults_when_missing() {
    let temp_dir = TempDir::new().unwrap();
    let output = isolated_config_command(&["config", "show"], temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("showing defaults"), "{stdout}");
    assert!(stdout.contains("Team: 6 items, every 4000ms"), "{stdout}");
    assert!(stdout.contains("Accordion: Challenges (3 panels)"), "{stdout}");
}

#[test]
fn test_config_show_json_format() {
    let temp_dir = TempDir::new().unwrap();
    let output = isolated_config_command(&["config", "show", "--json"], temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    assert_eq!(json["exists"], false);
    assert_eq!(json["ui"]["theme_mode"], "Auto");
    assert_eq!(json["carousels"].as_array().unwrap().len(), 2);
    assert_eq!(json["carousels"][1]["interval_ms"], 6000);
    assert_eq!(json["marquee"]["title"], "Partners");
}

#[test]
fn test_config_show_reads_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("config.toml"),
        r#"
[ui]
reduced_motion = true

[[carousels]]
title = "Gallery"
items = ["one", "two"]
interval_ms = 1500
"#,
    )
    .unwrap();

    let output = isolated_config_command(&["config", "show", "--json"], temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["exists"], true);
    assert_eq!(json["ui"]["reduced_motion"], true);
    assert_eq!(json["carousels"][0]["title"], "Gallery");
    assert_eq!(json["carousels"][0]["interval_ms"], 1500);
    assert!(json["marquee"].is_null());
}

#[test]
fn test_config_show_rejects_invalid_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("config.toml"),
        r#"
[[carousels]]
title = "Broken"
items = ["a"]
breakpoints = [{ min_width = 0, visible = 0 }]
"#,
    )
    .unwrap();

    let output = isolated_config_command(&["config", "show"], temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("shows zero items"), "{stderr}");
}

// ============================================================================
// Init Command Tests
// ============================================================================

#[test]
fn test_config_init_writes_loadable_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = isolated_config_command(&["config", "init"], temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let path = temp_dir.path().join("config.toml");
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[[carousels]]"));

    let config = carousel_tui::config::Config::load_from(&path).unwrap();
    assert_eq!(config, carousel_tui::config::Config::new());
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\n").unwrap();

    let output = isolated_config_command(&["config", "init"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_ne!(output.status.code(), Some(0));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[ui]\n");

    let output = isolated_config_command(&["config", "init", "--force"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));
    assert!(std::fs::read_to_string(&path).unwrap().contains("Team"));
}
