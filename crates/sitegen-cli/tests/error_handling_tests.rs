//! Tests for error handling and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sitegen() -> Command {
    Command::cargo_bin("sitegen").unwrap()
}

#[test]
fn blank_component_name_is_rejected_with_suggestions() {
    let temp = TempDir::new().unwrap();

    sitegen()
        .current_dir(temp.path())
        .args(["component", "   "])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid name"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn blank_script_name_is_rejected() {
    let temp = TempDir::new().unwrap();

    sitegen()
        .current_dir(temp.path())
        .args(["script", "  "])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid name"));
}

#[test]
fn existing_target_suggests_force() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".sitegenrc.json"), r#"{"sitegen": {}}"#).unwrap();

    sitegen()
        .current_dir(temp.path())
        .args(["component", "Widget"])
        .assert()
        .success();

    sitegen()
        .current_dir(temp.path())
        .args(["component", "Widget"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn malformed_tool_config_exits_4() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("broken.toml");
    fs::write(&config, "defaults = not toml").unwrap();

    sitegen()
        .current_dir(temp.path())
        .args(["--config", config.to_str().unwrap(), "config", "list"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn malformed_project_config_is_ignored_not_fatal() {
    // Unreadable config files degrade to an empty layer; generation still
    // succeeds with defaults.
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".sitegenrc.json"), r#"{"sitegen": {}}"#).unwrap();
    fs::write(temp.path().join(".sitegen.json"), "{ not json").unwrap();

    sitegen()
        .current_dir(temp.path())
        .args(["component", "Widget"])
        .assert()
        .success();

    assert!(temp.path().join("src/components/Widget/Widget.js").exists());
}

#[test]
fn quiet_still_shows_errors() {
    let temp = TempDir::new().unwrap();

    sitegen()
        .current_dir(temp.path())
        .args(["--quiet", "component", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid name"));
}
