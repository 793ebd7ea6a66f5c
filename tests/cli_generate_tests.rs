//! End-to-end tests for the `capslock-behaviors` generate command.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use std::fs;
use std::process::Command;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_no_arguments_prints_default_document() {
    let output = Command::new(capslock_behaviors_bin())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Generation should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), GOLDEN_DEFAULT);
}

#[test]
fn test_generate_subcommand_matches_default() {
    let output = Command::new(capslock_behaviors_bin())
        .arg("generate")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), GOLDEN_DEFAULT);
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let output = Command::new(capslock_behaviors_bin())
        .arg("--verbose")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), GOLDEN_DEFAULT);
}

#[test]
fn test_generate_to_output_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out_path = temp_dir.path().join("behaviors.dtsi");

    let output = Command::new(capslock_behaviors_bin())
        .args(["generate", "--output", out_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let content = fs::read_to_string(&out_path).expect("Failed to read output");
    assert_eq!(content, GOLDEN_DEFAULT);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Generated"));
}

#[test]
fn test_generate_with_config_file() {
    let (config_path, config_temp) = temp_config_file(locking_caps_config());

    let output = Command::new(capslock_behaviors_bin())
        .args(["--config", config_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("capslock-press-duration = <30>;"));
    assert!(stdout.contains("capslock-press-keycode = <LOCKING_CAPS>;"));
    assert!(!stdout.contains("capslock_on_mac"));
}

#[test]
fn test_missing_config_file_exits_with_io_error() {
    let output = Command::new(capslock_behaviors_bin())
        .args(["--config", "/tmp/nonexistent_capslock_config_xyz.toml"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "Should have error message on stderr");
    assert!(stderr.contains("not found"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_config_exits_with_validation_error() {
    let (config_path, config_temp) = temp_config_file("compatible = \"\"\n");

    let output = Command::new(capslock_behaviors_bin())
        .args(["generate", "--config", config_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("compatible"), "stderr: {stderr}");
}

#[test]
fn test_malformed_toml_exits_with_validation_error() {
    let (config_path, config_temp) = temp_config_file("indent = [\n");

    let output = Command::new(capslock_behaviors_bin())
        .args(["--config", config_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_generate_flags_conflict_with_subcommand() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out_path = temp_dir.path().join("behaviors.dtsi");

    let output = Command::new(capslock_behaviors_bin())
        .args(["--output", out_path.to_str().unwrap(), "config", "show"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!out_path.exists());
}

#[test]
fn test_verbose_still_allowed_with_subcommand() {
    let output = Command::new(capslock_behaviors_bin())
        .args(["config", "show", "--verbose"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}
