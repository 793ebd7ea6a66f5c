//! Shared test fixtures for the capslock behaviors tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Expected output of a default run.
pub const GOLDEN_DEFAULT: &str = include_str!("../golden/capslock_behaviors.dtsi");

/// Path to the capslock-behaviors binary
pub fn capslock_behaviors_bin() -> &'static str {
    env!("CARGO_BIN_EXE_capslock-behaviors")
}

/// Writes `content` to `config.toml` inside a fresh temp dir.
///
/// The returned `TempDir` must be kept alive while the file is used.
pub fn temp_config_file(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config file");
    (path, temp_dir)
}

/// A configuration with a single variant set using the locking caps keycode.
pub fn locking_caps_config() -> &'static str {
    r#"
indent = 2

[[variants]]
press_duration = 30
press_keycode = "LOCKING_CAPS"
"#
}
