//! Configuration of the generated variant sets.
//!
//! Configuration is optional. Without a file the built-in defaults are used,
//! which produce the standard capslock behaviors plus their macOS variants.
//! A TOML file can override any field:
//!
//! ```toml
//! compatible = "zmk,behavior-capslock"
//! binding_cells = 0
//! indent = 2
//!
//! [[variants]]
//! press_duration = 5
//!
//! [[variants]]
//! comment = "MacOS compatibility (longer capslock press)"
//! press_duration = 95
//! suffix = { name = "_mac", short_name = "2", display = " (Mac)" }
//! ```

use crate::constants::{
    DEFAULT_BINDING_CELLS, DEFAULT_COMPATIBLE, DEFAULT_INDENT, DEFAULT_PRESS_DURATION,
    MAC_PRESS_DURATION,
};
use crate::models::{ExpansionParams, Suffix};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// One expansion of the base table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantConfig {
    /// Comment emitted above this variant set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// `capslock-press-duration` in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub press_duration: Option<u32>,
    /// `capslock-press-keycode`, e.g. `LOCKING_CAPS`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub press_keycode: Option<String>,
    /// Identifier and display suffixes
    pub suffix: Suffix,
}

impl VariantConfig {
    /// Builds the expansion parameters for this variant set.
    pub fn to_params(&self, config: &Config) -> ExpansionParams {
        ExpansionParams {
            compatible: config.compatible.clone(),
            binding_cells: config.binding_cells,
            press_duration: self.press_duration,
            press_keycode: self.press_keycode.clone(),
            suffix: self.suffix.clone(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Value of every node's `compatible` property
    pub compatible: String,
    /// Value of every node's `#binding-cells` property
    pub binding_cells: u32,
    /// Indentation depth of behavior nodes
    pub indent: usize,
    /// Variant sets, rendered in order
    pub variants: Vec<VariantConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compatible: DEFAULT_COMPATIBLE.to_string(),
            binding_cells: DEFAULT_BINDING_CELLS,
            indent: DEFAULT_INDENT,
            variants: vec![
                VariantConfig {
                    press_duration: Some(DEFAULT_PRESS_DURATION),
                    ..VariantConfig::default()
                },
                VariantConfig {
                    comment: Some("MacOS compatibility (longer capslock press)".to_string()),
                    press_duration: Some(MAC_PRESS_DURATION),
                    press_keycode: None,
                    suffix: Suffix::new("_mac", "2", " (Mac)"),
                },
            ],
        }
    }
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from `path`, or the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::new()),
        }
    }

    /// Loads and validates configuration from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_toml(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from TOML text without validating it.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes configuration to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }

    /// Validates the configuration.
    ///
    /// # Validation
    ///
    /// - `compatible` must not be empty
    /// - at least one variant set is required
    /// - no two variant sets may share a name suffix or a short-name suffix,
    ///   since their nodes would collide
    /// - text copied into the document must not break out of its literal:
    ///   `compatible` and display suffixes are string contents, comments
    ///   live inside `/* */`, name suffixes extend identifiers, and
    ///   `press_keycode` is a single identifier
    pub fn validate(&self) -> Result<()> {
        if self.compatible.trim().is_empty() {
            anyhow::bail!("compatible must not be empty");
        }
        validate_string_contents("compatible", &self.compatible)?;

        if self.variants.is_empty() {
            anyhow::bail!("At least one variant set must be configured");
        }

        let mut names = HashSet::new();
        let mut short_names = HashSet::new();
        for (index, variant) in self.variants.iter().enumerate() {
            variant
                .validate()
                .with_context(|| format!("Variant set {} is invalid", index + 1))?;

            if !names.insert(variant.suffix.name.as_str()) {
                anyhow::bail!(
                    "Variant set {} reuses name suffix '{}'",
                    index + 1,
                    variant.suffix.name
                );
            }
            if !short_names.insert(variant.suffix.short_name.as_str()) {
                anyhow::bail!(
                    "Variant set {} reuses short name suffix '{}'",
                    index + 1,
                    variant.suffix.short_name
                );
            }
        }

        Ok(())
    }
}

impl VariantConfig {
    /// Checks the fields that are emitted verbatim into the document.
    fn validate(&self) -> Result<()> {
        if let Some(comment) = &self.comment {
            if comment.contains("*/") {
                anyhow::bail!("comment must not contain '*/'");
            }
            if comment.chars().any(char::is_control) {
                anyhow::bail!("comment must be a single line");
            }
        }

        if let Some(keycode) = &self.press_keycode {
            if !is_identifier(keycode) {
                anyhow::bail!("press_keycode '{keycode}' must be a single identifier");
            }
        }

        if !is_identifier_fragment(&self.suffix.name) {
            anyhow::bail!(
                "suffix name '{}' may only contain letters, digits and '_'",
                self.suffix.name
            );
        }
        if !is_identifier_fragment(&self.suffix.short_name) {
            anyhow::bail!(
                "suffix short_name '{}' may only contain letters, digits and '_'",
                self.suffix.short_name
            );
        }
        validate_string_contents("suffix display", &self.suffix.display)?;

        Ok(())
    }
}

/// Rejects characters that would terminate or corrupt a quoted devicetree string.
fn validate_string_contents(field: &str, value: &str) -> Result<()> {
    if value.contains('"') || value.contains('\\') {
        anyhow::bail!("{field} must not contain quotes or backslashes");
    }
    if value.chars().any(char::is_control) {
        anyhow::bail!("{field} must not contain control characters");
    }
    Ok(())
}

/// `[A-Za-z0-9_]*`
fn is_identifier_fragment(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier(value: &str) -> bool {
    value
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && is_identifier_fragment(value)
}
