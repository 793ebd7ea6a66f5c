//! Devicetree document generation.
//!
//! Ties the pipeline together: builds the base table, expands it once per
//! configured variant set, renders each expansion, and substitutes the
//! result into the document template.

use crate::config::Config;
use crate::firmware::base_table::capslock_behaviors;
use crate::firmware::expander::expand;
use crate::firmware::renderer::{indent_line, render};
use crate::models::BehaviorTable;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Placeholder replaced by the rendered behavior nodes.
const BEHAVIORS_PLACEHOLDER: &str = "__BEHAVIORS__";

/// Surrounding devicetree document.
const DOCUMENT_TEMPLATE: &str = "/*
 * Copyright (c) 2025 The ZMK Contributors
 *
 * SPDX-License-Identifier: MIT
 */

#include <dt-bindings/zmk/keys.h>

/ {
    behaviors {
__BEHAVIORS__
    };
};
";

/// Generates the capslock behaviors devicetree include.
pub struct DtsiGenerator<'a> {
    config: &'a Config,
    base: BehaviorTable,
}

impl<'a> DtsiGenerator<'a> {
    /// Creates a generator over the canonical capslock behaviors.
    ///
    /// The configuration is validated first so that no configured text can
    /// break the structure of the generated document.
    pub fn new(config: &'a Config) -> Result<Self> {
        config.validate().context("Invalid configuration")?;
        let base = capslock_behaviors().context("Failed to build base behavior table")?;
        Ok(Self::with_base_table(config, base))
    }

    /// Creates a generator over a caller-supplied base table.
    pub fn with_base_table(config: &'a Config, base: BehaviorTable) -> Self {
        Self { config, base }
    }

    /// Expands the base table once per variant set, in configuration order.
    pub fn expand_variants(&self) -> Result<Vec<BehaviorTable>> {
        self.config
            .variants
            .iter()
            .enumerate()
            .map(|(index, variant)| {
                let params = variant.to_params(self.config);
                expand(&self.base, &params)
                    .with_context(|| format!("Failed to expand variant set {}", index + 1))
            })
            .collect()
    }

    /// Renders the contents of the `behaviors` node.
    ///
    /// Variant sets follow one another; a set with a comment is preceded by
    /// the comment line and a blank line.
    pub fn generate_behaviors(&self) -> Result<String> {
        let indent = self.config.indent;
        let mut parts = Vec::new();

        for (variant, table) in self.config.variants.iter().zip(self.expand_variants()?) {
            if let Some(comment) = &variant.comment {
                parts.push(indent_line(indent, &format!("/* {comment} */")));
                parts.push(String::new());
            }
            debug!("Rendering {} behaviors", table.len());
            parts.push(render(&table, indent));
        }

        Ok(parts.join("\n"))
    }

    /// Renders the complete document, terminated by a newline.
    pub fn generate_document(&self) -> Result<String> {
        let behaviors = self.generate_behaviors()?;
        info!(
            "Generated {} variant sets of {} behaviors",
            self.config.variants.len(),
            self.base.len()
        );
        Ok(DOCUMENT_TEMPLATE.replace(BEHAVIORS_PLACEHOLDER, &behaviors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VariantConfig;
    use crate::models::{BehaviorKey, PropertyMap, PropertyValue, Suffix};

    #[test]
    fn test_document_frame() {
        let config = Config::default();
        let document = DtsiGenerator::new(&config)
            .unwrap()
            .generate_document()
            .unwrap();

        assert!(document.starts_with("/*\n * Copyright (c) 2025 The ZMK Contributors\n"));
        assert!(document.contains("#include <dt-bindings/zmk/keys.h>\n\n/ {\n    behaviors {\n"));
        assert!(document.ends_with("        };\n\n    };\n};\n"));
        assert!(!document.contains(BEHAVIORS_PLACEHOLDER));
    }

    #[test]
    fn test_default_document_has_both_variant_sets() {
        let config = Config::default();
        let document = DtsiGenerator::new(&config)
            .unwrap()
            .generate_document()
            .unwrap();

        assert!(document.contains("        capslock_on: cplkon {\n"));
        assert!(document.contains("        capslock_on_mac: cplkon2 {\n"));
        assert!(document.contains("            display-name = \"Capslock line (Mac)\";\n"));
        assert!(document.contains(
            "        };\n\n        /* MacOS compatibility (longer capslock press) */\n\n        #if ZMK_BEHAVIOR_OMIT(CAPSLOCK_ON_MAC)\n"
        ));
        assert_eq!(document.matches("/omit-if-no-ref/").count(), 10);
    }

    #[test]
    fn test_mac_variant_uses_long_press() {
        let config = Config::default();
        let tables = DtsiGenerator::new(&config)
            .unwrap()
            .expand_variants()
            .unwrap();

        assert_eq!(tables.len(), 2);
        let (_, hold) = tables[1].get_by_name("capslock_hold_mac").unwrap();
        assert_eq!(
            hold.get("capslock-press-duration"),
            Some(&PropertyValue::raw("<95>"))
        );
    }

    #[test]
    fn test_custom_base_table_and_variants() {
        let config = Config {
            indent: 0,
            variants: vec![
                VariantConfig {
                    comment: Some("Fast".to_string()),
                    press_duration: Some(1),
                    ..VariantConfig::default()
                },
                VariantConfig {
                    suffix: Suffix::new("_slow", "s", ""),
                    ..VariantConfig::default()
                },
            ],
            ..Config::default()
        };
        let mut base = BehaviorTable::new();
        base.insert(
            BehaviorKey::new("caps", "cp"),
            PropertyMap::new().with("enable-on-press", PropertyValue::Flag),
        )
        .unwrap();

        let behaviors = DtsiGenerator::with_base_table(&config, base)
            .generate_behaviors()
            .unwrap();

        let expected = [
            "/* Fast */",
            "",
            "#if ZMK_BEHAVIOR_OMIT(CAPS)",
            "/omit-if-no-ref/",
            "#endif",
            "caps: cp {",
            "    compatible = \"zmk,behavior-capslock\";",
            "    #binding-cells = <0>;",
            "    capslock-press-duration = <1>;",
            "    enable-on-press;",
            "};",
            "",
            "#if ZMK_BEHAVIOR_OMIT(CAPS_SLOW)",
            "/omit-if-no-ref/",
            "#endif",
            "caps_slow: cps {",
            "    compatible = \"zmk,behavior-capslock\";",
            "    #binding-cells = <0>;",
            "    enable-on-press;",
            "};",
            "",
        ]
        .join("\n");
        assert_eq!(behaviors, expected);
    }

    #[test]
    fn test_new_rejects_comment_that_closes_early() {
        let config = Config {
            variants: vec![VariantConfig {
                comment: Some("end */ oops".to_string()),
                ..VariantConfig::default()
            }],
            ..Config::default()
        };

        let err = DtsiGenerator::new(&config).err().unwrap();
        assert!(format!("{err:#}").contains("Invalid configuration"));
    }

    #[test]
    fn test_expansion_error_names_variant_set() {
        let config = Config::default();
        let mut base = BehaviorTable::new();
        base.insert(
            BehaviorKey::new("broken", "brk"),
            PropertyMap::new().with("display-name", PropertyValue::raw("unquoted")),
        )
        .unwrap();

        let err = DtsiGenerator::with_base_table(&config, base)
            .generate_document()
            .unwrap_err();
        assert!(format!("{err:#}").contains("variant set 1"));
    }
}
