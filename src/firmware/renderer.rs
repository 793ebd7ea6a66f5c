//! Devicetree rendering of expanded behavior tables.

use crate::constants::INDENT_UNIT;
use crate::models::{BehaviorKey, BehaviorTable, PropertyMap, PropertyValue};

/// Renders every behavior of `table` as a guarded devicetree node.
///
/// Each node is emitted at `base_indent` levels of indentation as:
///
/// ```text
/// #if ZMK_BEHAVIOR_OMIT(CAPSLOCK_ON)
/// /omit-if-no-ref/
/// #endif
/// capslock_on: cplkon {
///     compatible = "zmk,behavior-capslock";
///     enable-on-press;
/// };
///
/// ```
///
/// Blank lines are never indented. The result ends with the blank line that
/// follows the last node.
pub fn render(table: &BehaviorTable, base_indent: usize) -> String {
    let mut lines = Vec::new();
    for (key, properties) in table.iter() {
        node_lines(key, properties, base_indent, &mut lines);
    }

    lines
        .iter()
        .map(|(depth, line)| indent_line(*depth, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indents a single line by `depth` units; empty lines stay empty.
pub fn indent_line(depth: usize, line: &str) -> String {
    if line.is_empty() {
        String::new()
    } else {
        format!("{}{line}", INDENT_UNIT.repeat(depth))
    }
}

fn node_lines(
    key: &BehaviorKey,
    properties: &PropertyMap,
    indent: usize,
    lines: &mut Vec<(usize, String)>,
) {
    lines.push((indent, format!("#if ZMK_BEHAVIOR_OMIT({})", key.guard_name())));
    lines.push((indent, "/omit-if-no-ref/".to_string()));
    lines.push((indent, "#endif".to_string()));
    lines.push((indent, format!("{}: {} {{", key.name, key.short_name)));

    for (name, value) in properties.iter() {
        if let Some(line) = property_line(name, value) {
            lines.push((indent + 1, line));
        }
    }

    lines.push((indent, "};".to_string()));
    lines.push((indent, String::new()));
}

fn property_line(name: &str, value: &PropertyValue) -> Option<String> {
    match value {
        PropertyValue::Flag => Some(format!("{name};")),
        PropertyValue::Assignment(literal) => Some(format!("{name} = {literal};")),
        PropertyValue::Omitted => None,
    }
}
