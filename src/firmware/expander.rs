//! Expansion of the base behavior table into a complete variant set.
//!
//! Every expanded behavior starts with the identification properties
//! (`compatible`, `#binding-cells`), followed by the optional press settings,
//! followed by the behavior's own properties in their original order.

use crate::constants::props;
use crate::models::{BehaviorTable, ExpansionParams, PropertyMap, PropertyValue};
use anyhow::{bail, Context, Result};
use tracing::debug;

/// Expands `base` into a fully resolved table using `params`.
///
/// Labels and node names are extended by the suffix, and the display suffix
/// is inserted before the closing quote of `display-name`. Entries without a
/// `display-name` keep their properties unchanged.
///
/// # Errors
///
/// Returns an error if a `display-name` is not a quoted string, or if the
/// suffix makes two behaviors collide.
pub fn expand(base: &BehaviorTable, params: &ExpansionParams) -> Result<BehaviorTable> {
    let mut expanded = BehaviorTable::new();

    for (key, properties) in base.iter() {
        let mut resolved = identification_properties(params);

        for (name, value) in properties.iter() {
            resolved.insert(name, value.clone());
        }

        if let Some(display_name) = resolved.get_mut(props::DISPLAY_NAME) {
            *display_name = append_display_suffix(display_name, &params.suffix.display)
                .with_context(|| format!("Invalid display-name for behavior '{key}'"))?;
        }

        let new_key = key.with_suffix(&params.suffix.name, &params.suffix.short_name);
        debug!("Expanded {} -> {} ({} properties)", key, new_key, resolved.len());
        expanded.insert(new_key, resolved)?;
    }

    Ok(expanded)
}

/// Properties every behavior node begins with.
fn identification_properties(params: &ExpansionParams) -> PropertyMap {
    let mut properties = PropertyMap::new()
        .with(props::COMPATIBLE, PropertyValue::string(&params.compatible))
        .with(props::BINDING_CELLS, PropertyValue::cells(params.binding_cells));

    if let Some(duration) = params.press_duration {
        properties.insert(props::PRESS_DURATION, PropertyValue::cells(duration));
    }
    if let Some(keycode) = &params.press_keycode {
        properties.insert(props::PRESS_KEYCODE, PropertyValue::cell_list([keycode]));
    }

    properties
}

/// Inserts `suffix` right before the closing quote of a quoted string literal.
///
/// `"Capslock word"` with ` (Mac)` becomes `"Capslock word (Mac)"`.
fn append_display_suffix(value: &PropertyValue, suffix: &str) -> Result<PropertyValue> {
    let Some(literal) = value.as_assignment() else {
        bail!("display-name must be a string, found {value:?}");
    };

    let Some(body) = literal.strip_suffix('"') else {
        bail!("display-name {literal} does not end with a closing quote");
    };
    if !body.starts_with('"') {
        bail!("display-name {literal} does not start with an opening quote");
    }

    let mut result = String::with_capacity(literal.len() + suffix.len());
    result.push_str(body);
    result.push_str(suffix);
    result.push('"');

    Ok(PropertyValue::Assignment(result))
}
