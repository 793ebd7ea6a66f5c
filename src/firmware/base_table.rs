//! The canonical set of capslock behaviors.

use crate::constants::props;
use crate::models::{BehaviorKey, BehaviorTable, PropertyMap, PropertyValue};
use anyhow::Result;

/// Builds the five hand-authored capslock behaviors.
///
/// | label           | node      | semantics                                   |
/// |-----------------|-----------|---------------------------------------------|
/// | `capslock_on`   | `cplkon`  | enable on press                             |
/// | `capslock_off`  | `cplkoff` | disable on release                          |
/// | `capslock_hold` | `cplkhld` | enabled while held                          |
/// | `capslock_word` | `cplkwrd` | enabled until space, tab, or enter          |
/// | `capslock_line` | `cplkln`  | enabled until enter                         |
///
/// The table carries only behavior-specific properties; identification
/// properties are added by [`crate::firmware::expander::expand`].
pub fn capslock_behaviors() -> Result<BehaviorTable> {
    let mut table = BehaviorTable::new();

    table.insert(
        BehaviorKey::new("capslock_on", "cplkon"),
        PropertyMap::new()
            .with(props::ENABLE_ON_PRESS, PropertyValue::Flag)
            .with(props::DISPLAY_NAME, PropertyValue::string("Capslock on")),
    )?;
    table.insert(
        BehaviorKey::new("capslock_off", "cplkoff"),
        PropertyMap::new()
            .with(props::DISABLE_ON_RELEASE, PropertyValue::Flag)
            .with(props::DISPLAY_NAME, PropertyValue::string("Capslock off")),
    )?;
    table.insert(
        BehaviorKey::new("capslock_hold", "cplkhld"),
        PropertyMap::new()
            .with(props::ENABLE_ON_PRESS, PropertyValue::Flag)
            .with(props::DISABLE_ON_RELEASE, PropertyValue::Flag)
            .with(props::DISPLAY_NAME, PropertyValue::string("Capslock hold")),
    )?;
    table.insert(
        BehaviorKey::new("capslock_word", "cplkwrd"),
        PropertyMap::new()
            .with(props::ENABLE_ON_PRESS, PropertyValue::Flag)
            .with(props::DISABLE_ON_NEXT_RELEASE, PropertyValue::Flag)
            .with(
                props::DISABLE_ON_KEYS,
                PropertyValue::cell_list(["SPACE", "TAB", "ENTER"]),
            )
            .with(props::DISPLAY_NAME, PropertyValue::string("Capslock word")),
    )?;
    table.insert(
        BehaviorKey::new("capslock_line", "cplkln"),
        PropertyMap::new()
            .with(props::ENABLE_ON_PRESS, PropertyValue::Flag)
            .with(props::DISABLE_ON_NEXT_RELEASE, PropertyValue::Flag)
            .with(props::DISABLE_ON_KEYS, PropertyValue::cell_list(["ENTER"]))
            .with(props::DISPLAY_NAME, PropertyValue::string("Capslock line")),
    )?;

    Ok(table)
}
