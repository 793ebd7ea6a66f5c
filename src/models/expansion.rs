//! Parameters applied when expanding the base behavior table.

use crate::constants::{DEFAULT_BINDING_CELLS, DEFAULT_COMPATIBLE};
use serde::{Deserialize, Serialize};

/// Fragments appended to a behavior's label, node name, and display name.
///
/// All parts default to empty, which leaves the behavior unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Suffix {
    /// Appended to the node label (`capslock_on` + `_mac`)
    pub name: String,
    /// Appended to the node name (`cplkon` + `2`)
    pub short_name: String,
    /// Inserted before the closing quote of `display-name`
    pub display: String,
}

impl Suffix {
    /// Creates a suffix from its three parts.
    pub fn new(
        name: impl Into<String>,
        short_name: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
            display: display.into(),
        }
    }

    /// Returns true if every part is empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.short_name.is_empty() && self.display.is_empty()
    }
}

/// Everything the expander needs besides the base table itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionParams {
    /// Value of the `compatible` property (unquoted)
    pub compatible: String,
    /// Value of `#binding-cells`
    pub binding_cells: u32,
    /// `capslock-press-duration` in milliseconds, omitted when `None`
    pub press_duration: Option<u32>,
    /// `capslock-press-keycode`, omitted when `None` (firmware falls back to CAPSLOCK)
    pub press_keycode: Option<String>,
    /// Identifier and display suffixes for this variant set
    pub suffix: Suffix,
}

impl Default for ExpansionParams {
    fn default() -> Self {
        Self {
            compatible: DEFAULT_COMPATIBLE.to_string(),
            binding_cells: DEFAULT_BINDING_CELLS,
            press_duration: None,
            press_keycode: None,
            suffix: Suffix::default(),
        }
    }
}

impl ExpansionParams {
    /// Sets the press duration.
    pub fn with_press_duration(mut self, press_duration: u32) -> Self {
        self.press_duration = Some(press_duration);
        self
    }

    /// Sets the suffix.
    pub fn with_suffix(mut self, suffix: Suffix) -> Self {
        self.suffix = suffix;
        self
    }
}
