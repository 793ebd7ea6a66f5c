//! Application-wide constants.
//!
//! This module defines the devicetree literals shared by the expander,
//! renderer, and document generator.

/// Compatible string of the ZMK capslock behavior driver.
pub const DEFAULT_COMPATIBLE: &str = "zmk,behavior-capslock";

/// Capslock behaviors take no binding parameters.
pub const DEFAULT_BINDING_CELLS: u32 = 0;

/// Nesting depth of behavior nodes inside `/ { behaviors { ... }; };`.
pub const DEFAULT_INDENT: usize = 2;

/// One level of indentation in the generated devicetree.
pub const INDENT_UNIT: &str = "    ";

/// Press duration (ms) for hosts that react to short capslock taps.
pub const DEFAULT_PRESS_DURATION: u32 = 5;

/// Press duration (ms) for macOS, which ignores short capslock taps.
pub const MAC_PRESS_DURATION: u32 = 95;

/// Property names understood by the capslock behavior binding.
pub mod props {
    /// Driver compatible string
    pub const COMPATIBLE: &str = "compatible";
    /// Number of binding parameters
    pub const BINDING_CELLS: &str = "#binding-cells";
    /// Duration of the synthetic capslock press
    pub const PRESS_DURATION: &str = "capslock-press-duration";
    /// Keycode sent for the synthetic capslock press
    pub const PRESS_KEYCODE: &str = "capslock-press-keycode";
    /// Turn capslock on when the key is pressed
    pub const ENABLE_ON_PRESS: &str = "enable-on-press";
    /// Turn capslock off when the key is released
    pub const DISABLE_ON_RELEASE: &str = "disable-on-release";
    /// Turn capslock off on the next key release
    pub const DISABLE_ON_NEXT_RELEASE: &str = "disable-on-next-release";
    /// Keys whose release turns capslock off
    pub const DISABLE_ON_KEYS: &str = "disable-on-keys";
    /// Human-readable name shown by ZMK Studio
    pub const DISPLAY_NAME: &str = "display-name";
}
