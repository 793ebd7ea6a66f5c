//! Capslock Behaviors Library
//!
//! This library generates the devicetree include that declares the ZMK
//! capslock behaviors (`capslock_on`, `capslock_word`, ...) together with
//! their platform-specific variants.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod firmware;
pub mod models;
