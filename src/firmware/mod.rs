//! Devicetree generation for the capslock behaviors.
//!
//! This module builds the canonical behavior table, expands it into variant
//! sets, and renders the result as a ZMK devicetree include.

pub mod base_table;
pub mod expander;
pub mod generator;
pub mod renderer;

// Re-export firmware types
pub use expander::expand;
pub use generator::DtsiGenerator;
pub use renderer::render;
