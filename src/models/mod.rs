//! Data models for behavior tables and expansion parameters.
//!
//! Models are independent of rendering: the expander and renderer in
//! [`crate::firmware`] operate on these types.

pub mod behavior;
pub mod expansion;

// Re-export all model types
pub use behavior::{BehaviorKey, BehaviorTable, PropertyMap, PropertyValue};
pub use expansion::{ExpansionParams, Suffix};
