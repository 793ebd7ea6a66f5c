//! Behavior keys, property values, and the ordered tables that hold them.
//!
//! Tables keep insertion order: the rendered devicetree lists nodes and
//! properties exactly in the order they were inserted.

use anyhow::{bail, Result};
use indexmap::IndexMap;
use std::fmt;

/// Identifies one behavior node: the node label and the node name.
///
/// The label (`name`) is what keymaps reference with `&name`; the node name
/// (`short_name`) is the compact alias written after the colon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BehaviorKey {
    /// Node label, e.g. `capslock_word`
    pub name: String,
    /// Node name, e.g. `cplkwrd`
    pub short_name: String,
}

impl BehaviorKey {
    /// Creates a new behavior key.
    pub fn new(name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
        }
    }

    /// Returns the key with both identifiers extended by the given suffixes.
    pub fn with_suffix(&self, name_suffix: &str, short_suffix: &str) -> Self {
        Self {
            name: format!("{}{}", self.name, name_suffix),
            short_name: format!("{}{}", self.short_name, short_suffix),
        }
    }

    /// Name of the preprocessor flag guarding this node (`CAPSLOCK_WORD`).
    pub fn guard_name(&self) -> String {
        self.name.to_uppercase()
    }
}

impl fmt::Display for BehaviorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.short_name)
    }
}

/// Value of a single devicetree property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// Boolean property set to true, rendered as a bare `name;`
    Flag,
    /// Pre-formatted devicetree literal, rendered as `name = value;`
    Assignment(String),
    /// Property present in the table but not emitted
    Omitted,
}

impl PropertyValue {
    /// A quoted string literal: `"text"`.
    pub fn string(text: &str) -> Self {
        Self::Assignment(format!("\"{text}\""))
    }

    /// A single cell: `<n>`.
    pub fn cells(value: u32) -> Self {
        Self::Assignment(format!("<{value}>"))
    }

    /// A list of cells or phandles: `<A B C>`.
    pub fn cell_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items: Vec<String> = items
            .into_iter()
            .map(|item| item.as_ref().to_string())
            .collect();
        Self::Assignment(format!("<{}>", items.join(" ")))
    }

    /// An already formatted literal, emitted verbatim.
    pub fn raw(value: impl Into<String>) -> Self {
        Self::Assignment(value.into())
    }

    /// Maps a boolean onto `Flag` / `Omitted`.
    pub fn flag(enabled: bool) -> Self {
        if enabled {
            Self::Flag
        } else {
            Self::Omitted
        }
    }

    /// Returns the assigned literal, if any.
    pub fn as_assignment(&self) -> Option<&str> {
        match self {
            Self::Assignment(value) => Some(value),
            Self::Flag | Self::Omitted => None,
        }
    }
}

/// Ordered property list of one behavior node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: IndexMap<String, PropertyValue>,
}

impl PropertyMap {
    /// Creates an empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a property.
    ///
    /// A name that is already present keeps its position and takes the new value.
    pub fn insert(&mut self, name: impl Into<String>, value: PropertyValue) {
        self.entries.insert(name.into(), value);
    }

    /// Builder-style variant of [`PropertyMap::insert`].
    pub fn with(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Looks up a property by name.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.entries.get(name)
    }

    /// Mutable lookup by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut PropertyValue> {
        self.entries.get_mut(name)
    }

    /// Iterates properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Property names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of properties, including omitted ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map holds no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered mapping from behavior key to its properties.
///
/// Both the label and the node name must be unique across the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BehaviorTable {
    entries: IndexMap<BehaviorKey, PropertyMap>,
}

impl BehaviorTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a behavior.
    ///
    /// # Errors
    ///
    /// Fails if another entry already uses the same label or node name.
    pub fn insert(&mut self, key: BehaviorKey, properties: PropertyMap) -> Result<()> {
        if let Some(existing) = self
            .entries
            .keys()
            .find(|k| k.name == key.name || k.short_name == key.short_name)
        {
            bail!("Behavior '{key}' collides with existing behavior '{existing}'");
        }
        self.entries.insert(key, properties);
        Ok(())
    }

    /// Looks up a behavior by its label.
    pub fn get_by_name(&self, name: &str) -> Option<(&BehaviorKey, &PropertyMap)> {
        self.entries.iter().find(|(key, _)| key.name == name)
    }

    /// Looks up a behavior by its full key.
    pub fn get(&self, key: &BehaviorKey) -> Option<&PropertyMap> {
        self.entries.get(key)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&BehaviorKey, &PropertyMap)> {
        self.entries.iter()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &BehaviorKey> {
        self.entries.keys()
    }

    /// Number of behaviors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no behaviors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
