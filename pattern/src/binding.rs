//! Template variable bindings for shape matching.

use std::collections::BTreeMap;

/// Template variables bound by matching one source against its constraint.
///
/// A source is a parameter name or `return value`. The map is ordered by
/// variable name so reporting does not depend on hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    source: String,
    map: BTreeMap<String, usize>,
}

impl Bindings {
    /// Create empty bindings for a source.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            map: BTreeMap::new(),
        }
    }

    /// Create bindings with a single entry.
    pub fn with(source: impl Into<String>, name: impl Into<String>, size: usize) -> Self {
        let mut bindings = Self::new(source);
        bindings.insert(name, size);
        bindings
    }

    /// The source these bindings were collected from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Insert a binding, returning the size it replaced.
    pub fn insert(&mut self, name: impl Into<String>, size: usize) -> Option<usize> {
        self.map.insert(name.into(), size)
    }

    /// Get a binding by name.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.map.get(name).copied()
    }

    /// Check if a variable is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Get all variable names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(|s| s.as_str())
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over bindings.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.map.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
