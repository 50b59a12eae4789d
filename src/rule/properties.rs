//! Ordered CSS property maps.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered mapping from CSS property name to value.
///
/// Insertion order is the declaration order of the emitted block. Keys are
/// unique: inserting an existing property replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: Vec<(String, String)>,
}

impl PropertyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` declarations.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Set a property, returning the previous value if it was already present.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let property = property.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((property, value));
                None
            }
        }
    }

    /// Builder-style `insert`.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    /// Get the value of a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether a property is set.
    pub fn contains(&self, property: &str) -> bool {
        self.entries.iter().any(|(p, _)| p == property)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if any declaration has an empty (or all-whitespace) value.
    pub fn has_empty_value(&self) -> bool {
        self.entries.iter().any(|(_, v)| v.trim().is_empty())
    }

    /// Iterate declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Iterate property names in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for PropertyMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = PropertyMap::new();
        for (property, value) in iter {
            map.insert(property, value);
        }
        map
    }
}

impl fmt::Display for PropertyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}: {};", property, value)?;
        }
        Ok(())
    }
}

impl Serialize for PropertyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (property, value) in &self.entries {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}
