/// Ordered bag of named properties.
///
/// Lookup is by name; iteration follows first-insertion order so that
/// resolution output is deterministic. Setting an existing name replaces
/// the value in place (last write wins, position kept).

use rustc_hash::FxHashMap;
use super::property::PropertyValue;

#[derive(Debug, Clone, Default)]
pub struct PropertySet {
    properties: Vec<(String, PropertyValue)>,
    property_names: FxHashMap<String, usize>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, overwriting any previous value with the same name
    pub fn set_property(&mut self, name: &str, value: impl Into<PropertyValue>) {
        let value = value.into();
        match self.property_names.get(name) {
            Some(&index) => self.properties[index].1 = value,
            None => {
                self.property_names.insert(name.to_string(), self.properties.len());
                self.properties.push((name.to_string(), value));
            }
        }
    }

    /// Get a property value, `None` if not present
    pub fn get_property(&self, name: &str) -> Option<&PropertyValue> {
        let index = self.property_names.get(name)?;
        self.properties.get(*index).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.property_names.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// (name, value) pairs in authored order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> + '_ {
        self.properties.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.properties.iter().map(|(n, _)| n.as_str())
    }

    /// Overlay `other` on top of `self` (values of `other` win)
    pub fn merge_from(&mut self, other: &PropertySet) {
        for (name, value) in other.iter() {
            self.set_property(name, value.clone());
        }
    }
}

/// Equality ignores insertion order
impl PartialEq for PropertySet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(name, value)| other.get_property(name) == Some(value))
    }
}

#[cfg(test)]
#[path = "property_set_tests.rs"]
mod tests;
