/// Texture unit: a named slot inside a pass binding a texture and its properties.

use super::property::PropertyValue;
use super::property_set::PropertySet;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterialInstanceTextureUnit {
    name: String,
    properties: PropertySet,
}

impl MaterialInstanceTextureUnit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: PropertySet::new(),
        }
    }

    /// Unit name (may be empty for unnamed units)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_property(&mut self, name: &str, value: impl Into<PropertyValue>) {
        self.properties.set_property(name, value);
    }

    pub fn get_property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get_property(name)
    }

    pub fn properties(&self) -> &PropertySet {
        &self.properties
    }

    pub(crate) fn merge_from(&mut self, other: &MaterialInstanceTextureUnit) {
        self.properties.merge_from(&other.properties);
    }
}
