/// Material pass: one rendering stage with its own properties and an
/// ordered list of texture units.
///
/// Passes are exclusively owned by their material instance, texture units
/// by their pass.

use super::property::PropertyValue;
use super::property_set::PropertySet;
use super::texture_unit::MaterialInstanceTextureUnit;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterialInstancePass {
    name: String,
    properties: PropertySet,
    texture_units: Vec<MaterialInstanceTextureUnit>,
}

impl MaterialInstancePass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: PropertySet::new(),
            texture_units: Vec::new(),
        }
    }

    /// Pass name from the script (`pass <name>`), usually empty
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a texture unit, returned for filling in its properties
    pub fn create_texture_unit(&mut self, name: &str) -> &mut MaterialInstanceTextureUnit {
        self.texture_units.push(MaterialInstanceTextureUnit::new(name));
        let last = self.texture_units.len() - 1;
        &mut self.texture_units[last]
    }

    pub fn texture_units(&self) -> &[MaterialInstanceTextureUnit] {
        &self.texture_units
    }

    /// Get a texture unit by name
    pub fn texture_unit(&self, name: &str) -> Option<&MaterialInstanceTextureUnit> {
        self.texture_units.iter().find(|u| u.name() == name)
    }

    pub fn texture_unit_count(&self) -> usize {
        self.texture_units.len()
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

    /// Overlay a more-derived pass onto this one.
    ///
    /// Properties of `other` win. Texture units are matched by name, unnamed
    /// units by position; unmatched units of `other` are appended.
    pub(crate) fn merge_from(&mut self, other: &MaterialInstancePass) {
        if !other.name.is_empty() {
            self.name = other.name.clone();
        }
        self.properties.merge_from(&other.properties);

        for (position, unit) in other.texture_units.iter().enumerate() {
            let target = if unit.name().is_empty() {
                self.texture_units
                    .get(position)
                    .filter(|existing| existing.name().is_empty())
                    .map(|_| position)
            } else {
                self.texture_units.iter().position(|existing| existing.name() == unit.name())
            };

            match target {
                Some(index) => self.texture_units[index].merge_from(unit),
                None => self.texture_units.push(unit.clone()),
            }
        }
    }

    /// Apply properties that are not already set on the pass
    pub(crate) fn apply_defaults(&mut self, defaults: &PropertySet) {
        for (name, value) in defaults.iter() {
            if !self.properties.contains(name) {
                self.properties.set_property(name, value.clone());
            }
        }
    }
}

#[cfg(test)]
#[path = "pass_tests.rs"]
mod tests;
