/// Material instance: a named, inheritable bundle of passes and properties.
///
/// Instances are created by the factory at load time and stored in a slot
/// map. The parent is first recorded by name, then resolved to a stable key
/// once every instance exists. After loading, only the per-configuration
/// cache changes.

use rustc_hash::FxHashMap;
use slotmap::new_key_type;
use super::materialized::MaterializedInstance;
use super::pass::MaterialInstancePass;
use super::property::PropertyValue;
use super::property_set::PropertySet;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a MaterialInstance within a Factory.
    pub struct MaterialInstanceKey;
}

// ===== MATERIAL INSTANCE =====

#[derive(Debug)]
pub struct MaterialInstance {
    name: String,
    passes: Vec<MaterialInstancePass>,
    /// Properties declared outside any pass
    properties: PropertySet,
    /// Parent name as written in the script (unresolved)
    parent_name: Option<String>,
    /// Parent key, set by the factory's resolution pass
    parent: Option<MaterialInstanceKey>,
    /// Materialized variants, keyed by configuration string
    configurations: FxHashMap<String, MaterializedInstance>,
}

impl MaterialInstance {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passes: Vec::new(),
            properties: PropertySet::new(),
            parent_name: None,
            parent: None,
            configurations: FxHashMap::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ===== PASSES =====

    /// Append a pass, returned for filling in its properties and texture units
    pub fn create_pass(&mut self, name: &str) -> &mut MaterialInstancePass {
        self.passes.push(MaterialInstancePass::new(name));
        let last = self.passes.len() - 1;
        &mut self.passes[last]
    }

    /// Passes as declared on this instance (not inherited), in render order
    pub fn passes(&self) -> &[MaterialInstancePass] {
        &self.passes
    }

    pub fn pass(&self, index: usize) -> Option<&MaterialInstancePass> {
        self.passes.get(index)
    }

    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    // ===== PROPERTIES =====

    pub fn set_property(&mut self, name: &str, value: impl Into<PropertyValue>) {
        self.properties.set_property(name, value);
    }

    pub fn get_property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get_property(name)
    }

    /// Properties declared outside any pass
    pub fn properties(&self) -> &PropertySet {
        &self.properties
    }

    // ===== PARENT =====

    /// Parent name as declared, `None` for root materials
    pub fn parent_name(&self) -> Option<&str> {
        self.parent_name.as_deref()
    }

    /// Resolved parent key
    pub fn parent(&self) -> Option<MaterialInstanceKey> {
        self.parent
    }

    pub(crate) fn set_parent_name(&mut self, name: &str) {
        self.parent_name = if name.is_empty() { None } else { Some(name.to_string()) };
    }

    pub(crate) fn set_parent(&mut self, key: MaterialInstanceKey) {
        self.parent = Some(key);
    }

    // ===== MATERIALIZED CONFIGURATIONS =====

    /// Materialized variant for a configuration, if it was requested before
    pub fn configuration(&self, configuration: &str) -> Option<&MaterializedInstance> {
        self.configurations.get(configuration)
    }

    pub fn has_configuration(&self, configuration: &str) -> bool {
        self.configurations.contains_key(configuration)
    }

    pub fn configuration_count(&self) -> usize {
        self.configurations.len()
    }

    pub(crate) fn insert_configuration(&mut self, instance: MaterializedInstance) {
        self.configurations
            .insert(instance.configuration().name().to_string(), instance);
    }

    pub(crate) fn clear_configurations(&mut self) -> usize {
        let count = self.configurations.len();
        self.configurations.clear();
        count
    }
}
