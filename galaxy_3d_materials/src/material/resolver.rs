/// Inheritance resolution: flattens a material's parent chain.
///
/// Walks the chain from the root ancestor down to the requested instance,
/// each level overriding the previous one:
///
/// - Unscoped properties merge by name, child wins.
/// - Passes merge by position. A level's unscoped properties fill in its own
///   first pass (explicit pass values win); a level without passes but with
///   unscoped properties contributes them as an implicit first pass.
/// - Texture units merge by name inside matching passes.
///
/// Values are never interpreted here.

use super::material_instance::MaterialInstance;
use super::pass::MaterialInstancePass;
use super::property_set::PropertySet;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedMaterial {
    name: String,
    chain: Vec<String>,
    properties: PropertySet,
    passes: Vec<MaterialInstancePass>,
}

impl ResolvedMaterial {
    /// Flatten a chain given root first, requested instance last
    pub(crate) fn from_chain<'a, I>(chain: I) -> Self
    where
        I: IntoIterator<Item = &'a MaterialInstance>,
    {
        let mut resolved = ResolvedMaterial::default();

        for instance in chain {
            resolved.name = instance.name().to_string();
            resolved.chain.push(instance.name().to_string());
            resolved.properties.merge_from(instance.properties());

            if let Some(first) = effective_first_pass(instance) {
                resolved.merge_pass(0, &first);
            }
            for (index, pass) in instance.passes().iter().enumerate().skip(1) {
                resolved.merge_pass(index, pass);
            }
        }

        resolved
    }

    fn merge_pass(&mut self, index: usize, pass: &MaterialInstancePass) {
        match self.passes.get_mut(index) {
            Some(existing) => existing.merge_from(pass),
            None => self.passes.push(pass.clone()),
        }
    }

    /// Name of the resolved (most derived) material
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Material names from the root ancestor to this material
    pub fn chain(&self) -> &[String] {
        &self.chain
    }

    /// Flattened unscoped properties
    pub fn properties(&self) -> &PropertySet {
        &self.properties
    }

    /// Flattened passes in render order
    pub fn passes(&self) -> &[MaterialInstancePass] {
        &self.passes
    }

    pub fn pass(&self, index: usize) -> Option<&MaterialInstancePass> {
        self.passes.get(index)
    }

    pub(crate) fn into_parts(self) -> (String, PropertySet, Vec<MaterialInstancePass>) {
        (self.name, self.properties, self.passes)
    }
}

fn effective_first_pass(instance: &MaterialInstance) -> Option<MaterialInstancePass> {
    let mut first = match instance.passes().first() {
        Some(pass) => pass.clone(),
        None if !instance.properties().is_empty() => MaterialInstancePass::new(""),
        None => return None,
    };
    first.apply_defaults(instance.properties());
    Some(first)
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
