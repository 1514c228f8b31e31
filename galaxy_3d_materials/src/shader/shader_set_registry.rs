/// Registry of shader sets, keyed by name.
///
/// Filled once by the material factory at load time, read-only afterwards.
/// Shader sets are shared with materialized passes through `Arc`.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use super::shader_set::{ShaderSet, ShaderType};

#[derive(Default)]
pub struct ShaderSetRegistry {
    shader_sets: Vec<Arc<ShaderSet>>,
    shader_set_names: FxHashMap<String, usize>,
}

impl ShaderSetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new shader set
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateName` if a shader set with this name exists.
    pub fn register(
        &mut self,
        name: &str,
        shader_type: ShaderType,
        source: &str,
    ) -> Result<Arc<ShaderSet>> {
        if self.shader_set_names.contains_key(name) {
            return Err(Error::DuplicateName { kind: "shader set", name: name.to_string() });
        }

        let shader_set = Arc::new(ShaderSet::new(
            name.to_string(),
            shader_type,
            source.to_string(),
        ));
        self.shader_set_names.insert(name.to_string(), self.shader_sets.len());
        self.shader_sets.push(Arc::clone(&shader_set));
        Ok(shader_set)
    }

    /// Get a shader set by name
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no shader set has this name.
    pub fn lookup(&self, name: &str) -> Result<&Arc<ShaderSet>> {
        self.get(name)
            .ok_or_else(|| Error::NotFound { kind: "shader set", name: name.to_string() })
    }

    /// Soft lookup, `None` if absent
    pub fn get(&self, name: &str) -> Option<&Arc<ShaderSet>> {
        let index = self.shader_set_names.get(name)?;
        self.shader_sets.get(*index)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.shader_set_names.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.shader_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shader_sets.is_empty()
    }

    /// Shader set names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.shader_sets.iter().map(|s| s.name())
    }

    /// Shader sets in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ShaderSet>> + '_ {
        self.shader_sets.iter()
    }
}

#[cfg(test)]
#[path = "shader_set_registry_tests.rs"]
mod tests;
