/// Material factory: loads shader sets and materials, resolves inheritance
/// and materializes materials per runtime configuration.
///
/// Loading happens entirely in the constructor:
/// 1. `shader_set` scripts fill the shader set registry.
/// 2. `material` scripts become MaterialInstances (parent kept as a name).
/// 3. Parent names are resolved to slot map keys, then every parent chain is
///    checked for cycles.
///
/// A factory that fails any of these steps is never returned. Afterwards,
/// `request_material` lazily materializes (and caches) one variant per
/// (material, configuration) pair.

use std::sync::Arc;
use rustc_hash::{FxHashMap, FxHashSet};
use slotmap::SlotMap;
use crate::error::{self, Error, Result};
use crate::{engine_bail, engine_err, engine_debug, engine_info, engine_trace, engine_warn};
use crate::material::{
    Configuration, MaterialInstance, MaterialInstanceKey,
    MaterializedInstance, MaterializedMaterial, ResolvedMaterial,
};
use crate::platform::Platform;
use crate::script::{ScriptFile, ScriptLoader, ScriptNode};
use crate::shader::{ShaderSet, ShaderSetRegistry, ShaderType};

const SOURCE: &str = "galaxy3d::MaterialFactory";

/// Root node of a shader set declaration
pub const SHADER_SET_NODE: &str = "shader_set";
/// Root node of a material declaration
pub const MATERIAL_NODE: &str = "material";
pub const PASS_NODE: &str = "pass";
pub const TEXTURE_UNIT_NODE: &str = "texture_unit";
pub const PARENT_NODE: &str = "parent";

// ===== CONFIGURATION =====

/// Script discovery settings
#[derive(Debug, Clone)]
pub struct FactoryConfig {
    /// Extension of shader set scripts (without the dot)
    pub shader_set_extension: String,
    /// Extension of material scripts (without the dot)
    pub material_extension: String,
    /// Also load scripts from subdirectories of the platform base path
    pub recursive: bool,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            shader_set_extension: "shaderset".to_string(),
            material_extension: "material".to_string(),
            recursive: true,
        }
    }
}

// ===== FACTORY =====

pub struct Factory {
    platform: Box<dyn Platform>,
    shader_sets: ShaderSetRegistry,
    materials: SlotMap<MaterialInstanceKey, MaterialInstance>,
    material_names: FxHashMap<String, MaterialInstanceKey>,
    /// Keys in load order
    material_order: Vec<MaterialInstanceKey>,
}

impl Factory {
    /// Load every script under the platform base path (default settings)
    pub fn new(platform: Box<dyn Platform>) -> Result<Self> {
        Self::with_config(platform, FactoryConfig::default())
    }

    /// Load every script under the platform base path
    ///
    /// # Errors
    ///
    /// I/O and parse errors, plus every load error of `from_scripts`.
    pub fn with_config(platform: Box<dyn Platform>, config: FactoryConfig) -> Result<Self> {
        let loader = ScriptLoader::new(platform.base_path(), config.recursive);

        let shader_set_files = loader.load_all(&config.shader_set_extension)
            .map_err(|e| error::logged(SOURCE, e))?;
        let material_files = loader.load_all(&config.material_extension)
            .map_err(|e| error::logged(SOURCE, e))?;

        Self::from_scripts(platform, &shader_set_files, &material_files)
    }

    /// Build a factory from already parsed scripts
    ///
    /// # Errors
    ///
    /// - `InvalidResource` for malformed declarations
    /// - `DuplicateName` for shader sets or materials declared twice
    /// - `ParentNotFound` / `CyclicParent` for broken inheritance
    /// - any error returned by `Platform::create_material`
    pub fn from_scripts(
        platform: Box<dyn Platform>,
        shader_set_files: &[ScriptFile],
        material_files: &[ScriptFile],
    ) -> Result<Self> {
        let mut factory = Self {
            platform,
            shader_sets: ShaderSetRegistry::new(),
            materials: SlotMap::with_key(),
            material_names: FxHashMap::default(),
            material_order: Vec::new(),
        };

        factory.load_shader_sets(shader_set_files)?;
        factory.load_materials(material_files)?;
        factory.resolve_parents()?;
        factory.check_parent_cycles()?;

        engine_info!(SOURCE, "Loaded {} shader sets and {} materials",
            factory.shader_sets.len(), factory.materials.len());

        Ok(factory)
    }

    // ===== LOAD PHASE =====

    fn load_shader_sets(&mut self, files: &[ScriptFile]) -> Result<()> {
        for file in files {
            for root in file.roots() {
                if root.name() != SHADER_SET_NODE {
                    warn_unsupported_root(file, root, SHADER_SET_NODE);
                    continue;
                }

                let name = root.value();
                if name.is_empty() {
                    engine_bail!(SOURCE, "{}: shader_set declaration without a name", file.path());
                }

                let type_name = required_child(file, root, "type")?;
                let shader_type = type_name.parse::<ShaderType>()
                    .map_err(|_| engine_err!(SOURCE, "{}: shader_set '{}' has unknown type '{}'",
                        file.path(), name, type_name))?;
                let source = required_child(file, root, "source")?;

                self.shader_sets.register(name, shader_type, source)
                    .map_err(|e| error::logged(SOURCE, e))?;
            }
        }
        Ok(())
    }

    fn load_materials(&mut self, files: &[ScriptFile]) -> Result<()> {
        for file in files {
            for root in file.roots() {
                if root.name() != MATERIAL_NODE {
                    warn_unsupported_root(file, root, MATERIAL_NODE);
                    continue;
                }

                let instance = build_instance(file, root)?;
                let name = instance.name().to_string();

                if self.material_names.contains_key(&name) {
                    return Err(error::logged(SOURCE, Error::DuplicateName {
                        kind: "material",
                        name,
                    }));
                }

                self.platform.create_material(&name)
                    .map_err(|e| error::logged(SOURCE, e))?;

                let key = self.materials.insert(instance);
                self.material_names.insert(name, key);
                self.material_order.push(key);
            }
        }
        Ok(())
    }

    /// Replace parent names by keys. Every instance exists at this point,
    /// so declaration order does not matter.
    fn resolve_parents(&mut self) -> Result<()> {
        for &key in &self.material_order {
            let parent_key = {
                let instance = &self.materials[key];
                let Some(parent_name) = instance.parent_name() else {
                    continue;
                };
                match self.material_names.get(parent_name) {
                    Some(&parent_key) => parent_key,
                    None => {
                        return Err(error::logged(SOURCE, Error::ParentNotFound {
                            material: instance.name().to_string(),
                            parent: parent_name.to_string(),
                        }));
                    }
                }
            };

            if let Some(instance) = self.materials.get_mut(key) {
                instance.set_parent(parent_key);
            }
        }
        Ok(())
    }

    fn check_parent_cycles(&self) -> Result<()> {
        for &start in &self.material_order {
            let mut visited = FxHashSet::default();
            let mut walked: Vec<MaterialInstanceKey> = Vec::new();
            let mut current = Some(start);

            while let Some(key) = current {
                if !visited.insert(key) {
                    let cycle_start = walked.iter().position(|k| *k == key).unwrap_or(0);
                    let mut chain: Vec<String> = walked[cycle_start..]
                        .iter()
                        .map(|k| self.materials[*k].name().to_string())
                        .collect();
                    let material = self.materials[key].name().to_string();
                    chain.push(material.clone());
                    return Err(error::logged(SOURCE, Error::CyclicParent { material, chain }));
                }
                walked.push(key);
                current = self.materials[key].parent();
            }
        }
        Ok(())
    }

    // ===== LOOKUP =====

    /// Get a material instance by name, `None` if it was never loaded
    pub fn search(&self, name: &str) -> Option<&MaterialInstance> {
        let key = self.material_names.get(name)?;
        self.materials.get(*key)
    }

    /// Get a material instance that is known to exist
    ///
    /// # Panics
    ///
    /// Panics if `name` was not loaded. Use `search` when the material is
    /// optional.
    pub fn find(&self, name: &str) -> &MaterialInstance {
        match self.search(name) {
            Some(instance) => instance,
            None => panic!("Material instance '{}' is not registered", name),
        }
    }

    /// Get a material instance by key
    pub fn material(&self, key: MaterialInstanceKey) -> Option<&MaterialInstance> {
        self.materials.get(key)
    }

    /// Resolved parent of a material, `None` for roots and unknown names
    pub fn parent_of(&self, name: &str) -> Option<&MaterialInstance> {
        let parent = self.search(name)?.parent()?;
        self.materials.get(parent)
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Material names in load order
    pub fn material_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.material_order.iter().map(|k| self.materials[*k].name())
    }

    pub fn shader_sets(&self) -> &ShaderSetRegistry {
        &self.shader_sets
    }

    /// Get a shader set by name
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no shader set has this name.
    pub fn shader_set(&self, name: &str) -> Result<&Arc<ShaderSet>> {
        self.shader_sets.lookup(name)
    }

    // ===== RESOLUTION =====

    /// Flatten a material's inheritance chain without caching anything
    pub fn resolve(&self, name: &str) -> Option<ResolvedMaterial> {
        let key = *self.material_names.get(name)?;
        Some(self.resolve_key(key))
    }

    fn resolve_key(&self, key: MaterialInstanceKey) -> ResolvedMaterial {
        ResolvedMaterial::from_chain(self.chain_of(key))
    }

    /// Instances from the root ancestor down to `key`
    fn chain_of(&self, key: MaterialInstanceKey) -> Vec<&MaterialInstance> {
        let mut chain = Vec::new();
        let mut current = self.materials.get(key);
        while let Some(instance) = current {
            chain.push(instance);
            current = instance.parent().and_then(|parent| self.materials.get(parent));
        }
        chain.reverse();
        chain
    }

    /// Get a material materialized for a configuration
    ///
    /// The first request of a (material, configuration) pair resolves the
    /// inheritance chain and asks the platform for a binding; later requests
    /// return the cached variant.
    ///
    /// Returns `Ok(None)` without side effects if the material does not exist.
    ///
    /// # Errors
    ///
    /// - `NotFound` / `InvalidResource` if a pass references an unknown or
    ///   mismatched shader set (configurations with shaders only)
    /// - any error returned by `Platform::create_configuration`
    pub fn request_material(
        &mut self,
        name: &str,
        configuration: &str,
    ) -> Result<Option<&MaterialInstance>> {
        let Some(&key) = self.material_names.get(name) else {
            return Ok(None);
        };

        if self.materials[key].has_configuration(configuration) {
            engine_trace!(SOURCE, "Cache hit for '{}' / '{}'", name, configuration);
        } else {
            let materialized = self.materialize(key, configuration)?;
            if let Some(instance) = self.materials.get_mut(key) {
                instance.insert_configuration(materialized);
            }
        }

        Ok(self.materials.get(key))
    }

    fn materialize(
        &mut self,
        key: MaterialInstanceKey,
        configuration: &str,
    ) -> Result<MaterializedInstance> {
        let resolved = self.resolve_key(key);
        let material = MaterializedMaterial::build(
            resolved,
            Configuration::parse(configuration),
            &self.shader_sets,
        )?;

        let binding = self.platform.create_configuration(&material)
            .map_err(|e| error::logged(SOURCE, e))?;

        engine_debug!(SOURCE, "Materialized '{}' for configuration '{}' ({} passes)",
            material.name(), configuration, material.pass_count());

        Ok(MaterializedInstance::new(material, binding))
    }

    /// Drop every cached configuration of a material
    ///
    /// The next `request_material` rebuilds them. Returns false if the
    /// material does not exist.
    pub fn invalidate_material(&mut self, name: &str) -> bool {
        let Some(&key) = self.material_names.get(name) else {
            return false;
        };
        if let Some(instance) = self.materials.get_mut(key) {
            let dropped = instance.clear_configurations();
            engine_debug!(SOURCE, "Invalidated {} configurations of '{}'", dropped, name);
        }
        true
    }

    // ===== FRAME =====

    /// Forward the per-frame notification to the platform
    pub fn notify_frame_entered(&mut self) {
        self.platform.notify_frame_entered();
    }
}

impl Drop for Factory {
    fn drop(&mut self) {
        engine_debug!(SOURCE, "Factory destroyed ({} materials)", self.materials.len());
    }
}

// ===== SCRIPT HELPERS =====

/// Turn one `material` declaration into a MaterialInstance
fn build_instance(file: &ScriptFile, root: &ScriptNode) -> Result<MaterialInstance> {
    let name = root.value();
    if name.is_empty() {
        engine_bail!(SOURCE, "{}: material declaration without a name", file.path());
    }

    let mut instance = MaterialInstance::new(name);

    // Explicit passes first, in declaration order
    for pass_node in root.children().iter().filter(|c| c.name() == PASS_NODE) {
        let pass = instance.create_pass(pass_node.value());
        for child in pass_node.children() {
            if child.name() == TEXTURE_UNIT_NODE {
                let unit = pass.create_texture_unit(child.value());
                for unit_child in child.children() {
                    unit.set_property(unit_child.name(), unit_child.value());
                }
            } else {
                pass.set_property(child.name(), child.value());
            }
        }
    }

    // Then everything that is not a pass
    for child in root.children().iter().filter(|c| c.name() != PASS_NODE) {
        if child.name() == PARENT_NODE {
            instance.set_parent_name(child.value());
        } else {
            instance.set_property(child.name(), child.value());
        }
    }

    Ok(instance)
}

fn required_child<'a>(file: &ScriptFile, root: &'a ScriptNode, child: &str) -> Result<&'a str> {
    root.find_child(child)
        .map(|node| node.value())
        .ok_or_else(|| engine_err!(SOURCE, "{}: {} '{}' has no '{}'",
            file.path(), root.name(), root.value(), child))
}

fn warn_unsupported_root(file: &ScriptFile, root: &ScriptNode, expected: &str) {
    engine_warn!(SOURCE, "{}: unsupported root node type '{}' (expected '{}'), skipped",
        file.path(), root.name(), expected);
}

#[cfg(test)]
#[path = "factory_tests.rs"]
mod tests;
