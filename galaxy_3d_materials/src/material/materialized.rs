/// Configuration-specific material variants.
///
/// A `MaterializedMaterial` is a resolved material specialised for one
/// configuration: when the configuration has shaders, each pass's
/// `vertex_program` / `fragment_program` property is looked up in the shader
/// set registry. The platform turns it into a binding; both are cached
/// together as a `MaterializedInstance` on the material instance.

use std::sync::Arc;
use crate::error::{self, Result};
use crate::engine_err;
use crate::platform::PlatformMaterial;
use crate::shader::{ShaderSet, ShaderSetRegistry, ShaderType};
use super::configuration::{Configuration, ConfigurationFlags};
use super::pass::MaterialInstancePass;
use super::property_set::PropertySet;
use super::resolver::ResolvedMaterial;

/// Pass property naming the vertex shader set
pub const VERTEX_PROGRAM_PROPERTY: &str = "vertex_program";

/// Pass property naming the fragment shader set
pub const FRAGMENT_PROGRAM_PROPERTY: &str = "fragment_program";

// ===== MATERIALIZED PASS =====

#[derive(Debug, Clone)]
pub struct MaterializedPass {
    pass: MaterialInstancePass,
    vertex_shader: Option<Arc<ShaderSet>>,
    fragment_shader: Option<Arc<ShaderSet>>,
}

impl MaterializedPass {
    /// Flattened pass (properties and texture units)
    pub fn pass(&self) -> &MaterialInstancePass {
        &self.pass
    }

    pub fn vertex_shader(&self) -> Option<&Arc<ShaderSet>> {
        self.vertex_shader.as_ref()
    }

    pub fn fragment_shader(&self) -> Option<&Arc<ShaderSet>> {
        self.fragment_shader.as_ref()
    }
}

// ===== MATERIALIZED MATERIAL =====

#[derive(Debug, Clone)]
pub struct MaterializedMaterial {
    name: String,
    configuration: Configuration,
    properties: PropertySet,
    passes: Vec<MaterializedPass>,
}

impl MaterializedMaterial {
    pub(crate) fn build(
        resolved: ResolvedMaterial,
        configuration: Configuration,
        shader_sets: &ShaderSetRegistry,
    ) -> Result<Self> {
        let (name, properties, passes) = resolved.into_parts();
        let with_shaders = configuration.has(ConfigurationFlags::SHADERS);

        let mut materialized_passes = Vec::with_capacity(passes.len());
        for pass in passes {
            let (vertex_shader, fragment_shader) = if with_shaders {
                (
                    shader_for(&name, &pass, VERTEX_PROGRAM_PROPERTY, ShaderType::Vertex, shader_sets)?,
                    shader_for(&name, &pass, FRAGMENT_PROGRAM_PROPERTY, ShaderType::Fragment, shader_sets)?,
                )
            } else {
                (None, None)
            };

            materialized_passes.push(MaterializedPass {
                pass,
                vertex_shader,
                fragment_shader,
            });
        }

        Ok(Self {
            name,
            configuration,
            properties,
            passes: materialized_passes,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Flattened unscoped properties
    pub fn properties(&self) -> &PropertySet {
        &self.properties
    }

    pub fn passes(&self) -> &[MaterializedPass] {
        &self.passes
    }

    pub fn pass(&self, index: usize) -> Option<&MaterializedPass> {
        self.passes.get(index)
    }

    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }
}

fn shader_for(
    material: &str,
    pass: &MaterialInstancePass,
    property: &str,
    expected: ShaderType,
    shader_sets: &ShaderSetRegistry,
) -> Result<Option<Arc<ShaderSet>>> {
    let Some(value) = pass.get_property(property) else {
        return Ok(None);
    };
    let set_name = value.to_string();

    let shader_set = shader_sets.lookup(&set_name)
        .map_err(|e| error::logged("galaxy3d::MaterialFactory", e))?;

    if shader_set.shader_type() != expected {
        return Err(engine_err!("galaxy3d::MaterialFactory",
            "Material '{}': {} '{}' is a {} shader set, expected {}",
            material, property, set_name, shader_set.shader_type(), expected));
    }

    Ok(Some(Arc::clone(shader_set)))
}

// ===== MATERIALIZED INSTANCE =====

/// Cached variant of a material instance for one configuration
#[derive(Debug, Clone)]
pub struct MaterializedInstance {
    material: MaterializedMaterial,
    binding: Arc<dyn PlatformMaterial>,
}

impl MaterializedInstance {
    pub(crate) fn new(material: MaterializedMaterial, binding: Arc<dyn PlatformMaterial>) -> Self {
        Self { material, binding }
    }

    pub fn material(&self) -> &MaterializedMaterial {
        &self.material
    }

    pub fn configuration(&self) -> &Configuration {
        self.material.configuration()
    }

    /// Platform-side binding created for this configuration
    pub fn binding(&self) -> &Arc<dyn PlatformMaterial> {
        &self.binding
    }
}

#[cfg(test)]
#[path = "materialized_tests.rs"]
mod tests;
