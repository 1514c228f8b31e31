//! Shader set module
//!
//! Named shader set declarations and their registry.

mod shader_set;
mod shader_set_registry;

pub use shader_set::{ShaderSet, ShaderType};
pub use shader_set_registry::ShaderSetRegistry;
