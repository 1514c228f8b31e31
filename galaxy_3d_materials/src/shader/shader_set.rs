/// Shader set: a named shader implementation family and its source.
///
/// Shader sets are plain data. Compiling or validating the source is the
/// platform's business; this layer only stores and looks them up.

use std::fmt;
use std::str::FromStr;
use crate::error::{Error, Result};

/// Pipeline stage a shader set implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderType {
    Vertex,
    Fragment,
    Geometry,
}

impl ShaderType {
    /// Script spelling of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            ShaderType::Vertex => "vertex",
            ShaderType::Fragment => "fragment",
            ShaderType::Geometry => "geometry",
        }
    }
}

impl FromStr for ShaderType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertex" => Ok(ShaderType::Vertex),
            "fragment" => Ok(ShaderType::Fragment),
            "geometry" => Ok(ShaderType::Geometry),
            other => Err(Error::InvalidResource(format!("Unknown shader type '{}'", other))),
        }
    }
}

impl fmt::Display for ShaderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSet {
    name: String,
    shader_type: ShaderType,
    source: String,
}

impl ShaderSet {
    pub(crate) fn new(name: String, shader_type: ShaderType, source: String) -> Self {
        Self { name, shader_type, source }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shader_type(&self) -> ShaderType {
        self.shader_type
    }

    /// Opaque reference to the shader source (usually a file name)
    pub fn source(&self) -> &str {
        &self.source
    }
}
