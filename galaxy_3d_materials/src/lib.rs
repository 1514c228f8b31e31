/*!
# Galaxy 3D Materials

Data-driven material system for the Galaxy 3D engine.

Shader sets and materials are declared in text scripts (`.shaderset`,
`.material`). A `Factory` loads them, links material inheritance and
materializes each material lazily for the runtime configurations the
renderer asks for. The renderer side is abstracted behind the `Platform`
trait.

## Architecture

- **ScriptFile / ScriptNode**: generic script trees
- **ShaderSetRegistry**: named shader set declarations
- **MaterialInstance**: passes, texture units and properties of one material
- **ResolvedMaterial**: a material flattened over its parent chain
- **MaterializedMaterial**: a resolved material bound to a configuration
- **Factory**: loading, lookup and per-configuration cache
- **Platform**: renderer collaborator
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod script;
pub mod shader;
pub mod material;
pub mod platform;
pub mod factory;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton (logging)
    pub use crate::engine::Engine;

    // Material factory
    pub use crate::factory::{Factory, FactoryConfig};

    // Renderer collaborator traits
    pub use crate::platform::{Platform, PlatformMaterial};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Material sub-module
    pub mod material {
        pub use crate::material::*;
    }

    // Shader set sub-module
    pub mod shader {
        pub use crate::shader::*;
    }

    // Script sub-module
    pub mod script {
        pub use crate::script::*;
    }
}

// Re-export math library at crate root
pub use glam;
