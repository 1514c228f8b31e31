/// Platform trait - the renderer-facing side of the material system
///
/// The factory resolves materials; the platform turns the result into
/// whatever the underlying renderer binds (material objects, techniques,
/// pipeline states...). Implemented by renderer integrations and by test
/// mocks. A factory owns its platform exclusively and drops it on teardown.

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use crate::error::Result;
use crate::material::MaterializedMaterial;

/// Renderer-side object created for one (material, configuration) pair
pub trait PlatformMaterial: Send + Sync + fmt::Debug {
    /// Name of the material this binding was created for
    fn material_name(&self) -> &str;

    /// Configuration string this binding was created for
    fn configuration(&self) -> &str;
}

/// Main platform trait
pub trait Platform: Send {
    /// Directory containing the `.shaderset` and `.material` scripts
    fn base_path(&self) -> &Path;

    /// Called once per material instance while the factory loads
    ///
    /// # Arguments
    ///
    /// * `name` - Material name
    fn create_material(&mut self, name: &str) -> Result<()>;

    /// Create the renderer binding for a materialized material
    ///
    /// Called on the first request of each (material, configuration) pair.
    /// Repeated requests reuse the cached binding.
    fn create_configuration(
        &mut self,
        material: &MaterializedMaterial,
    ) -> Result<Arc<dyn PlatformMaterial>>;

    /// Per-frame hook forwarded by `Factory::notify_frame_entered`
    fn notify_frame_entered(&mut self);
}
