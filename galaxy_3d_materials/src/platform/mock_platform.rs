/// Mock Platform for unit tests (no renderer required)
///
/// Records every call in a shared `MockPlatformState` so tests can inspect
/// it after the platform has been moved into a Factory.

#[cfg(test)]
use std::path::{Path, PathBuf};
#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use crate::error::{Error, Result};
#[cfg(test)]
use crate::material::MaterializedMaterial;
#[cfg(test)]
use super::platform::{Platform, PlatformMaterial};

// ============================================================================
// Mock Platform Material
// ============================================================================

#[cfg(test)]
#[derive(Debug)]
pub struct MockPlatformMaterial {
    pub material: String,
    pub configuration: String,
    pub pass_count: usize,
}

#[cfg(test)]
impl PlatformMaterial for MockPlatformMaterial {
    fn material_name(&self) -> &str {
        &self.material
    }

    fn configuration(&self) -> &str {
        &self.configuration
    }
}

// ============================================================================
// Mock Platform
// ============================================================================

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockPlatformState {
    pub created_materials: Vec<String>,
    /// (material, configuration) per create_configuration call
    pub bindings: Vec<(String, String)>,
    pub frames_entered: u32,
    /// When set, create_configuration fails with a BackendError
    pub fail_bindings: bool,
}

#[cfg(test)]
pub struct MockPlatform {
    base_path: PathBuf,
    state: Arc<Mutex<MockPlatformState>>,
}

#[cfg(test)]
impl MockPlatform {
    pub fn new() -> (Self, Arc<Mutex<MockPlatformState>>) {
        Self::with_base_path(PathBuf::from("."))
    }

    pub fn with_base_path(base_path: PathBuf) -> (Self, Arc<Mutex<MockPlatformState>>) {
        let state = Arc::new(Mutex::new(MockPlatformState::default()));
        (Self { base_path, state: state.clone() }, state)
    }
}

#[cfg(test)]
impl Platform for MockPlatform {
    fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn create_material(&mut self, name: &str) -> Result<()> {
        self.state.lock().unwrap().created_materials.push(name.to_string());
        Ok(())
    }

    fn create_configuration(
        &mut self,
        material: &MaterializedMaterial,
    ) -> Result<Arc<dyn PlatformMaterial>> {
        let mut state = self.state.lock().unwrap();
        if state.fail_bindings {
            return Err(Error::BackendError(format!(
                "Mock binding failure for '{}'", material.name()
            )));
        }

        state.bindings.push((
            material.name().to_string(),
            material.configuration().name().to_string(),
        ));

        Ok(Arc::new(MockPlatformMaterial {
            material: material.name().to_string(),
            configuration: material.configuration().name().to_string(),
            pass_count: material.pass_count(),
        }))
    }

    fn notify_frame_entered(&mut self) {
        self.state.lock().unwrap().frames_entered += 1;
    }
}
