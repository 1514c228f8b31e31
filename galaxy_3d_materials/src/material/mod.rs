//! Material module
//!
//! Material instances (passes, texture units, property bags), inheritance
//! resolution and configuration-specific materialization.

pub mod property;
pub mod property_set;
pub mod texture_unit;
pub mod pass;
pub mod material_instance;
pub mod configuration;
pub mod resolver;
pub mod materialized;

pub use property::PropertyValue;
pub use property_set::PropertySet;
pub use texture_unit::MaterialInstanceTextureUnit;
pub use pass::MaterialInstancePass;
pub use material_instance::{MaterialInstance, MaterialInstanceKey};
pub use configuration::{Configuration, ConfigurationFlags};
pub use resolver::ResolvedMaterial;
pub use materialized::{
    MaterializedInstance, MaterializedMaterial, MaterializedPass,
    VERTEX_PROGRAM_PROPERTY, FRAGMENT_PROGRAM_PROPERTY,
};
