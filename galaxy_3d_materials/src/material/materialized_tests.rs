/// Tests for MaterializedMaterial

use super::*;
use crate::error::Error;
use crate::material::MaterialInstance;

fn registry() -> ShaderSetRegistry {
    let mut registry = ShaderSetRegistry::new();
    registry.register("main_vertex", ShaderType::Vertex, "main.shader").unwrap();
    registry.register("main_fragment", ShaderType::Fragment, "main.shader").unwrap();
    registry
}

fn resolved_with_programs(vertex: &str, fragment: &str) -> ResolvedMaterial {
    let mut instance = MaterialInstance::new("rock");
    let pass = instance.create_pass("");
    pass.set_property(VERTEX_PROGRAM_PROPERTY, vertex);
    pass.set_property(FRAGMENT_PROGRAM_PROPERTY, fragment);
    pass.set_property("diffuse_map", "rock.png");
    ResolvedMaterial::from_chain([&instance])
}

#[test]
fn test_shaders_configuration_attaches_shader_sets() {
    let material = MaterializedMaterial::build(
        resolved_with_programs("main_vertex", "main_fragment"),
        Configuration::parse("shaders"),
        &registry(),
    ).unwrap();

    assert_eq!(material.name(), "rock");
    assert_eq!(material.pass_count(), 1);
    let pass = material.pass(0).unwrap();
    assert_eq!(pass.vertex_shader().unwrap().name(), "main_vertex");
    assert_eq!(pass.fragment_shader().unwrap().name(), "main_fragment");
    assert_eq!(pass.pass().get_property("diffuse_map").unwrap().as_str(), Some("rock.png"));
}

#[test]
fn test_fixed_function_configuration_skips_shader_lookup() {
    // Unknown shader names are not an error without the shaders flag
    let material = MaterializedMaterial::build(
        resolved_with_programs("missing_vertex", "missing_fragment"),
        Configuration::parse("fixed_function"),
        &registry(),
    ).unwrap();

    let pass = material.pass(0).unwrap();
    assert!(pass.vertex_shader().is_none());
    assert!(pass.fragment_shader().is_none());
    assert_eq!(material.configuration().name(), "fixed_function");
}

#[test]
fn test_unknown_shader_set_fails() {
    let result = MaterializedMaterial::build(
        resolved_with_programs("missing_vertex", "main_fragment"),
        Configuration::parse("shaders"),
        &registry(),
    );

    assert_eq!(
        result.unwrap_err(),
        Error::NotFound { kind: "shader set", name: "missing_vertex".to_string() }
    );
}

#[test]
fn test_wrong_shader_type_fails() {
    let result = MaterializedMaterial::build(
        resolved_with_programs("main_fragment", "main_fragment"),
        Configuration::parse("shaders"),
        &registry(),
    );

    match result {
        Err(Error::InvalidResource(msg)) => {
            assert!(msg.contains("rock"));
            assert!(msg.contains("expected vertex"));
        }
        other => panic!("unexpected result {:?}", other.map(|m| m.name().to_string())),
    }
}

#[test]
fn test_pass_without_programs_has_no_shaders() {
    let mut instance = MaterialInstance::new("plain");
    instance.create_pass("").set_property("diffuse_map", "plain.png");

    let material = MaterializedMaterial::build(
        ResolvedMaterial::from_chain([&instance]),
        Configuration::parse("shaders"),
        &registry(),
    ).unwrap();

    assert!(material.pass(0).unwrap().vertex_shader().is_none());
}
