/// Tests for ScriptLoader
///
/// Uses the fixture scripts shipped under `tests/data`.

use super::*;

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

#[test]
fn test_find_files_recursive_sorted() {
    let loader = ScriptLoader::new(data_dir(), true);
    let files = loader.find_files("material").unwrap();

    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("base.material"));
    assert!(files[1].ends_with("derived/wet_rock.material"));
}

#[test]
fn test_find_files_non_recursive() {
    let loader = ScriptLoader::new(data_dir(), false);
    let files = loader.find_files("material").unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("base.material"));
}

#[test]
fn test_find_files_ignores_other_extensions() {
    let loader = ScriptLoader::new(data_dir(), true);
    let files = loader.find_files("shaderset").unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("main.shaderset"));
}

#[test]
fn test_load_all_parses_files() {
    let loader = ScriptLoader::new(data_dir(), true);
    let scripts = loader.load_all("shaderset").unwrap();

    assert_eq!(scripts.len(), 1);
    let roots = scripts[0].roots();
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0].value(), "main_vertex");
    assert_eq!(roots[1].value(), "main_fragment");
    assert!(scripts[0].path().ends_with("main.shaderset"));
}

#[test]
fn test_missing_directory_is_io_error() {
    let loader = ScriptLoader::new(data_dir().join("does_not_exist"), true);
    match loader.find_files("material") {
        Err(Error::Io { path, .. }) => assert!(path.contains("does_not_exist")),
        other => panic!("unexpected result {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_symlink_back_to_parent_is_not_followed() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("a.material"), "material a { }").unwrap();
    fs::create_dir(root.path().join("sub")).unwrap();
    std::os::unix::fs::symlink(root.path(), root.path().join("sub").join("back")).unwrap();

    let loader = ScriptLoader::new(root.path(), true);
    let files = loader.find_files("material").unwrap();

    assert_eq!(files, vec![root.path().join("a.material")]);
    assert_eq!(loader.load_all("material").unwrap().len(), 1);
}
