/// Tests for PropertySet

use super::*;

#[test]
fn test_new_is_empty() {
    let set = PropertySet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert!(set.get_property("anything").is_none());
}

#[test]
fn test_set_and_get() {
    let mut set = PropertySet::new();
    set.set_property("diffuse_map", "rock.png");

    assert_eq!(set.get_property("diffuse_map"), Some(&PropertyValue::from("rock.png")));
    assert!(set.contains("diffuse_map"));
    assert!(!set.contains("normal_map"));
}

#[test]
fn test_last_write_wins_and_keeps_position() {
    let mut set = PropertySet::new();
    set.set_property("a", "1");
    set.set_property("b", "2");
    set.set_property("a", "3");

    assert_eq!(set.len(), 2);
    assert_eq!(set.get_property("a").unwrap().as_str(), Some("3"));
    let names: Vec<&str> = set.names().collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn test_iteration_follows_authored_order() {
    let mut set = PropertySet::new();
    for name in ["z", "m", "a"] {
        set.set_property(name, name);
    }
    let pairs: Vec<(&str, String)> = set.iter().map(|(n, v)| (n, v.to_string())).collect();
    assert_eq!(pairs, vec![
        ("z", "z".to_string()),
        ("m", "m".to_string()),
        ("a", "a".to_string()),
    ]);
}

#[test]
fn test_merge_from_other_wins() {
    let mut base = PropertySet::new();
    base.set_property("diffuse_map", "x.png");
    base.set_property("ambient", "1 1 1");

    let mut overlay = PropertySet::new();
    overlay.set_property("diffuse_map", "z.png");
    overlay.set_property("normal_map", "y.png");

    base.merge_from(&overlay);

    assert_eq!(base.len(), 3);
    assert_eq!(base.get_property("diffuse_map").unwrap().as_str(), Some("z.png"));
    assert_eq!(base.get_property("ambient").unwrap().as_str(), Some("1 1 1"));
    assert_eq!(base.get_property("normal_map").unwrap().as_str(), Some("y.png"));
    let names: Vec<&str> = base.names().collect();
    assert_eq!(names, vec!["diffuse_map", "ambient", "normal_map"]);
}

#[test]
fn test_equality_ignores_order() {
    let mut a = PropertySet::new();
    a.set_property("x", "1");
    a.set_property("y", "2");

    let mut b = PropertySet::new();
    b.set_property("y", "2");
    b.set_property("x", "1");

    assert_eq!(a, b);

    b.set_property("x", "5");
    assert_ne!(a, b);
}
