/// Property values held by material property bags.
///
/// Script-authored values are stored as `PropertyValue::String`; the typed
/// accessors interpret them on demand, so the resolver stays type-agnostic
/// and the platform binder decides what a property means.

use std::fmt;
use glam::{Vec2, Vec3, Vec4};

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    String(String),
    Number(f32),
    Vector(Vec<f32>),
    Bool(bool),
}

impl PropertyValue {
    /// Raw string payload (only for `String` values)
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            PropertyValue::String(s) => s.trim().parse().ok(),
            PropertyValue::Vector(v) if v.len() == 1 => Some(v[0]),
            _ => None,
        }
    }

    /// Accepts `true/false`, `yes/no`, `on/off` and `1/0` in strings
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            PropertyValue::Number(n) => Some(*n != 0.0),
            PropertyValue::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Some(true),
                "false" | "no" | "off" | "0" => Some(false),
                _ => None,
            },
            PropertyValue::Vector(_) => None,
        }
    }

    /// All components as floats (whitespace separated in strings)
    pub fn as_floats(&self) -> Option<Vec<f32>> {
        match self {
            PropertyValue::Vector(v) => Some(v.clone()),
            PropertyValue::Number(n) => Some(vec![*n]),
            PropertyValue::String(s) => s
                .split_whitespace()
                .map(|part| part.parse::<f32>().ok())
                .collect(),
            PropertyValue::Bool(_) => None,
        }
    }

    pub fn as_vec2(&self) -> Option<Vec2> {
        match self.as_floats()?.as_slice() {
            [x, y] => Some(Vec2::new(*x, *y)),
            _ => None,
        }
    }

    pub fn as_vec3(&self) -> Option<Vec3> {
        match self.as_floats()?.as_slice() {
            [x, y, z] => Some(Vec3::new(*x, *y, *z)),
            _ => None,
        }
    }

    pub fn as_vec4(&self) -> Option<Vec4> {
        match self.as_floats()?.as_slice() {
            [x, y, z, w] => Some(Vec4::new(*x, *y, *z, *w)),
            _ => None,
        }
    }
}

/// Script representation of the value
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => f.write_str(s),
            PropertyValue::Number(n) => write!(f, "{}", n),
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Vector(v) => {
                let parts: Vec<String> = v.iter().map(|c| c.to_string()).collect();
                f.write_str(&parts.join(" "))
            }
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<Vec2> for PropertyValue {
    fn from(value: Vec2) -> Self {
        PropertyValue::Vector(value.to_array().to_vec())
    }
}

impl From<Vec3> for PropertyValue {
    fn from(value: Vec3) -> Self {
        PropertyValue::Vector(value.to_array().to_vec())
    }
}

impl From<Vec4> for PropertyValue {
    fn from(value: Vec4) -> Self {
        PropertyValue::Vector(value.to_array().to_vec())
    }
}

#[cfg(test)]
#[path = "property_tests.rs"]
mod tests;
