//! Error types for the Galaxy3D material system
//!
//! This module defines the error types used while loading shader sets and
//! materials and while materializing them for a runtime configuration.

use std::fmt;

/// Result type for Galaxy3D material operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D material system errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error reported by the platform collaborator (material binding, etc.)
    BackendError(String),

    /// Malformed declaration (missing child, bad shader type, empty name...)
    InvalidResource(String),

    /// A name was registered twice (`kind` is "shader set", "material"...)
    DuplicateName { kind: &'static str, name: String },

    /// A named item does not exist
    NotFound { kind: &'static str, name: String },

    /// A material declares a parent that was never loaded
    ParentNotFound { material: String, parent: String },

    /// A material's parent chain loops back on itself
    CyclicParent { material: String, chain: Vec<String> },

    /// Script text could not be parsed
    ScriptParse { file: String, line: usize, message: String },

    /// File system error while reading scripts
    Io { path: String, message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::DuplicateName { kind, name } => {
                write!(f, "Duplicate {} name '{}'", kind, name)
            }
            Error::NotFound { kind, name } => write!(f, "{} '{}' not found", kind, name),
            Error::ParentNotFound { material, parent } => write!(
                f,
                "Unable to find parent '{}' for material instance '{}'",
                parent, material
            ),
            Error::CyclicParent { material, chain } => write!(
                f,
                "Cyclic parent chain for material instance '{}': {}",
                material,
                chain.join(" -> ")
            ),
            Error::ScriptParse { file, line, message } => {
                write!(f, "Script parse error in {}:{}: {}", file, line, message)
            }
            Error::Io { path, message } => write!(f, "I/O error on '{}': {}", path, message),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error through the engine logger and hand it back (internal use)
///
/// The entry carries the caller's file:line, not this function's.
#[track_caller]
pub(crate) fn logged(source: &str, error: Error) -> Error {
    let location = std::panic::Location::caller();
    crate::galaxy3d::Engine::log_detailed(
        crate::galaxy3d::log::LogSeverity::Error,
        source,
        error.to_string(),
        location.file(),
        location.line(),
    );
    error
}

// ===== ERROR MACROS =====

/// Build an `Error::InvalidResource`, logging it as an ERROR with file:line
///
/// # Example
///
/// ```ignore
/// let set = node.find_child("type")
///     .ok_or_else(|| engine_err!("galaxy3d::MaterialFactory", "Shader set '{}' has no type", name))?;
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::galaxy3d::Error::InvalidResource(message)
    }};
}

/// Return early with an `Error::InvalidResource`, logging it first
///
/// # Example
///
/// ```ignore
/// if name.is_empty() {
///     engine_bail!("galaxy3d::MaterialFactory", "Material declaration without a name");
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
