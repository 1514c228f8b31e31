/// Script file discovery and loading.
///
/// Walks a base directory and parses every file with a given extension.
/// Files are returned in sorted path order so loading is deterministic.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use crate::error::{Error, Result};
use super::script_parser::ScriptFile;

pub struct ScriptLoader {
    base_path: PathBuf,
    recursive: bool,
}

impl ScriptLoader {
    pub fn new(base_path: impl Into<PathBuf>, recursive: bool) -> Self {
        Self {
            base_path: base_path.into(),
            recursive,
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Paths of all files ending in `.{extension}`, sorted
    ///
    /// Symlinks are not followed, so a link back to a parent directory
    /// cannot make the same script show up twice.
    pub fn find_files(&self, extension: &str) -> Result<Vec<PathBuf>> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(&self.base_path)
            .max_depth(max_depth)
            .sort_by_file_name();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| walk_error(&self.base_path, e))?;
            if entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == extension)
            {
                files.push(entry.into_path());
            }
        }
        files.sort();
        Ok(files)
    }

    /// Parse all files with the given extension
    pub fn load_all(&self, extension: &str) -> Result<Vec<ScriptFile>> {
        let mut scripts = Vec::new();
        for path in self.find_files(extension)? {
            let source = fs::read_to_string(&path).map_err(|e| io_error(&path, e))?;
            scripts.push(ScriptFile::parse(path.display().to_string(), &source)?);
        }
        Ok(scripts)
    }
}

fn io_error(path: &Path, error: std::io::Error) -> Error {
    Error::Io {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}

fn walk_error(base_path: &Path, error: walkdir::Error) -> Error {
    let path = error.path().unwrap_or(base_path);
    Error::Io {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}

#[cfg(test)]
#[path = "script_loader_tests.rs"]
mod tests;
