//! `ProjectFilesystem` implementation backed by the local disk.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

/// Filesystem rooted at the project directory.
///
/// Path operations are validated against the root to prevent directory traversal.
#[derive(Debug, Clone)]
pub struct LocalProjectFilesystem {
    root: PathBuf,
}

impl LocalProjectFilesystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, AppError> {
        let full_path = normalize_path(&self.root.join(path));
        if !full_path.starts_with(normalize_path(&self.root)) {
            return Err(AppError::InvalidPath(format!("{} escapes the project root", path)));
        }
        Ok(full_path)
    }
}

impl ProjectFilesystem for LocalProjectFilesystem {
    fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_root(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.root).map_err(AppError::from)
    }

    fn list_entries(&self) -> Result<Vec<String>, AppError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        names.sort();
        Ok(names)
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.resolve(path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve(path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn remove_file(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.resolve(path)?;
        if full_path.exists() {
            fs::remove_file(full_path)?;
        }
        Ok(())
    }

    fn remove_dir_all(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.resolve(path)?;
        if full_path.exists() {
            fs::remove_dir_all(full_path)?;
        }
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.resolve(path).map(|p| p.exists()).unwrap_or(false)
    }

    fn is_dir(&self, path: &str) -> bool {
        self.resolve(path).map(|p| p.is_dir()).unwrap_or(false)
    }
}

/// Resolve `.` and `..` components logically, without touching the filesystem.
fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
