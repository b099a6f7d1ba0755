use std::path::Path;

use crate::domain::AppError;

/// Port for file operations inside the project being generated.
///
/// Paths are relative to the project root.
pub trait ProjectFilesystem {
    /// Absolute path of the project root.
    fn root(&self) -> &Path;

    /// Create the project root if it does not exist.
    fn ensure_root(&self) -> Result<(), AppError>;

    /// Names of the entries directly under the root; empty when the root is absent.
    fn list_entries(&self) -> Result<Vec<String>, AppError>;

    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Remove a file; missing files are not an error.
    fn remove_file(&self, path: &str) -> Result<(), AppError>;

    /// Remove a directory tree; missing directories are not an error.
    fn remove_dir_all(&self, path: &str) -> Result<(), AppError>;

    fn file_exists(&self, path: &str) -> bool;

    fn is_dir(&self, path: &str) -> bool;
}
