use std::path::Path;

use crate::domain::AppError;

/// Port for repository initialization in a new project.
pub trait VersionControl {
    /// Whether `dir` already sits inside a git or mercurial working tree.
    fn is_inside_repository(&self, dir: &Path) -> bool;

    /// Create a repository in `dir` and record an initial commit.
    fn initialize(&self, dir: &Path) -> Result<(), AppError>;
}
