use std::path::Path;

use crate::domain::AppError;

/// Port for the dependency install step.
pub trait PackageInstaller {
    /// Install `packages` as development dependencies of the project at `project_dir`.
    ///
    /// Blocks until the install finishes; a non-zero exit is an error.
    fn install(&self, project_dir: &Path, packages: &[&str]) -> Result<(), AppError>;
}
