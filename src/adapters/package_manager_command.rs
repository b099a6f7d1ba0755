use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;

use crate::domain::{AppError, PackageManager};
use crate::ports::PackageInstaller;

/// Installs dev dependencies by spawning the configured package manager.
///
/// The child inherits the console so install progress is visible to the user.
#[derive(Debug, Clone, Copy)]
pub struct PackageManagerCommand {
    manager: PackageManager,
}

impl PackageManagerCommand {
    pub fn new(manager: PackageManager) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> PackageManager {
        self.manager
    }

    /// Full argument vector for an install of `packages`.
    pub fn args<'a>(&self, packages: &[&'a str]) -> Vec<&'a str> {
        let mut args: Vec<&str> = self.manager.install_args().to_vec();
        args.extend_from_slice(packages);
        args
    }
}

impl PackageInstaller for PackageManagerCommand {
    fn install(&self, project_dir: &Path, packages: &[&str]) -> Result<(), AppError> {
        let program = self.manager.program();
        let args = self.args(packages);
        debug!("running {} {} in {}", program, args.join(" "), project_dir.display());

        let status = Command::new(program)
            .args(&args)
            .current_dir(project_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| AppError::ExternalToolError {
                tool: program.to_string(),
                error: format!("Failed to execute {}: {}", program, e),
            })?;

        if !status.success() {
            return Err(AppError::ExternalToolError {
                tool: program.to_string(),
                error: match status.code() {
                    Some(code) => format!("`{} {}` exited with status {}", program, args[0], code),
                    None => format!("`{} {}` was terminated by a signal", program, args[0]),
                },
            });
        }

        Ok(())
    }
}
