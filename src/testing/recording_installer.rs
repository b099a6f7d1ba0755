use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::PackageInstaller;

/// Installer that records requests instead of spawning a process.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct RecordingInstaller {
    pub calls: RefCell<Vec<(PathBuf, Vec<String>)>>,
    fail: bool,
}

#[allow(dead_code)]
impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }
}

impl PackageInstaller for RecordingInstaller {
    fn install(&self, project_dir: &Path, packages: &[&str]) -> Result<(), AppError> {
        self.calls.borrow_mut().push((
            project_dir.to_path_buf(),
            packages.iter().map(|p| p.to_string()).collect(),
        ));
        if self.fail {
            return Err(AppError::ExternalToolError {
                tool: "npm".to_string(),
                error: io::Error::other("exit status 1").to_string(),
            });
        }
        Ok(())
    }
}
