//! Shared testing harness for `create-npm-package` integration tests.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated home and working directory for CLI runs.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory CLI invocations run in.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(&self.work_dir)
    }

    /// Build a command for invoking the compiled binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd =
            Command::cargo_bin("create-npm-package").expect("Failed to locate create-npm-package binary");
        cmd.current_dir(dir.as_ref()).env("HOME", self.home());
        cmd
    }

    /// Command for a fully non-interactive run without install or git.
    pub(crate) fn create(&self, name: &str, language: &str, target: &str) -> Command {
        let mut cmd = self.cli();
        cmd.args([name, "--scope", "octo", "--language", language, "--target", target])
            .args(["--skip-install", "--skip-git"]);
        cmd
    }

    /// Path of a generated project inside the work directory.
    pub(crate) fn project(&self, dir: &str) -> PathBuf {
        self.work_dir.join(dir)
    }

    /// Write the per-user config file into the emulated home.
    pub(crate) fn write_home_config(&self, content: &str) {
        fs::write(self.home().join(".create-npm-package.toml"), content)
            .expect("Failed to write home config");
    }

    /// Create a file, with parents, relative to the work directory.
    pub(crate) fn write_work_file(&self, path: &str, content: &str) {
        let full = self.work_dir.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(full, content).expect("Failed to write work file");
    }

    pub(crate) fn read(&self, project: &str, file: &str) -> String {
        fs::read_to_string(self.project(project).join(file))
            .unwrap_or_else(|e| panic!("Failed to read {}/{}: {}", project, file, e))
    }

    pub(crate) fn read_json(&self, project: &str, file: &str) -> Value {
        serde_json::from_str(&self.read(project, file))
            .unwrap_or_else(|e| panic!("{}/{} is not valid JSON: {}", project, file, e))
    }
}
