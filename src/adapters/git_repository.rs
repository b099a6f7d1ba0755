use std::path::Path;

use git2::{IndexAddOption, Repository, Signature};
use log::debug;

use crate::domain::AppError;
use crate::ports::VersionControl;

/// Commit message of the first commit in a generated project.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from Create NPM Package";

/// Repository initialization through libgit2.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitRepositoryAdapter;

impl GitRepositoryAdapter {
    pub fn new() -> Self {
        Self
    }
}

fn git_error(operation: &str, err: git2::Error) -> AppError {
    AppError::ExternalToolError { tool: "git".to_string(), error: format!("{}: {}", operation, err) }
}

impl VersionControl for GitRepositoryAdapter {
    fn is_inside_repository(&self, dir: &Path) -> bool {
        if Repository::discover(dir).is_ok() {
            return true;
        }
        dir.ancestors().any(|ancestor| ancestor.join(".hg").is_dir())
    }

    fn initialize(&self, dir: &Path) -> Result<(), AppError> {
        let repo = Repository::init(dir).map_err(|e| git_error("init", e))?;
        debug!("initialized git repository in {}", dir.display());

        let mut index = repo.index().map_err(|e| git_error("index", e))?;
        index
            .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
            .map_err(|e| git_error("add", e))?;
        index.write().map_err(|e| git_error("index write", e))?;
        let tree_id = index.write_tree().map_err(|e| git_error("write-tree", e))?;
        let tree = repo.find_tree(tree_id).map_err(|e| git_error("find tree", e))?;

        let signature: Signature<'_> = repo.signature().map_err(|e| git_error("signature", e))?;
        repo.commit(Some("HEAD"), &signature, &signature, INITIAL_COMMIT_MESSAGE, &tree, &[])
            .map_err(|e| git_error("commit", e))?;

        Ok(())
    }
}
