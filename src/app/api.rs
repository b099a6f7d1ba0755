//! API Facade for the application.
//!
//! Glues context creation, real adapters and command execution together.
//! Process-wide state (working directory, home directory) is passed in by the caller.

use std::path::{Path, PathBuf};

use crate::adapters::{
    EmbeddedTemplateStore, GitRepositoryAdapter, LocalProjectFilesystem, MinijinjaTemplateRenderer,
    PackageManagerCommand,
};
use crate::app::AppContext;
use crate::app::commands::create;
use crate::domain::{LanguageVariant, TargetEnvironment, ToolConfig, validate};

pub use crate::app::commands::create::{CreateOptions, CreateOutcome, InstallStatus, VcsStatus};
pub use crate::app::config::load_config;
pub use crate::domain::AppError;

/// Answers for one run, already resolved from flags or prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    pub name: String,
    pub scope: String,
    pub variant: LanguageVariant,
    pub target: TargetEnvironment,
    /// Output directory relative to the base directory; defaults to the package name.
    pub directory: Option<PathBuf>,
    pub skip_install: bool,
    pub skip_git: bool,
}

/// Directory the project will be generated into.
pub fn project_dir(base_dir: &Path, request: &CreateRequest) -> PathBuf {
    match &request.directory {
        Some(dir) => base_dir.join(dir),
        None => base_dir.join(&request.name),
    }
}

/// Create an `AppContext` rooted at a project directory.
fn create_context(
    path: PathBuf,
) -> AppContext<LocalProjectFilesystem, EmbeddedTemplateStore, MinijinjaTemplateRenderer> {
    AppContext::new(
        LocalProjectFilesystem::new(path),
        EmbeddedTemplateStore::new(),
        MinijinjaTemplateRenderer::new(),
    )
}

/// Generate a new package under `base_dir`.
pub fn create_at(
    base_dir: &Path,
    request: &CreateRequest,
    config: &ToolConfig,
) -> Result<CreateOutcome, AppError> {
    let (identity, selection) =
        validate(&request.name, &request.scope, request.variant, request.target)?;

    let ctx = create_context(project_dir(base_dir, request));
    let installer = PackageManagerCommand::new(config.package_manager);
    let vcs = GitRepositoryAdapter::new();
    let options = CreateOptions {
        install: config.install && !request.skip_install,
        git: config.git && !request.skip_git,
        manifest: config.manifest_defaults(),
    };

    create::execute(&ctx, &installer, &vcs, &identity, selection, &options)
}
