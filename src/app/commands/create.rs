//! The create pipeline: synthesize → write → install → version control.

use std::path::PathBuf;

use log::{debug, info, warn};

use crate::app::AppContext;
use crate::app::services::ArtifactWriter;
use crate::domain::{AppError, ManifestDefaults, PackageIdentity, Selection, synthesize};
use crate::ports::{
    PackageInstaller, ProjectFilesystem, TemplateRenderer, TemplateTreeStore, VersionControl,
};

/// Options controlling the optional steps of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOptions {
    pub install: bool,
    pub git: bool,
    pub manifest: ManifestDefaults,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self { install: true, git: true, manifest: ManifestDefaults::default() }
    }
}

/// Result of the dependency install step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStatus {
    Skipped,
    Installed,
    /// Install failed; artifacts stay written.
    Failed(String),
}

/// Result of the version-control step. Failures are never reported as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsStatus {
    Skipped,
    AlreadyInRepository,
    Initialized,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    pub project_dir: PathBuf,
    pub package_name: String,
    pub identifier: String,
    pub selection: Selection,
    pub written: Vec<String>,
    pub removed_logs: Vec<String>,
    pub installed_packages: Vec<String>,
    pub install: InstallStatus,
    pub vcs: VcsStatus,
}

/// Execute the create command for a validated identity and selection.
pub fn execute<F, T, R, I, V>(
    ctx: &AppContext<F, T, R>,
    installer: &I,
    vcs: &V,
    identity: &PackageIdentity,
    selection: Selection,
    options: &CreateOptions,
) -> Result<CreateOutcome, AppError>
where
    F: ProjectFilesystem,
    T: TemplateTreeStore,
    R: TemplateRenderer,
    I: PackageInstaller,
    V: VersionControl,
{
    let artifacts = synthesize(selection, identity, &options.manifest);
    debug!(
        "synthesized {} for {} ({})",
        artifacts.kinds().iter().map(|k| k.key()).collect::<Vec<_>>().join(", "),
        identity.raw_name(),
        selection
    );

    let report = ArtifactWriter::write(ctx, &artifacts)?;
    let project_dir = ctx.filesystem().root().to_path_buf();

    let packages = artifacts.install_packages();
    let install = if options.install {
        info!("installing {} packages", packages.len());
        match installer.install(&project_dir, &packages) {
            Ok(()) => InstallStatus::Installed,
            Err(err) => {
                warn!("dependency install failed: {}", err);
                InstallStatus::Failed(err.to_string())
            }
        }
    } else {
        InstallStatus::Skipped
    };

    let vcs = if !options.git {
        VcsStatus::Skipped
    } else if vcs.is_inside_repository(&project_dir) {
        debug!("{} is already inside a repository", project_dir.display());
        VcsStatus::AlreadyInRepository
    } else {
        match vcs.initialize(&project_dir) {
            Ok(()) => VcsStatus::Initialized,
            Err(err) => {
                debug!("repository initialization failed: {}", err);
                if let Err(cleanup) = ctx.filesystem().remove_dir_all(".git") {
                    debug!("could not remove partial .git: {}", cleanup);
                }
                VcsStatus::Failed
            }
        }
    };

    Ok(CreateOutcome {
        project_dir,
        package_name: identity.raw_name().to_string(),
        identifier: artifacts.identifier().to_string(),
        selection,
        written: report.written,
        removed_logs: report.removed_logs,
        installed_packages: packages.into_iter().map(str::to_string).collect(),
        install,
        vcs,
    })
}
