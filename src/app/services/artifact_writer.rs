//! Persists the template tree and synthesized artifacts into a project directory.

use log::{debug, info};

use crate::app::AppContext;
use crate::domain::{
    AppError, ArtifactKind, EntryDisposition, GeneratedArtifactSet, classify_entry,
    conflicting_entries,
};
use crate::ports::{ProjectFilesystem, TemplateRenderer, TemplateTreeStore};

const BUNDLER_TEMPLATE_NAME: &str = "webpack.config.js.j2";

/// Files touched by a successful write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// Stale error logs removed before the conflict check.
    pub removed_logs: Vec<String>,
    /// Project-relative paths written, in write order.
    pub written: Vec<String>,
}

/// Service applying a `GeneratedArtifactSet` to the context's project directory.
pub struct ArtifactWriter;

impl ArtifactWriter {
    /// Copy the template tree, then create or overwrite each artifact file.
    ///
    /// Fails with `DirectoryConflict` before touching anything when the directory
    /// holds entries outside the allow-list. A failure part-way through leaves the
    /// files already written in place.
    pub fn write<F, T, R>(
        ctx: &AppContext<F, T, R>,
        artifacts: &GeneratedArtifactSet,
    ) -> Result<WriteReport, AppError>
    where
        F: ProjectFilesystem,
        T: TemplateTreeStore,
        R: TemplateRenderer,
    {
        let fs = ctx.filesystem();
        let mut report = WriteReport::default();

        let mut remaining = Vec::new();
        for entry in fs.list_entries()? {
            let is_dir = fs.is_dir(&entry);
            if classify_entry(&entry, is_dir) == EntryDisposition::StaleLog {
                debug!("removing stale log {}", entry);
                fs.remove_file(&entry)?;
                report.removed_logs.push(entry);
            } else {
                remaining.push((entry, is_dir));
            }
        }

        let conflicts = conflicting_entries(&remaining);
        if !conflicts.is_empty() {
            return Err(AppError::DirectoryConflict {
                directory: fs.root().to_path_buf(),
                entries: conflicts,
            });
        }

        let template_files = ctx.templates().template_files(artifacts.selection())?;
        let bundler_config = ctx.renderer().render(
            BUNDLER_TEMPLATE_NAME,
            &ctx.templates().bundler_config_template()?,
            artifacts.bundler_config(),
        )?;

        fs.ensure_root()?;

        for file in &template_files {
            fs.write_file(&file.path, &file.content)?;
            report.written.push(file.path.clone());
        }
        info!("copied {} template files into {}", template_files.len(), fs.root().display());

        for kind in artifacts.kinds() {
            let Some(path) = kind.file_name() else {
                continue;
            };
            let content = match kind {
                ArtifactKind::BundlerConfig => bundler_config.clone(),
                ArtifactKind::LintConfig => {
                    let Some(patch) = artifacts.lint_patch() else {
                        continue;
                    };
                    let existing =
                        if fs.file_exists(path) { Some(fs.read_file(path)?) } else { None };
                    patch.apply(existing.as_deref())?
                }
                ArtifactKind::Manifest => {
                    let mut manifest = serde_json::to_string_pretty(artifacts.manifest())?;
                    manifest.push('\n');
                    manifest
                }
                ArtifactKind::DependencyList => continue,
            };
            debug!("writing {} ({})", path, kind.key());
            fs.write_file(path, &content)?;
            if !report.written.iter().any(|p| p == path) {
                report.written.push(path.to_string());
            }
        }

        Ok(report)
    }
}
