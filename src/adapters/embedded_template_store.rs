use std::collections::BTreeMap;

use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::{AppError, Selection};
use crate::ports::{TemplateFile, TemplateTreeStore};

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

static BUNDLER_CONFIG_TEMPLATE: &str = include_str!("../assets/webpack.config.js.j2");

/// Subtree shared by every variant.
const SHARED_SUBTREE: &str = "shared";

/// Subtree layered on for browser targets.
const BROWSER_SUBTREE: &str = "browser";

/// Template tree compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateTreeStore for EmbeddedTemplateStore {
    fn template_files(&self, selection: Selection) -> Result<Vec<TemplateFile>, AppError> {
        let mut layers = vec![SHARED_SUBTREE, selection.variant.name()];
        if selection.target.is_browser() {
            layers.push(BROWSER_SUBTREE);
        }

        let mut files = BTreeMap::new();
        for layer in layers {
            let subtree = TEMPLATE_DIR.get_dir(layer).ok_or_else(|| {
                AppError::InternalError(format!("Missing template subtree: {}", layer))
            })?;
            collect_files(subtree, subtree, &mut files)?;
        }

        Ok(files.into_values().collect())
    }

    fn bundler_config_template(&self) -> Result<String, AppError> {
        Ok(BUNDLER_CONFIG_TEMPLATE.to_string())
    }
}

fn collect_files(
    base: &'static Dir,
    dir: &'static Dir,
    files: &mut BTreeMap<String, TemplateFile>,
) -> Result<(), AppError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let relative = file.path().strip_prefix(base.path()).map_err(|_| {
                    AppError::InternalError(format!(
                        "Template file outside its subtree: {}",
                        file.path().display()
                    ))
                })?;
                let path = relative.to_string_lossy().replace('\\', "/");
                let content = file.contents_utf8().ok_or_else(|| {
                    AppError::InternalError(format!("Template file is not UTF-8: {}", path))
                })?;
                files.insert(path.clone(), TemplateFile { path, content: content.to_string() });
            }
            DirEntry::Dir(subdir) => collect_files(base, subdir, files)?,
        }
    }
    Ok(())
}
