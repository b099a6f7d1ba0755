use crate::domain::{AppError, Selection};

/// A file of the project template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the project root.
    pub path: String,
    /// File content as UTF-8 text.
    pub content: String,
}

/// Port for the template tree copied into every new project.
pub trait TemplateTreeStore {
    /// Files for a selection: the shared subtree, the variant subtree, and the
    /// browser subtree for browser targets. Later layers win on path collisions.
    fn template_files(&self, selection: Selection) -> Result<Vec<TemplateFile>, AppError>;

    /// Source of the bundler config template.
    fn bundler_config_template(&self) -> Result<String, AppError>;
}
