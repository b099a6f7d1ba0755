mod package_installer;
mod project_filesystem;
mod prompter;
mod template_renderer;
mod template_tree;
mod version_control;

pub use package_installer::PackageInstaller;
pub use project_filesystem::ProjectFilesystem;
pub use prompter::Prompter;
pub use template_renderer::TemplateRenderer;
pub use template_tree::{TemplateFile, TemplateTreeStore};
pub use version_control::VersionControl;
