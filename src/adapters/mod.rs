pub mod dialoguer_prompter;
pub mod embedded_template_store;
pub mod git_repository;
pub mod package_manager_command;
pub mod project_filesystem;
pub mod template;

pub use dialoguer_prompter::DialoguerPrompter;
pub use embedded_template_store::EmbeddedTemplateStore;
pub use git_repository::GitRepositoryAdapter;
pub use package_manager_command::PackageManagerCommand;
pub use project_filesystem::LocalProjectFilesystem;
pub use template::MinijinjaTemplateRenderer;
