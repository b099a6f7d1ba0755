//! create-npm-package: scaffold npm packages with consistent generated build configuration.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    CreateOptions, CreateOutcome, CreateRequest, InstallStatus, VcsStatus, create_at, load_config,
    project_dir,
};
pub use domain::{
    AppError, GeneratedArtifactSet, LanguageVariant, PackageIdentity, Selection, TargetEnvironment,
    ToolConfig, derive_identifier, synthesize,
};
