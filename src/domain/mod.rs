pub mod config;
pub mod conflicts;
pub mod error;
pub mod identifier;
pub mod identity;
pub mod selection;
pub mod synthesis;

pub use config::{PackageManager, ToolConfig};
pub use conflicts::{EntryDisposition, classify_entry, conflicting_entries};
pub use error::AppError;
pub use identifier::derive_identifier;
pub use identity::{PackageIdentity, validate};
pub use selection::{LanguageVariant, Selection, TargetEnvironment};
pub use synthesis::{
    ArtifactKind, BundlerConfig, Dependency, GeneratedArtifactSet, LintPatch, Manifest,
    ManifestDefaults, ManifestScripts, PluginKind, synthesize,
};
