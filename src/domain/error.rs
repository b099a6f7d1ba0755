use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for create-npm-package operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Package name violates npm naming rules.
    #[error("Cannot create a project called \"{name}\" because of npm naming restrictions: {}", .problems.join("; "))]
    InvalidName { name: String, problems: Vec<String> },

    /// Owner namespace is empty or not a GitHub user/organization name.
    #[error(
        "Invalid scope '{0}': use a GitHub user or organization name (letters, digits, '-' or '_')"
    )]
    InvalidScope(String),

    /// Language variant is not one of the supported flavors.
    #[error("Invalid language variant '{0}': must be one of legacy, modern, typed")]
    InvalidVariant(String),

    /// Target environment is not one of the supported targets.
    #[error("Invalid target '{0}': must be one of browser, library")]
    InvalidTarget(String),

    /// Target directory contains entries that could be overwritten.
    #[error(
        "The directory {} contains files that could conflict:\n{}\nEither try using a new directory name, or remove the files listed above.",
        .directory.display(),
        .entries.iter().map(|e| format!("  {}", e)).collect::<Vec<_>>().join("\n")
    )]
    DirectoryConflict { directory: PathBuf, entries: Vec<String> },

    /// Path escapes the project root or is otherwise unusable.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Template rendering failed.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Embedded asset is missing from the binary.
    #[error("Internal error: {0}")]
    InternalError(String),

    /// External tool invocation failed.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String },

    /// Interactive prompt failed or was aborted.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidName { .. }
            | AppError::InvalidScope(_)
            | AppError::InvalidVariant(_)
            | AppError::InvalidTarget(_)
            | AppError::InvalidPath(_)
            | AppError::Json(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::DirectoryConflict { .. } => io::ErrorKind::AlreadyExists,
            AppError::Prompt(_) => io::ErrorKind::Interrupted,
            AppError::InternalError(_) => io::ErrorKind::NotFound,
            AppError::TemplateRender { .. } | AppError::ExternalToolError { .. } => {
                io::ErrorKind::Other
            }
        }
    }
}
