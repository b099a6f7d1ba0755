//! Tool configuration (`.create-npm-package.toml`).

use std::fmt;

use serde::Deserialize;

use crate::domain::{AppError, ManifestDefaults};

/// File name of the per-user configuration file inside the home directory.
pub const CONFIG_FILE_NAME: &str = ".create-npm-package.toml";

/// Package manager used for the dependency install step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Arguments preceding the package list for a dev-dependency install.
    pub fn install_args(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Npm => &["install", "--save-dev"],
            PackageManager::Yarn => &["add", "--dev"],
            PackageManager::Pnpm => &["add", "--save-dev"],
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    pub package_manager: PackageManager,
    pub author: Option<String>,
    pub license: String,
    pub version: String,
    pub private: bool,
    pub node_engine: String,
    /// Run the dependency install step.
    pub install: bool,
    /// Initialize a git repository in the new project.
    pub git: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        let manifest = ManifestDefaults::default();
        Self {
            package_manager: PackageManager::default(),
            author: manifest.author,
            license: manifest.license,
            version: manifest.version,
            private: manifest.private,
            node_engine: manifest.node_engine,
            install: true,
            git: true,
        }
    }
}

impl ToolConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("license", &self.license),
            ("version", &self.version),
            ("node_engine", &self.node_engine),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::config_error(format!("'{}' must not be empty", field)));
            }
        }
        if let Some(author) = &self.author
            && author.trim().is_empty()
        {
            return Err(AppError::config_error("'author' must not be empty when set"));
        }
        Ok(())
    }

    pub fn manifest_defaults(&self) -> ManifestDefaults {
        ManifestDefaults {
            version: self.version.clone(),
            license: self.license.clone(),
            private: self.private,
            node_engine: self.node_engine.clone(),
            author: self.author.clone(),
        }
    }
}

/// Parse and validate tool configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ToolConfig, AppError> {
    let config: ToolConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
