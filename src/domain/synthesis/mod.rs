//! Pure derivation of generated artifacts from a validated selection.

pub mod bundler;
pub mod dependencies;
pub mod lint;
pub mod manifest;

use crate::domain::{PackageIdentity, Selection, derive_identifier};

pub use bundler::{
    BundlerConfig, OutputConfig, OutputPackaging, Plugin, PluginKind, PluginOption,
    TransformRule,
};
pub use dependencies::{Dependency, dependency_list, install_packages};
pub use lint::LintPatch;
pub use manifest::{Manifest, ManifestDefaults, ManifestScripts};

/// Name of a generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtifactKind {
    BundlerConfig,
    LintConfig,
    Manifest,
    DependencyList,
}

impl ArtifactKind {
    pub fn key(&self) -> &'static str {
        match self {
            ArtifactKind::BundlerConfig => "bundlerConfig",
            ArtifactKind::LintConfig => "lintConfig",
            ArtifactKind::Manifest => "manifest",
            ArtifactKind::DependencyList => "dependencyList",
        }
    }

    /// Project-relative file the artifact is written to, if it has one.
    ///
    /// The dependency list is consumed by the installer, not written.
    pub fn file_name(&self) -> Option<&'static str> {
        match self {
            ArtifactKind::BundlerConfig => Some("webpack.config.js"),
            ArtifactKind::LintConfig => Some(".eslintrc.json"),
            ArtifactKind::Manifest => Some("package.json"),
            ArtifactKind::DependencyList => None,
        }
    }
}

/// Immutable set of artifacts for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifactSet {
    selection: Selection,
    identifier: String,
    bundler: BundlerConfig,
    lint: Option<LintPatch>,
    manifest: Manifest,
    dependencies: Vec<Dependency>,
}

impl GeneratedArtifactSet {
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Camel-case library symbol the bundle exports.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn bundler_config(&self) -> &BundlerConfig {
        &self.bundler
    }

    pub fn lint_patch(&self) -> Option<&LintPatch> {
        self.lint.as_ref()
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn manifest_scripts(&self) -> &ManifestScripts {
        &self.manifest.scripts
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// Registry packages to hand to the installer.
    pub fn install_packages(&self) -> Vec<&'static str> {
        install_packages(&self.dependencies)
    }

    /// Keys present in this set; a function of the selection alone.
    pub fn kinds(&self) -> Vec<ArtifactKind> {
        let mut kinds = vec![ArtifactKind::BundlerConfig];
        if self.lint.is_some() {
            kinds.push(ArtifactKind::LintConfig);
        }
        kinds.push(ArtifactKind::Manifest);
        kinds.push(ArtifactKind::DependencyList);
        kinds
    }

    /// Modules and executables referenced by an artifact but not installed.
    ///
    /// Always empty for a synthesized set.
    pub fn unprovided_references(&self) -> Vec<String> {
        let installed = self.install_packages();
        let mut referenced: Vec<&str> = self.bundler.referenced_modules();
        referenced.extend(self.manifest.scripts.referenced_binaries());
        if let Some(lint) = &self.lint {
            referenced.push(lint.parser);
        }

        referenced
            .into_iter()
            .filter(|name| !installed.contains(name))
            .map(str::to_string)
            .collect()
    }
}

/// Derive every artifact for a validated identity and selection.
pub fn synthesize(
    selection: Selection,
    identity: &PackageIdentity,
    defaults: &ManifestDefaults,
) -> GeneratedArtifactSet {
    let identifier = derive_identifier(identity.raw_name());

    GeneratedArtifactSet {
        selection,
        bundler: BundlerConfig::derive(selection, identity.raw_name(), &identifier),
        lint: LintPatch::derive(selection),
        manifest: Manifest::derive(selection, identity, defaults),
        dependencies: dependency_list(selection),
        identifier,
    }
}
