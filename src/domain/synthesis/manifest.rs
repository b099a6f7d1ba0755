use serde::{Deserialize, Serialize};

use crate::domain::synthesis::bundler::OUTPUT_DIR;
use crate::domain::{Dependency, PackageIdentity, Selection};

/// Manifest fields supplied by configuration rather than derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestDefaults {
    pub version: String,
    pub license: String,
    pub private: bool,
    pub node_engine: String,
    /// Author override; the scope is used when unset.
    pub author: Option<String>,
}

impl Default for ManifestDefaults {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            license: "MIT".to_string(),
            private: false,
            node_engine: ">=12".to_string(),
            author: None,
        }
    }
}

/// `scripts` section of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestScripts {
    pub test: String,
    pub build: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

impl ManifestScripts {
    pub fn derive(selection: Selection) -> Self {
        let start = selection
            .target
            .is_browser()
            .then(|| format!("{} --mode development --open", Dependency::DevServer.package()));

        Self {
            test: Dependency::TestRunner.package().to_string(),
            build: format!("{} --mode production", Dependency::Bundler.package()),
            start,
        }
    }

    /// Script entries as `(name, command)` pairs in manifest order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries = vec![("test", self.test.as_str()), ("build", self.build.as_str())];
        if let Some(start) = &self.start {
            entries.push(("start", start.as_str()));
        }
        entries
    }

    /// Executables the scripts invoke.
    pub fn referenced_binaries(&self) -> Vec<&str> {
        self.entries()
            .into_iter()
            .filter_map(|(_, command)| command.split_whitespace().next())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bugs {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Engines {
    pub node: String,
}

/// The generated `package.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub main: String,
    pub private: bool,
    pub scripts: ManifestScripts,
    pub repository: Repository,
    pub keywords: Vec<String>,
    pub author: String,
    pub license: String,
    pub bugs: Bugs,
    pub homepage: String,
    pub engines: Engines,
}

impl Manifest {
    pub fn derive(
        selection: Selection,
        identity: &PackageIdentity,
        defaults: &ManifestDefaults,
    ) -> Self {
        let name = identity.raw_name();
        let scope = identity.scope();
        let web_url = format!("https://github.com/{}/{}", scope, name);

        Self {
            name: name.to_string(),
            version: defaults.version.clone(),
            description: String::new(),
            main: format!("{}/{}.js", OUTPUT_DIR, name),
            private: defaults.private,
            scripts: ManifestScripts::derive(selection),
            repository: Repository {
                kind: "git".to_string(),
                url: format!("git+{}.git", web_url),
            },
            keywords: Vec::new(),
            author: defaults.author.clone().unwrap_or_else(|| scope.to_string()),
            license: defaults.license.clone(),
            bugs: Bugs { url: format!("{}/issues", web_url) },
            homepage: format!("{}#readme", web_url),
            engines: Engines { node: defaults.node_engine.clone() },
        }
    }
}
