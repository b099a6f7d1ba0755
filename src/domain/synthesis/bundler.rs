//! Structured webpack configuration derived from a selection.

use serde::Serialize;

use crate::domain::{Dependency, LanguageVariant, Selection, TargetEnvironment};

/// Directory the bundle is emitted into, relative to the project root.
pub const OUTPUT_DIR: &str = "dist";

/// Template file the HTML-emit plugin renders the entry document from.
pub const HTML_TEMPLATE_FILE: &str = "index.html";

/// Bundler configuration for one generated package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundlerConfig {
    pub entry: String,
    pub output: OutputConfig,
    pub rule: Option<TransformRule>,
    pub extensions: Option<Vec<&'static str>>,
    pub plugins: Vec<Plugin>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputConfig {
    pub path: &'static str,
    pub filename: String,
    pub library: String,
    pub packaging: OutputPackaging,
}

/// Module format of the emitted bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "library_target", rename_all = "lowercase")]
pub enum OutputPackaging {
    /// Universal module definition bound to the runtime's implicit global.
    Umd { global_object: &'static str },
    #[serde(rename = "commonjs2")]
    CommonJs2,
}

/// A single module transform rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformRule {
    /// Regular expression literal body matched against module paths.
    pub test: &'static str,
    pub exclude: &'static str,
    pub loader: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PluginKind {
    CleanOutput,
    HtmlEmit,
}

/// A bundler plugin instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plugin {
    pub kind: PluginKind,
    /// Local binding the plugin constructor is imported as.
    pub binding: &'static str,
    pub module: &'static str,
    /// Whether the constructor is a named export of the module.
    pub named_export: bool,
    pub options: Vec<PluginOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginOption {
    pub key: &'static str,
    pub value: String,
}

impl Plugin {
    pub fn clean_output() -> Self {
        Self {
            kind: PluginKind::CleanOutput,
            binding: "CleanWebpackPlugin",
            module: Dependency::CleanOutputPlugin.package(),
            named_export: true,
            options: Vec::new(),
        }
    }

    /// HTML entry document titled with the library identifier.
    pub fn html_emit(title: &str) -> Self {
        Self {
            kind: PluginKind::HtmlEmit,
            binding: "HtmlWebpackPlugin",
            module: Dependency::HtmlEmitPlugin.package(),
            named_export: false,
            options: vec![
                PluginOption { key: "title", value: title.to_string() },
                PluginOption { key: "template", value: HTML_TEMPLATE_FILE.to_string() },
            ],
        }
    }

    /// Value of a named option, if set.
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.iter().find(|o| o.key == key).map(|o| o.value.as_str())
    }
}

impl BundlerConfig {
    /// Derive the configuration for a selection.
    pub fn derive(selection: Selection, raw_name: &str, identifier: &str) -> Self {
        let entry = format!("./src/index{}", selection.variant.entry_extension());

        let (rule, extensions) = match selection.variant {
            LanguageVariant::Legacy => (None, None),
            LanguageVariant::Modern => (
                Some(TransformRule {
                    test: r"\.js$",
                    exclude: "node_modules",
                    loader: Dependency::LegacyLoader.package(),
                }),
                Some(vec![".js", ".jsx"]),
            ),
            LanguageVariant::Typed => (
                Some(TransformRule {
                    test: r"\.tsx?$",
                    exclude: "node_modules",
                    loader: "ts-loader",
                }),
                Some(vec![".ts", ".tsx", ".js"]),
            ),
        };

        let packaging = match selection.target {
            TargetEnvironment::Browser => OutputPackaging::Umd { global_object: "this" },
            TargetEnvironment::Library => OutputPackaging::CommonJs2,
        };

        let mut plugins = vec![Plugin::clean_output()];
        if selection.target.is_browser() {
            plugins.push(Plugin::html_emit(identifier));
        }

        Self {
            entry,
            output: OutputConfig {
                path: OUTPUT_DIR,
                filename: format!("{}.js", raw_name),
                library: identifier.to_string(),
                packaging,
            },
            rule,
            extensions,
            plugins,
        }
    }

    /// Modules the rendered config `require`s or names as loaders.
    pub fn referenced_modules(&self) -> Vec<&'static str> {
        let mut modules: Vec<&'static str> = self.plugins.iter().map(|p| p.module).collect();
        if let Some(rule) = &self.rule {
            modules.push(rule.loader);
        }
        modules
    }

    pub fn has_plugin(&self, kind: PluginKind) -> bool {
        self.plugins.iter().any(|p| p.kind == kind)
    }
}
