use serde::Serialize;

use crate::domain::{LanguageVariant, Selection, TargetEnvironment};

/// A development dependency role in the generated package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Dependency {
    Linter,
    LinterFormatCompat,
    LinterFormatPlugin,
    TestRunner,
    Formatter,
    Bundler,
    BundlerCli,
    CleanOutputPlugin,
    TranspilerCore,
    TranspilerEnvPreset,
    LegacyLintParserAdapter,
    LegacyLoader,
    TypeChecker,
    DevServer,
    HtmlEmitPlugin,
}

impl Dependency {
    /// Dependencies every generated package receives.
    pub const BASE: [Dependency; 8] = [
        Dependency::Linter,
        Dependency::LinterFormatCompat,
        Dependency::LinterFormatPlugin,
        Dependency::TestRunner,
        Dependency::Formatter,
        Dependency::Bundler,
        Dependency::BundlerCli,
        Dependency::CleanOutputPlugin,
    ];

    /// Added for the Modern variant.
    pub const MODERN: [Dependency; 4] = [
        Dependency::TranspilerCore,
        Dependency::TranspilerEnvPreset,
        Dependency::LegacyLintParserAdapter,
        Dependency::LegacyLoader,
    ];

    /// Added for the Typed variant.
    pub const TYPED: [Dependency; 1] = [Dependency::TypeChecker];

    /// Added for the Browser target.
    pub const BROWSER: [Dependency; 2] = [Dependency::DevServer, Dependency::HtmlEmitPlugin];

    /// Registry package that fills this role.
    pub fn package(&self) -> &'static str {
        self.packages()[0]
    }

    /// Every registry package installed for this role.
    ///
    /// The type checker ships with its bundler loader so the Typed transform rule
    /// always resolves.
    pub fn packages(&self) -> &'static [&'static str] {
        match self {
            Dependency::Linter => &["eslint"],
            Dependency::LinterFormatCompat => &["eslint-config-prettier"],
            Dependency::LinterFormatPlugin => &["eslint-plugin-prettier"],
            Dependency::TestRunner => &["jest"],
            Dependency::Formatter => &["prettier"],
            Dependency::Bundler => &["webpack"],
            Dependency::BundlerCli => &["webpack-cli"],
            Dependency::CleanOutputPlugin => &["clean-webpack-plugin"],
            Dependency::TranspilerCore => &["@babel/core"],
            Dependency::TranspilerEnvPreset => &["@babel/preset-env"],
            Dependency::LegacyLintParserAdapter => &["babel-eslint"],
            Dependency::LegacyLoader => &["babel-loader"],
            Dependency::TypeChecker => &["typescript", "ts-loader"],
            Dependency::DevServer => &["webpack-dev-server"],
            Dependency::HtmlEmitPlugin => &["html-webpack-plugin"],
        }
    }
}

/// Dependency list for a selection: the base set plus the variant and target additions.
pub fn dependency_list(selection: Selection) -> Vec<Dependency> {
    let mut deps: Vec<Dependency> = Dependency::BASE.to_vec();
    match selection.variant {
        LanguageVariant::Legacy => {}
        LanguageVariant::Modern => deps.extend(Dependency::MODERN),
        LanguageVariant::Typed => deps.extend(Dependency::TYPED),
    }
    if let TargetEnvironment::Browser = selection.target {
        deps.extend(Dependency::BROWSER);
    }
    deps
}

/// Flattened registry package names, in list order, for the installer.
pub fn install_packages(deps: &[Dependency]) -> Vec<&'static str> {
    deps.iter().flat_map(|dep| dep.packages().iter().copied()).collect()
}
