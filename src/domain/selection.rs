//! Closed choice sets for a generation run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Source-language flavor of the generated package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageVariant {
    /// Plain ES5 sources loaded as-is.
    Legacy,
    /// ES2015+ sources transpiled with Babel.
    Modern,
    /// TypeScript sources.
    Typed,
}

impl LanguageVariant {
    pub const ALL: [LanguageVariant; 3] =
        [LanguageVariant::Legacy, LanguageVariant::Modern, LanguageVariant::Typed];

    /// Canonical lowercase name, also used as the template subtree name.
    pub fn name(&self) -> &'static str {
        match self {
            LanguageVariant::Legacy => "legacy",
            LanguageVariant::Modern => "modern",
            LanguageVariant::Typed => "typed",
        }
    }

    /// Label shown in interactive menus.
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageVariant::Legacy => "ES5",
            LanguageVariant::Modern => "ES6",
            LanguageVariant::Typed => "TypeScript",
        }
    }

    /// Extension of the source entry file.
    pub fn entry_extension(&self) -> &'static str {
        match self {
            LanguageVariant::Legacy | LanguageVariant::Modern => ".js",
            LanguageVariant::Typed => ".ts",
        }
    }
}

impl fmt::Display for LanguageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LanguageVariant {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "legacy" | "es5" => Ok(LanguageVariant::Legacy),
            "modern" | "es6" => Ok(LanguageVariant::Modern),
            "typed" | "typescript" => Ok(LanguageVariant::Typed),
            _ => Err(AppError::InvalidVariant(value.to_string())),
        }
    }
}

/// Where the generated package is meant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetEnvironment {
    /// Loaded in a browser page; bundled as UMD with a dev server.
    Browser,
    /// Imported from other packages; bundled as commonjs2.
    Library,
}

impl TargetEnvironment {
    pub const ALL: [TargetEnvironment; 2] = [TargetEnvironment::Browser, TargetEnvironment::Library];

    pub fn name(&self) -> &'static str {
        match self {
            TargetEnvironment::Browser => "browser",
            TargetEnvironment::Library => "library",
        }
    }

    /// Map the "will this run in a browser?" answer onto a target.
    pub fn from_browser_flag(will_use_in_browser: bool) -> Self {
        if will_use_in_browser { TargetEnvironment::Browser } else { TargetEnvironment::Library }
    }

    pub fn is_browser(&self) -> bool {
        matches!(self, TargetEnvironment::Browser)
    }
}

impl fmt::Display for TargetEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetEnvironment {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "browser" => Ok(TargetEnvironment::Browser),
            "library" => Ok(TargetEnvironment::Library),
            _ => Err(AppError::InvalidTarget(value.to_string())),
        }
    }
}

/// A validated (variant, target) pair.
///
/// Every pair is a legal combination; the synthesizer is a total function over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    pub variant: LanguageVariant,
    pub target: TargetEnvironment,
}

impl Selection {
    pub fn new(variant: LanguageVariant, target: TargetEnvironment) -> Self {
        Self { variant, target }
    }

    /// Parse a raw choice set, rejecting anything outside the closed enumerations.
    pub fn parse(variant: &str, target: &str) -> Result<Self, AppError> {
        Ok(Self { variant: variant.parse()?, target: target.parse()? })
    }

    /// Every supported combination, in a stable order.
    pub fn all() -> impl Iterator<Item = Selection> {
        LanguageVariant::ALL.into_iter().flat_map(|variant| {
            TargetEnvironment::ALL.into_iter().map(move |target| Selection { variant, target })
        })
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.variant, self.target)
    }
}
