use serde_json::{Map, Value};

use crate::domain::{AppError, Dependency, LanguageVariant, Selection};

/// Field-level patch applied to the lint configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintPatch {
    pub parser: &'static str,
}

impl LintPatch {
    /// Only the Modern variant needs a non-default parser.
    pub fn derive(selection: Selection) -> Option<Self> {
        match selection.variant {
            LanguageVariant::Modern => {
                Some(Self { parser: Dependency::LegacyLintParserAdapter.package() })
            }
            LanguageVariant::Legacy | LanguageVariant::Typed => None,
        }
    }

    /// Apply the patch to an existing lint document, leaving other fields untouched.
    ///
    /// `None` means the template tree carried no lint config; a minimal one is created.
    pub fn apply(&self, existing: Option<&str>) -> Result<String, AppError> {
        let mut document = match existing {
            Some(content) => serde_json::from_str::<Value>(content)?,
            None => Value::Object(Map::new()),
        };

        let Value::Object(map) = &mut document else {
            return Err(AppError::config_error("Lint configuration must be a JSON object"));
        };
        map.insert("parser".to_string(), Value::String(self.parser.to_string()));

        let mut rendered = serde_json::to_string_pretty(&document)?;
        rendered.push('\n');
        Ok(rendered)
    }
}
