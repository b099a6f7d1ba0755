use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;
use std::sync::OnceLock;

use crate::domain::AppError;
use crate::ports::TemplateRenderer;

/// Template renderer using Minijinja.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render<C: Serialize>(
        &self,
        template_name: &str,
        template: &str,
        context: &C,
    ) -> Result<String, AppError> {
        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env.set_auto_escape_callback(|_| AutoEscape::None);
            env.set_trim_blocks(true);
            env.set_lstrip_blocks(true);
            env.set_keep_trailing_newline(true);
            env.add_filter("js_str", js_str);
            env
        });

        env.render_named_str(template_name, template, context).map_err(|err| {
            AppError::TemplateRender { template: template_name.to_string(), reason: err.to_string() }
        })
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Single-quoted JavaScript string literal.
fn js_str(value: String) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}
