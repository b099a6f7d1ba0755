//! Package identity validation against npm naming rules.

use crate::domain::{AppError, LanguageVariant, Selection, TargetEnvironment};

const MAX_NAME_LENGTH: usize = 214;

/// Names npm refuses regardless of content.
const RESERVED_NAMES: &[&str] = &["node_modules", "favicon.ico"];

/// Node core modules; new packages may not shadow them.
const CORE_MODULE_NAMES: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];

/// Validated package identity: npm-safe name plus owner namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageIdentity {
    raw_name: String,
    scope: String,
}

impl PackageIdentity {
    /// Validate a raw name and scope.
    pub fn new(raw_name: &str, scope: &str) -> Result<Self, AppError> {
        let problems = name_problems(raw_name);
        if !problems.is_empty() {
            return Err(AppError::InvalidName { name: raw_name.to_string(), problems });
        }

        validate_scope(scope)?;

        Ok(Self { raw_name: raw_name.to_string(), scope: scope.trim().to_string() })
    }

    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }
}

/// Validate the complete answer set for one run.
///
/// Variant and target arrive already typed; the closed enumerations are enforced
/// when they are parsed from raw input.
pub fn validate(
    raw_name: &str,
    scope: &str,
    variant: LanguageVariant,
    target: TargetEnvironment,
) -> Result<(PackageIdentity, Selection), AppError> {
    let identity = PackageIdentity::new(raw_name, scope)?;
    Ok((identity, Selection::new(variant, target)))
}

/// Whether `scope` can name a GitHub user or organization.
///
/// Non-empty after trimming, and only ASCII letters, digits, `-` and `_`.
pub fn is_valid_scope(scope: &str) -> bool {
    let scope = scope.trim();
    !scope.is_empty() && scope.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub fn validate_scope(scope: &str) -> Result<(), AppError> {
    if is_valid_scope(scope) { Ok(()) } else { Err(AppError::InvalidScope(scope.to_string())) }
}

/// Check a name against the rules for new npm packages.
///
/// Returns every violated rule; an empty list means the name is valid.
pub fn name_problems(name: &str) -> Vec<String> {
    let mut problems = Vec::new();

    if name.is_empty() {
        problems.push("name length must be greater than zero".to_string());
        return problems;
    }
    if name.starts_with('.') {
        problems.push("name cannot start with a period".to_string());
    }
    if name.starts_with('_') {
        problems.push("name cannot start with an underscore".to_string());
    }
    if name.trim() != name {
        problems.push("name cannot contain leading or trailing spaces".to_string());
    }
    if RESERVED_NAMES.iter().any(|reserved| reserved.eq_ignore_ascii_case(name)) {
        problems.push(format!("{} is a blacklisted name", name));
    }
    if CORE_MODULE_NAMES.contains(&name) {
        problems.push(format!("{} is a core module name", name));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        problems.push(format!("name can no longer contain more than {} characters", MAX_NAME_LENGTH));
    }
    if name.chars().any(|c| c.is_uppercase()) {
        problems.push("name can no longer contain capital letters".to_string());
    }
    if name.chars().any(|c| matches!(c, '~' | '\'' | '!' | '(' | ')' | '*')) {
        problems.push("name can no longer contain special characters (\"~'!()*\")".to_string());
    }
    if !name.chars().all(is_url_safe) {
        problems.push("name can only contain URL-friendly characters".to_string());
    }

    problems
}

/// Characters that survive URI component encoding unchanged.
fn is_url_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | '\'' | '!' | '(' | ')' | '*')
}
