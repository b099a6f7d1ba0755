//! Classification of pre-existing target directory entries.

/// Entries that may already exist in a fresh project directory.
const ALLOWED_ENTRIES: &[&str] = &[
    ".DS_Store",
    ".git",
    ".gitattributes",
    ".gitignore",
    ".gitlab-ci.yml",
    ".hg",
    ".hgcheck",
    ".hgignore",
    ".idea",
    ".npmignore",
    ".travis.yml",
    "docs",
    "LICENSE",
    "README.md",
    "mkdocs.yml",
    "Thumbs.db",
];

/// Prefixes of logs left behind by earlier failed installs.
const ERROR_LOG_PREFIXES: &[&str] = &["npm-debug.log", "yarn-error.log", "yarn-debug.log"];

/// How an existing entry in the target directory is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryDisposition {
    /// Tolerated and left in place.
    Allowed,
    /// Removed before writing.
    StaleLog,
    /// Blocks generation.
    Conflict,
}

/// Classify an entry by name; stale logs must be regular files.
pub fn classify_entry(name: &str, is_dir: bool) -> EntryDisposition {
    if !is_dir && ERROR_LOG_PREFIXES.iter().any(|prefix| name.starts_with(prefix)) {
        return EntryDisposition::StaleLog;
    }
    if ALLOWED_ENTRIES.contains(&name) || name.ends_with(".iml") {
        return EntryDisposition::Allowed;
    }
    EntryDisposition::Conflict
}

/// Names from `(name, is_dir)` entries that block generation, sorted.
pub fn conflicting_entries<S: AsRef<str>>(entries: &[(S, bool)]) -> Vec<String> {
    let mut conflicts: Vec<String> = entries
        .iter()
        .filter(|(name, is_dir)| classify_entry(name.as_ref(), *is_dir) == EntryDisposition::Conflict)
        .map(|(name, _)| name.as_ref().to_string())
        .collect();
    conflicts.sort();
    conflicts
}
