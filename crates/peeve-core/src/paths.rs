//! Logical path matching for exclusion lists.
//!
//! `ParsedFile::path` is a filesystem-independent string with `/`
//! separators; the helpers here match it against exclusion patterns and
//! path conventions without touching the disk.

/// True when `path` matches any of `patterns`.
#[must_use]
pub fn matches_any(path: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| matches(path, pattern))
}

/// True when `path` matches `pattern`.
///
/// Patterns are glob-style. A `**`-carrying pattern also matches as a
/// substring once the globstars are stripped, so entries like
/// `**/migrations/**` work on logical paths of any depth.
#[must_use]
pub fn matches(path: &str, pattern: &str) -> bool {
    if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
        if glob_pattern.matches(path) {
            return true;
        }
    }

    let normalized = pattern.replace("**", "");
    !normalized.is_empty() && path.contains(&normalized)
}

/// True when `path` lies under a test directory or names a test file.
#[must_use]
pub fn is_test_path(path: &str) -> bool {
    for component in path.split('/') {
        if component == "tests" || component == "test" {
            return true;
        }
    }

    let file_name = path.rsplit('/').next().unwrap_or(path);
    file_name.starts_with("test_")
}
