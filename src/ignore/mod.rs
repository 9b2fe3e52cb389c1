//! Ignore-pattern resolution.
//!
//! Merges built-in defaults, ignore-file patterns and CLI patterns into
//! one [`PatternSet`] and decides per-path exclusion against a base
//! directory. Built once per invocation; read-only during traversal.

mod defaults;
mod pattern;

pub use defaults::DEFAULT_IGNORE_PATTERNS;
pub use pattern::PatternSet;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::log;
use crate::paths::forward_slashes;

/// Default ignore file name, looked up in the base directory.
pub const IGNORE_FILE_NAME: &str = ".minifierignore";

/// Merged ignore state for one invocation.
#[derive(Debug)]
pub struct IgnoreContext {
    /// Absolute directory used as the matching root
    base_dir: PathBuf,
    /// Defaults, then file-sourced, then CLI-sourced patterns
    patterns: PatternSet,
}

impl IgnoreContext {
    /// Merge pattern sources in order: defaults, ignore file, CLI.
    ///
    /// Exact-duplicate strings are collapsed by [`PatternSet`].
    pub fn new<I, S>(base_dir: PathBuf, file_patterns: Vec<String>, cli_patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let merged = DEFAULT_IGNORE_PATTERNS
            .iter()
            .map(|p| (*p).to_string())
            .chain(file_patterns)
            .chain(cli_patterns.into_iter().map(Into::into));
        Self {
            base_dir,
            patterns: PatternSet::new(merged),
        }
    }

    /// Decide whether a path is excluded from processing.
    ///
    /// The path is matched relative to the base directory with forward
    /// slashes. The traversal root itself is never ignored.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let rel = path.strip_prefix(&self.base_dir).unwrap_or(path);
        let rel = forward_slashes(rel);
        if rel.is_empty() || rel == "." {
            return false;
        }
        self.patterns.is_match(&rel)
    }

    /// The matching root.
    #[allow(dead_code)]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Number of merged patterns (after deduplication).
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

/// Load patterns from an ignore file.
///
/// One pattern per line; blank lines and lines whose first
/// non-whitespace character is `#` are skipped. A missing file yields
/// zero patterns. Any other read failure is reported and likewise
/// degrades to zero patterns; the run continues.
pub fn load_ignore_file(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(text) => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect(),
        Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
        Err(e) => {
            log!("warning"; "cannot read ignore file {}: {e}", path.display());
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn context(base: &Path, patterns: &[&str]) -> IgnoreContext {
        IgnoreContext::new(base.to_path_buf(), Vec::new(), patterns.iter().copied())
    }

    #[test]
    fn test_root_never_ignored() {
        let base = Path::new("/project");
        let ctx = context(base, &["**"]);
        assert!(!ctx.is_ignored(base));
    }

    #[test]
    fn test_relative_matching() {
        let base = Path::new("/project");
        let ctx = context(base, &["vendor/"]);
        assert!(ctx.is_ignored(Path::new("/project/vendor")));
        assert!(ctx.is_ignored(Path::new("/project/vendor/lib.js")));
        assert!(!ctx.is_ignored(Path::new("/project/src/app.js")));
    }

    #[test]
    fn test_is_ignored_deterministic() {
        let base = Path::new("/project");
        let ctx = context(base, &["**/*.min.js"]);
        let path = Path::new("/project/dist/app.min.js");
        let first = ctx.is_ignored(path);
        for _ in 0..10 {
            assert_eq!(ctx.is_ignored(path), first);
        }
        assert!(first);
    }

    #[test]
    fn test_defaults_always_merged() {
        let base = Path::new("/project");
        let ctx = context(base, &[]);
        assert!(ctx.is_ignored(Path::new("/project/webpack.config.js")));
    }

    #[test]
    fn test_merge_collapses_duplicates() {
        let base = Path::new("/project");
        let with_dupes = IgnoreContext::new(
            base.to_path_buf(),
            vec!["dist/".to_string(), "dist/".to_string()],
            ["dist/"],
        );
        let without =
            IgnoreContext::new(base.to_path_buf(), vec!["dist/".to_string()], Vec::<String>::new());
        assert_eq!(with_dupes.pattern_count(), without.pattern_count());
    }

    #[test]
    fn test_load_ignore_file_missing() {
        let dir = TempDir::new().unwrap();
        let patterns = load_ignore_file(&dir.path().join(IGNORE_FILE_NAME));
        assert!(patterns.is_empty());
    }

    #[test]
    fn test_load_ignore_file_skips_comments_and_blanks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(IGNORE_FILE_NAME);
        fs::write(&path, "# tooling\nvendor/\n\n   # indented comment\n*.min.js\n").unwrap();
        let patterns = load_ignore_file(&path);
        assert_eq!(patterns, vec!["vendor/".to_string(), "*.min.js".to_string()]);
    }
}
