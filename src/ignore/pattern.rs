//! Glob pattern set for ignore matching.
//!
//! Patterns support:
//! - `*` - matches any sequence of characters except `/`
//! - `**` - matches any sequence including `/`
//! - `{a,b}` - matches either `a` or `b`
//! - a trailing `/` (or the bare directory name) matches the directory
//!   and everything beneath it
//!
//! Matching always happens on forward-slash relative paths.

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};

use crate::log;

/// An ordered, deduplicated set of glob patterns compiled for matching.
///
/// Each source pattern `P` (trailing `/` stripped) compiles to the pair
/// `P` and `P/**`, so `images/` covers both `images` itself and
/// `images/icon.png`. Patterns that fail to compile are reported once
/// and skipped; they never abort a run.
#[derive(Debug)]
pub struct PatternSet {
    patterns: Vec<String>,
    glob_set: GlobSet,
}

impl PatternSet {
    /// Compile a pattern set, collapsing exact duplicates (first wins).
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: Vec<String> = Vec::new();
        for pattern in patterns {
            let pattern = pattern.into();
            if !seen.contains(&pattern) {
                seen.push(pattern);
            }
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in &seen {
            let base = pattern.trim_end_matches('/');
            if base.is_empty() {
                continue;
            }
            match (compile(base), compile(&format!("{base}/**"))) {
                (Ok(glob), Ok(cover)) => {
                    builder.add(glob);
                    builder.add(cover);
                }
                (Err(e), _) | (_, Err(e)) => {
                    log!("warning"; "skipping invalid ignore pattern `{pattern}`: {e}");
                }
            }
        }

        let glob_set = builder.build().unwrap_or_else(|e| {
            log!("warning"; "ignore patterns disabled: {e}");
            GlobSet::empty()
        });

        Self {
            patterns: seen,
            glob_set,
        }
    }

    /// Check if a forward-slash relative path matches any pattern.
    #[inline]
    pub fn is_match(&self, relative_path: &str) -> bool {
        self.glob_set.is_match(relative_path)
    }

    /// Source patterns in merge order, duplicates collapsed.
    #[allow(dead_code)]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Number of source patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when no patterns were supplied.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            glob_set: GlobSet::empty(),
        }
    }
}

/// Compile one glob with `*` confined to a single path segment.
fn compile(pattern: &str) -> Result<Glob, globset::Error> {
    GlobBuilder::new(pattern).literal_separator(true).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_stays_in_segment() {
        let set = PatternSet::new(["*.js"]);
        assert!(set.is_match("app.js"));
        assert!(!set.is_match("src/app.js"));
    }

    #[test]
    fn test_double_star_crosses_segments() {
        let set = PatternSet::new(["**/*.min.js"]);
        assert!(set.is_match("vendor/lib.min.js"));
        assert!(set.is_match("a/b/c/lib.min.js"));
        assert!(!set.is_match("vendor/lib.js"));
    }

    #[test]
    fn test_brace_alternation() {
        let set = PatternSet::new(["**/*.{png,jpg}"]);
        assert!(set.is_match("images/logo.png"));
        assert!(set.is_match("photo.jpg"));
        assert!(!set.is_match("style.css"));
    }

    #[test]
    fn test_directory_pattern_covers_contents() {
        let set = PatternSet::new(["images/"]);
        assert!(set.is_match("images"));
        assert!(set.is_match("images/icon.png"));
        assert!(set.is_match("images/deep/icon.png"));
        assert!(!set.is_match("imagesx/icon.png"));
    }

    #[test]
    fn test_bare_directory_pattern_covers_contents() {
        let set = PatternSet::new(["node_modules"]);
        assert!(set.is_match("node_modules"));
        assert!(set.is_match("node_modules/pkg/index.js"));
        assert!(!set.is_match("node_modules_backup/index.js"));
    }

    #[test]
    fn test_duplicates_collapsed() {
        let set = PatternSet::new(["dist/", "dist/", "dist/"]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_invalid_pattern_skipped() {
        let set = PatternSet::new(["{unclosed", "dist/"]);
        assert!(set.is_match("dist/bundle.js"));
        assert!(!set.is_match("src/app.js"));
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let set = PatternSet::default();
        assert!(!set.is_match("anything/at/all.js"));
    }
}
