//! Built-in ignore patterns.
//!
//! Developer tooling files are excluded from minification by default:
//! rewriting a webpack config or an eslint rc file in place corrupts the
//! project that owns it. Users cannot edit this list, but any file it
//! covers can still be minified by pointing the tool at it directly.

/// Tool-supplied patterns merged before ignore-file and CLI patterns.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    // Bundler configs
    "**/webpack.config.js",
    "**/webpack.config.*.js",
    "**/rollup.config.js",
    "**/vite.config.js",
    "**/esbuild.config.js",
    // Task runners
    "**/gulpfile.js",
    "**/Gruntfile.js",
    // Linter and formatter rc files
    "**/.eslintrc.js",
    "**/.prettierrc.js",
    "**/.stylelintrc.js",
    // Transpiler and CSS tooling configs
    "**/babel.config.js",
    "**/.babelrc.js",
    "**/postcss.config.js",
    "**/tailwind.config.js",
    // Test framework configs
    "**/jest.config.js",
    "**/karma.conf.js",
    "**/protractor.conf.js",
    "**/cypress.config.js",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ignore::PatternSet;

    #[test]
    fn test_defaults_cover_tooling_files() {
        let set = PatternSet::new(DEFAULT_IGNORE_PATTERNS.iter().copied());
        assert!(set.is_match("webpack.config.js"));
        assert!(set.is_match("frontend/webpack.config.prod.js"));
        assert!(set.is_match("gulpfile.js"));
        assert!(set.is_match("packages/app/.eslintrc.js"));
        assert!(set.is_match("jest.config.js"));
    }

    #[test]
    fn test_defaults_leave_sources_alone() {
        let set = PatternSet::new(DEFAULT_IGNORE_PATTERNS.iter().copied());
        assert!(!set.is_match("src/app.js"));
        assert!(!set.is_match("config.js"));
        assert!(!set.is_match("styles/main.css"));
        assert!(!set.is_match("index.html"));
    }
}
