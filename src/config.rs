//! Invocation options assembled from the command line.
//!
//! Built once before traversal begins and passed by shared reference;
//! nothing mutates these after construction.

use std::path::PathBuf;

/// HTML minification sub-options.
///
/// All default to true and can be switched off individually from the CLI.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Collapse runs of whitespace between attributes and tags
    pub collapse_whitespace: bool,
    /// Strip HTML comments
    pub remove_comments: bool,
    /// Drop attributes whose value equals the default (e.g. `type="text"`)
    pub remove_redundant_attributes: bool,
    /// Emit `<!doctype html>` instead of longer doctype forms
    pub use_short_doctype: bool,
    /// Minify embedded `<style>` content
    pub minify_css: bool,
    /// Minify embedded `<script>` content
    pub minify_js: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            collapse_whitespace: true,
            remove_comments: true,
            remove_redundant_attributes: true,
            use_short_doctype: true,
            minify_css: true,
            minify_js: true,
        }
    }
}

/// Options for a single minification run.
#[derive(Debug, Clone)]
pub struct MinifyOptions {
    /// Remove `console.*` calls from JavaScript
    pub drop_console: bool,
    /// Shorten JavaScript identifiers
    pub mangle: bool,
    /// HTML sub-options
    pub html: HtmlOptions,
    /// Generate source maps for JS and CSS output
    pub source_map: bool,
    /// Directory for source maps, relative to each input file's directory
    pub source_map_dir: Option<PathBuf>,
    /// Output directory, possibly carrying a rename pattern
    /// such as `dist/**/*.min.js`
    pub output_dir: Option<PathBuf>,
    /// Compute and report results without writing anything
    pub dry_run: bool,
    /// Print quiet per-file statuses (ignored, no change)
    pub verbose: bool,
    /// Absolute directory against which ignore patterns and display
    /// paths are resolved
    pub base_path: PathBuf,
}

impl MinifyOptions {
    /// Options with every flag at its documented default, rooted at `base_path`.
    pub fn new(base_path: PathBuf) -> Self {
        Self {
            drop_console: false,
            mangle: true,
            html: HtmlOptions::default(),
            source_map: false,
            source_map_dir: None,
            output_dir: None,
            dry_run: false,
            verbose: true,
            base_path,
        }
    }
}
