//! Command-line interface definitions.

use clap::{ArgAction, ColorChoice, Parser};
use std::path::PathBuf;

/// Recursively minify JavaScript, CSS and HTML assets
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// File or directory to minify
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
    pub input: PathBuf,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Remove console.* statements from JavaScript
    #[arg(long)]
    pub drop_console: bool,

    /// Shorten JavaScript identifiers
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false, default_value_t = true)]
    pub mangle: bool,

    /// Collapse whitespace in HTML
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false, default_value_t = true)]
    pub collapse_whitespace: bool,

    /// Strip HTML comments
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false, default_value_t = true)]
    pub remove_comments: bool,

    /// Drop HTML attributes whose value equals the default
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false, default_value_t = true)]
    pub remove_redundant_attributes: bool,

    /// Use the short HTML doctype
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false, default_value_t = true)]
    pub use_short_doctype: bool,

    /// Minify CSS embedded in HTML
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false, default_value_t = true)]
    pub minify_css: bool,

    /// Minify JavaScript embedded in HTML
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false, default_value_t = true)]
    pub minify_js: bool,

    /// Glob patterns to exclude (repeatable, comma-separated)
    #[arg(short, long, value_name = "PATTERN", value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Ignore file to read patterns from (default: .minifierignore in the base directory)
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub ignore_path: Option<PathBuf>,

    /// Generate source maps for JS and CSS output
    #[arg(short = 'm', long)]
    pub source_map: bool,

    /// Directory for source maps, relative to each input file
    #[arg(long, value_name = "DIR", value_hint = clap::ValueHint::DirPath)]
    pub source_map_dir: Option<PathBuf>,

    /// Output directory; the last segment may be a rename pattern
    /// such as `dist/**/*.min.js`
    #[arg(short, long, value_name = "DIR", value_hint = clap::ValueHint::AnyPath)]
    pub output_dir: Option<PathBuf>,

    /// Report what would change without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print quiet per-file statuses (ignored, no change)
    #[arg(short, long, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false, default_value_t = true)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["squish", "site/"]);
        assert!(!cli.drop_console);
        assert!(cli.mangle);
        assert!(cli.collapse_whitespace);
        assert!(cli.remove_comments);
        assert!(cli.verbose);
        assert!(!cli.source_map);
        assert!(!cli.dry_run);
        assert!(cli.ignore.is_empty());
    }

    #[test]
    fn test_negatable_flags() {
        let cli = Cli::parse_from(["squish", "site/", "--mangle=false", "--verbose=false"]);
        assert!(!cli.mangle);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_ignore_comma_split() {
        let cli = Cli::parse_from(["squish", "site/", "-i", "vendor/,*.min.js", "-i", "dist/"]);
        assert_eq!(cli.ignore, vec!["vendor/", "*.min.js", "dist/"]);
    }
}
