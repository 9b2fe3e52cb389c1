//! Top-level invocation flow.
//!
//! Resolves the input path, assembles the option and ignore state once,
//! dispatches to the single-file or directory flow and hands the results
//! to the reporter. Only a missing or unusable input path is fatal;
//! per-file failures end up in the summary instead.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use super::Cli;
use crate::config::{HtmlOptions, MinifyOptions};
use crate::ignore::{IGNORE_FILE_NAME, IgnoreContext, load_ignore_file};
use crate::logger;
use crate::paths::{display_path, normalize_path};
use crate::process::process_file;
use crate::report;
use crate::debug;
use crate::walk::traverse;

/// Run one invocation. Returns an error only for the fatal input-path
/// cases; the process exit code stays 0 when individual files fail.
pub fn run(cli: &Cli) -> Result<()> {
    logger::set_verbose(cli.verbose);

    let input = normalize_path(&cli.input);
    if !input.exists() {
        bail!("path not found: {}", cli.input.display());
    }

    let base_path = if input.is_dir() {
        input.clone()
    } else {
        input
            .parent()
            .map_or_else(|| input.clone(), Path::to_path_buf)
    };

    let options = build_options(cli, base_path);
    let ignore = build_ignore_context(cli, &options);
    debug!("ignore"; "{} patterns active", ignore.pattern_count());

    let results = if input.is_dir() {
        traverse(&input, &options, &ignore)
    } else if input.is_file() {
        let result = process_file(&input, &options, &ignore);
        report::log_result(&result);
        vec![result]
    } else {
        bail!("{} is neither a file nor a directory", input.display());
    };

    report::print_summary(&results, options.dry_run);
    Ok(())
}

/// Assemble the immutable option bag for this invocation.
fn build_options(cli: &Cli, base_path: PathBuf) -> MinifyOptions {
    MinifyOptions {
        drop_console: cli.drop_console,
        mangle: cli.mangle,
        html: HtmlOptions {
            collapse_whitespace: cli.collapse_whitespace,
            remove_comments: cli.remove_comments,
            remove_redundant_attributes: cli.remove_redundant_attributes,
            use_short_doctype: cli.use_short_doctype,
            minify_css: cli.minify_css,
            minify_js: cli.minify_js,
        },
        source_map: cli.source_map,
        source_map_dir: cli.source_map_dir.clone(),
        output_dir: cli.output_dir.clone(),
        dry_run: cli.dry_run,
        verbose: cli.verbose,
        base_path,
    }
}

/// Merge ignore sources: defaults, ignore file, CLI patterns, plus the
/// output directory when it sits inside the tree being processed.
fn build_ignore_context(cli: &Cli, options: &MinifyOptions) -> IgnoreContext {
    let ignore_file = cli
        .ignore_path
        .clone()
        .unwrap_or_else(|| options.base_path.join(IGNORE_FILE_NAME));
    let file_patterns = load_ignore_file(&ignore_file);

    let mut cli_patterns = cli.ignore.clone();
    if let Some(pattern) = output_dir_exclusion(options) {
        debug!("ignore"; "excluding output directory ({pattern})");
        cli_patterns.push(pattern);
    }

    IgnoreContext::new(options.base_path.clone(), file_patterns, cli_patterns)
}

/// Pattern excluding the output directory from traversal.
///
/// A subsequent run over the same tree must not re-minify its own
/// output. Only the literal leading segments of the output option are
/// considered; a rename pattern's `*` segments never name a concrete
/// directory on disk.
fn output_dir_exclusion(options: &MinifyOptions) -> Option<String> {
    let output_dir = options.output_dir.as_deref()?;

    let mut literal = PathBuf::new();
    for component in output_dir.components() {
        if component.as_os_str().to_string_lossy().contains('*') {
            break;
        }
        literal.push(component);
    }
    if literal.as_os_str().is_empty() {
        return None;
    }

    let resolved = normalize_path(&literal);
    if resolved == options.base_path || !resolved.starts_with(&options.base_path) {
        return None;
    }
    Some(display_path(&resolved, &options.base_path))
}
