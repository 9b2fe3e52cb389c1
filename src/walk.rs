//! Recursive directory traversal.
//!
//! Descends the tree in enumeration order, pruning ignored directories
//! whole and handing every supported file to the processor. Files are
//! processed one at a time so results stay in a deterministic order and
//! no two writes can race on the same output path.

use std::fs;
use std::path::Path;

use crate::config::MinifyOptions;
use crate::ignore::IgnoreContext;
use crate::log;
use crate::minify::AssetKind;
use crate::process::{FileResult, process_file};
use crate::report;

/// Traverse a directory tree, minifying every supported file.
///
/// Returns one result per `.js`/`.css`/`.html` file encountered outside
/// ignored directories; other extensions never enter the pipeline.
pub fn traverse(dir: &Path, options: &MinifyOptions, ignore: &IgnoreContext) -> Vec<FileResult> {
    let mut results = Vec::new();
    traverse_into(dir, options, ignore, &mut results);
    results
}

fn traverse_into(
    dir: &Path,
    options: &MinifyOptions,
    ignore: &IgnoreContext,
    results: &mut Vec<FileResult>,
) {
    // An ignored directory prunes its entire subtree. The traversal
    // root is never self-ignored.
    if ignore.is_ignored(dir) {
        return;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log!("warning"; "cannot read directory {}: {e}", dir.display());
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            traverse_into(&path, options, ignore, results);
        } else if AssetKind::from_path(&path).is_some() {
            let result = process_file(&path, options, ignore);
            report::log_result(&result);
            results.push(result);
        }
    }
}
