//! Per-file minification pipeline.
//!
//! Reads a file, strips stale source-map references, dispatches to the
//! minifier for its extension, and writes the result to the planned
//! destination. Every per-file failure is converted into that file's
//! result; nothing here ever aborts sibling processing.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::MinifyOptions;
use crate::ignore::IgnoreContext;
use crate::minify::{self, AssetKind};
use crate::output::{map_reference_url, plan_map_path, plan_output_path};
use crate::paths::display_path;

/// Outcome of processing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Skipped,
    Ignored,
    Minified,
    DryRunMinified,
    NoChange,
    Error,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Skipped => "Skipped",
            Self::Ignored => "Ignored",
            Self::Minified => "Minified",
            Self::DryRunMinified => "[DRY RUN] Minified",
            Self::NoChange => "No Change",
            Self::Error => "Error",
        };
        f.write_str(s)
    }
}

/// Result record for one processed file.
///
/// Immutable once returned; accumulated by the traversal for reporting.
#[derive(Debug)]
pub struct FileResult {
    /// Base-relative path, forward slashes, for display
    pub file_path: String,
    /// Input size in bytes
    pub original_size: u64,
    /// Output size in bytes (equals input size when nothing was produced)
    pub minified_size: u64,
    /// `original_size - minified_size`; negative when output grew
    pub reduction: i64,
    /// Reduction as a percentage of the original; 0 for empty inputs
    pub reduction_percent: f64,
    pub status: FileStatus,
    /// Destination the content was (or would be) written to
    pub output_file_path: Option<PathBuf>,
    /// True when a map file was actually written
    pub source_map_generated: bool,
    pub error: Option<String>,
}

impl FileResult {
    fn bare(file_path: String, status: FileStatus) -> Self {
        Self {
            file_path,
            original_size: 0,
            minified_size: 0,
            reduction: 0,
            reduction_percent: 0.0,
            status,
            output_file_path: None,
            source_map_generated: false,
            error: None,
        }
    }

    fn error(file_path: String, message: String) -> Self {
        Self {
            error: Some(message),
            ..Self::bare(file_path, FileStatus::Error)
        }
    }

    fn sized(mut self, original: u64, minified: u64) -> Self {
        self.original_size = original;
        self.minified_size = minified;
        self.reduction = original as i64 - minified as i64;
        self.reduction_percent = if original == 0 {
            0.0
        } else {
            self.reduction as f64 / original as f64 * 100.0
        };
        self
    }
}

// ============================================================================
// Source-map reference stripping
// ============================================================================

/// `//# sourceMappingURL=...` line comments, including the line break.
static LINE_MAP_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*//# sourceMappingURL=\S*[ \t]*(?:\r?\n)?").unwrap()
});

/// `/*# sourceMappingURL=... */` block comments.
static BLOCK_MAP_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t]*/\*# sourceMappingURL=[^*]*\*/[ \t]*(?:\r?\n)?").unwrap()
});

/// Remove embedded source-map reference comments.
///
/// Re-minifying content that still carries a reference to a previous map
/// would stack a stale pointer on top of the fresh one.
fn strip_map_references(source: &str) -> String {
    let stripped = LINE_MAP_REF.replace_all(source, "");
    BLOCK_MAP_REF.replace_all(&stripped, "").into_owned()
}

// ============================================================================
// File processing
// ============================================================================

/// Run the full pipeline for one file.
///
/// Side effects are at most one read, one content write, one map write
/// and the directory creations they need; under dry-run only the read
/// happens.
pub fn process_file(path: &Path, options: &MinifyOptions, ignore: &IgnoreContext) -> FileResult {
    let file_path = display_path(path, &options.base_path);

    if ignore.is_ignored(path) {
        return FileResult::bare(file_path, FileStatus::Ignored);
    }

    let Some(kind) = AssetKind::from_path(path) else {
        // Only reachable for a direct single-file invocation; the walker
        // never hands unsupported extensions to the pipeline.
        return FileResult::bare(file_path, FileStatus::Skipped);
    };

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => return FileResult::error(file_path, e.to_string()),
    };
    let original_size = source.len() as u64;

    let stripped = strip_map_references(&source);
    let minified = match minify::minify(kind, path, &stripped, options) {
        Ok(minified) => minified,
        Err(e) => {
            return FileResult::error(file_path, e.to_string()).sized(original_size, original_size);
        }
    };

    let output_path = plan_output_path(path, &options.base_path, options.output_dir.as_deref());

    // Attach the map reference before comparing against the input, so a
    // previously minified file with an up-to-date reference is a fixed
    // point and reports No Change.
    let mut code = minified.code;
    let map = if options.source_map { minified.map } else { None };
    let map_path = map
        .is_some()
        .then(|| plan_map_path(&output_path, path, options.source_map_dir.as_deref()));
    if let Some(map_path) = &map_path {
        let url = map_reference_url(&output_path, map_path);
        match kind {
            AssetKind::Js => code.push_str(&format!("\n//# sourceMappingURL={url}")),
            AssetKind::Css => code.push_str(&format!("\n/*# sourceMappingURL={url} */")),
            AssetKind::Html => {}
        }
    }

    if code == source {
        return FileResult::bare(file_path, FileStatus::NoChange)
            .sized(original_size, original_size);
    }

    let minified_size = code.len() as u64;

    if options.dry_run {
        let mut result = FileResult::bare(file_path, FileStatus::DryRunMinified)
            .sized(original_size, minified_size);
        result.output_file_path = Some(output_path);
        return result;
    }

    if let Err(e) = write_with_dirs(&output_path, code.as_bytes()) {
        return FileResult::error(file_path, e.to_string()).sized(original_size, original_size);
    }

    let mut source_map_generated = false;
    if let (Some(map), Some(map_path)) = (&map, &map_path) {
        if let Err(e) = write_with_dirs(map_path, map.as_bytes()) {
            return FileResult::error(file_path, e.to_string())
                .sized(original_size, minified_size);
        }
        source_map_generated = true;
    }

    let mut result =
        FileResult::bare(file_path, FileStatus::Minified).sized(original_size, minified_size);
    result.output_file_path = Some(output_path);
    result.source_map_generated = source_map_generated;
    result
}

/// Write a file, creating intermediate directories first.
fn write_with_dirs(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}
