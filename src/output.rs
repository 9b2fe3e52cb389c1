//! Output and source-map path planning.
//!
//! Decides where a minified file and its optional companion map are
//! written. Pure path computation; directory creation happens at write
//! time in the file processor.

use std::path::{Component, Path, PathBuf};

use crate::log;
use crate::paths::forward_slashes;

/// Compute the destination for a minified file.
///
/// - No `output_dir`: the input path unchanged (overwrite in place).
/// - Literal last segment: the subtree relative to `base_dir` is
///   replicated under `output_dir`, keeping the original filename.
/// - Rename last segment (`*` followed by a dotted extension, e.g.
///   `dist/**/*.min.js`): the filename becomes the input stem plus the
///   new extension; a `**` among the parent segments stands for the
///   input's relative subdirectory (appended at the end when absent).
///
/// A `*`-bearing last segment without a recognizable extension is not an
/// error: a warning is printed and the original filename is kept.
pub fn plan_output_path(input: &Path, base_dir: &Path, output_dir: Option<&Path>) -> PathBuf {
    let Some(output_dir) = output_dir else {
        return input.to_path_buf();
    };

    let rel = input.strip_prefix(base_dir).unwrap_or(input);
    let last = output_dir
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    let Some(suffix) = last.strip_prefix('*') else {
        // Literal directory name: replicate the relative subtree.
        return output_dir.join(rel);
    };

    let file_name = if suffix.len() > 1 && suffix.starts_with('.') {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        format!("{stem}{suffix}")
    } else {
        log!(
            "warning";
            "output pattern `{last}` has no recognizable extension, keeping original file name"
        );
        input
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string()
    };

    let parent_pattern = output_dir.parent().unwrap_or_else(|| Path::new(""));
    let rel_parent = rel.parent().unwrap_or_else(|| Path::new(""));

    let mut dir = PathBuf::new();
    let mut substituted = false;
    for component in parent_pattern.components() {
        if let Component::Normal(segment) = component
            && segment.to_str() == Some("**")
        {
            dir.push(rel_parent);
            substituted = true;
        } else {
            dir.push(component);
        }
    }
    if !substituted {
        dir.push(rel_parent);
    }

    dir.join(file_name)
}

/// Compute the companion source-map path for an output file.
///
/// With `source_map_dir` the map lands in that directory resolved
/// against the *input* file's directory; otherwise it sits next to the
/// output file. The map filename is the output filename plus `.map`.
pub fn plan_map_path(output_path: &Path, input: &Path, source_map_dir: Option<&Path>) -> PathBuf {
    let map_name = format!(
        "{}.map",
        output_path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    );
    match source_map_dir {
        Some(dir) => input
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(dir)
            .join(map_name),
        None => output_path.with_file_name(map_name),
    }
}

/// Reference URL embedded in the minified output, pointing at its map.
///
/// The path of the map file relative to the output file's directory,
/// with forward slashes.
pub fn map_reference_url(output_path: &Path, map_path: &Path) -> String {
    let output_dir = output_path.parent().unwrap_or_else(|| Path::new(""));
    match pathdiff::diff_paths(map_path, output_dir) {
        Some(rel) => forward_slashes(&rel),
        None => forward_slashes(map_path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_output_dir_overwrites_in_place() {
        let input = Path::new("/project/src/app.js");
        let planned = plan_output_path(input, Path::new("/project/src"), None);
        assert_eq!(planned, input);
    }

    #[test]
    fn test_literal_output_dir_replicates_subtree() {
        let planned = plan_output_path(
            Path::new("/project/src/widgets/menu.js"),
            Path::new("/project/src"),
            Some(Path::new("/project/out")),
        );
        assert_eq!(planned, Path::new("/project/out/widgets/menu.js"));
    }

    #[test]
    fn test_rename_pattern_flat() {
        let planned = plan_output_path(
            Path::new("src/app.js"),
            Path::new("src"),
            Some(Path::new("dist/**/*.min.js")),
        );
        assert_eq!(planned, Path::new("dist/app.min.js"));
    }

    #[test]
    fn test_rename_pattern_preserves_subtree() {
        let planned = plan_output_path(
            Path::new("src/widgets/menu.js"),
            Path::new("src"),
            Some(Path::new("dist/**/*.min.js")),
        );
        assert_eq!(planned, Path::new("dist/widgets/menu.min.js"));
    }

    #[test]
    fn test_rename_pattern_without_double_star() {
        let planned = plan_output_path(
            Path::new("src/widgets/menu.js"),
            Path::new("src"),
            Some(Path::new("dist/*.min.js")),
        );
        assert_eq!(planned, Path::new("dist/widgets/menu.min.js"));
    }

    #[test]
    fn test_malformed_rename_keeps_original_name() {
        let planned = plan_output_path(
            Path::new("src/app.js"),
            Path::new("src"),
            Some(Path::new("dist/**/*min")),
        );
        assert_eq!(planned, Path::new("dist/app.js"));
    }

    #[test]
    fn test_map_path_next_to_output() {
        let map = plan_map_path(
            Path::new("/project/out/app.min.js"),
            Path::new("/project/src/app.js"),
            None,
        );
        assert_eq!(map, Path::new("/project/out/app.min.js.map"));
    }

    #[test]
    fn test_map_path_in_map_dir() {
        let map = plan_map_path(
            Path::new("/project/src/app.js"),
            Path::new("/project/src/app.js"),
            Some(Path::new("maps")),
        );
        assert_eq!(map, Path::new("/project/src/maps/app.js.map"));
    }

    #[test]
    fn test_map_reference_url_sibling() {
        let url = map_reference_url(
            Path::new("/project/out/app.min.js"),
            Path::new("/project/out/app.min.js.map"),
        );
        assert_eq!(url, "app.min.js.map");
    }

    #[test]
    fn test_map_reference_url_subdirectory() {
        let url = map_reference_url(
            Path::new("/project/src/app.js"),
            Path::new("/project/src/maps/app.js.map"),
        );
        assert_eq!(url, "maps/app.js.map");
    }
}
