//! CSS minification via lightningcss.

use std::path::Path;

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use parcel_sourcemap::SourceMap;

use super::{Minified, MinifyError};
use crate::config::MinifyOptions;
use crate::paths::forward_slashes;

/// Minify CSS source code.
///
/// Parse and print errors surface as [`MinifyError::Css`]; the caller
/// leaves the original file untouched.
pub fn minify_css(
    path: &Path,
    source: &str,
    options: &MinifyOptions,
) -> Result<Minified, MinifyError> {
    let parser_options = ParserOptions {
        filename: forward_slashes(path),
        ..ParserOptions::default()
    };
    let stylesheet = StyleSheet::parse(source, parser_options)
        .map_err(|e| MinifyError::Css(e.to_string()))?;

    let mut map = options.source_map.then(|| SourceMap::new("/"));
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            source_map: map.as_mut(),
            ..PrinterOptions::default()
        })
        .map_err(|e| MinifyError::Css(e.to_string()))?;

    let map_json = match map.as_mut() {
        Some(map) => map.to_json(None).ok(),
        None => None,
    };

    Ok(Minified {
        code: result.code,
        map: map_json,
    })
}
