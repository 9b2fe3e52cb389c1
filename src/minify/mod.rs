//! Asset minification for JS, CSS and HTML files.
//!
//! Uses oxc for JavaScript, lightningcss for CSS and minify-html for
//! HTML. Dispatch is by file extension through [`AssetKind`] so every
//! supported type has exactly one handler.

mod css;
mod html;
mod js;

use std::path::Path;

use thiserror::Error;

use crate::config::MinifyOptions;

/// Supported asset types, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Js,
    Css,
    Html,
}

impl AssetKind {
    /// Classify a path by extension; `None` for unsupported files.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "js" => Some(Self::Js),
            "css" => Some(Self::Css),
            "html" => Some(Self::Html),
            _ => None,
        }
    }
}

/// Minified content plus an optional serialized source map.
#[derive(Debug)]
pub struct Minified {
    pub code: String,
    pub map: Option<String>,
}

/// A minifier library rejected its input.
#[derive(Debug, Error)]
pub enum MinifyError {
    #[error("JavaScript minification failed: {0}")]
    Js(String),
    #[error("CSS minification failed: {0}")]
    Css(String),
    #[error("HTML minification failed: {0}")]
    Html(String),
}

/// Dispatch to the minifier for `kind`.
///
/// `path` names the source in generated maps and error messages.
pub fn minify(
    kind: AssetKind,
    path: &Path,
    source: &str,
    options: &MinifyOptions,
) -> Result<Minified, MinifyError> {
    match kind {
        AssetKind::Js => js::minify_js(path, source, options),
        AssetKind::Css => css::minify_css(path, source, options),
        AssetKind::Html => html::minify_html(source, &options.html),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_path() {
        assert_eq!(AssetKind::from_path(Path::new("a.js")), Some(AssetKind::Js));
        assert_eq!(AssetKind::from_path(Path::new("b.css")), Some(AssetKind::Css));
        assert_eq!(AssetKind::from_path(Path::new("dir/c.html")), Some(AssetKind::Html));
        assert_eq!(AssetKind::from_path(Path::new("notes.txt")), None);
        assert_eq!(AssetKind::from_path(Path::new("no_extension")), None);
    }
}
