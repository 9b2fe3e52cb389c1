//! HTML minification via minify-html.

use minify_html::Cfg;

use super::{Minified, MinifyError};
use crate::config::HtmlOptions;

/// Minify HTML source code.
///
/// HTML minification never produces a source map. The six boolean
/// sub-options map onto the library's `Cfg` knobs; closing tags and the
/// html/head opening tags are always kept so the output stays valid
/// standalone markup.
pub fn minify_html(source: &str, options: &HtmlOptions) -> Result<Minified, MinifyError> {
    let cfg = Cfg {
        keep_spaces_between_attributes: !options.collapse_whitespace,
        keep_comments: !options.remove_comments,
        keep_input_type_text_attr: !options.remove_redundant_attributes,
        do_not_minify_doctype: !options.use_short_doctype,
        minify_css: options.minify_css,
        minify_js: options.minify_js,
        keep_closing_tags: true,
        keep_html_and_head_opening_tags: true,
        ..Cfg::default()
    };

    let minified = minify_html::minify(source.as_bytes(), &cfg);
    let code = String::from_utf8(minified).map_err(|e| MinifyError::Html(e.to_string()))?;

    Ok(Minified { code, map: None })
}
