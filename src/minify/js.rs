//! JavaScript minification via oxc.

use std::path::Path;

use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

use super::{Minified, MinifyError};
use crate::config::MinifyOptions;

/// Minify JavaScript source code.
///
/// Parse errors surface as [`MinifyError::Js`] with the first oxc
/// diagnostic; the caller leaves the original file untouched.
pub fn minify_js(
    path: &Path,
    source: &str,
    options: &MinifyOptions,
) -> Result<Minified, MinifyError> {
    let allocator = Allocator::default();
    let source_type = SourceType::mjs();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if let Some(error) = ret.errors.first() {
        return Err(MinifyError::Js(error.to_string()));
    }

    let mut program = ret.program;
    let minifier_options = MinifierOptions {
        mangle: options.mangle.then(MangleOptions::default),
        compress: Some(CompressOptions {
            drop_console: options.drop_console,
            ..CompressOptions::smallest()
        }),
    };
    let ret = Minifier::new(minifier_options).minify(&allocator, &mut program);

    let out = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            source_map_path: options.source_map.then(|| path.to_path_buf()),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program);

    Ok(Minified {
        code: out.code,
        map: out.map.map(|map| map.to_json_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MinifyOptions;
    use std::path::PathBuf;

    fn options() -> MinifyOptions {
        MinifyOptions::new(PathBuf::from("/project"))
    }

    #[test]
    fn test_minify_js_shrinks() {
        let source = "function add(first, second) {\n    return first + second;\n}\nexport { add };\n";
        let out = minify_js(Path::new("add.js"), source, &options()).unwrap();
        assert!(out.code.len() < source.len());
        assert!(out.map.is_none());
    }

    #[test]
    fn test_minify_js_syntax_error() {
        let err = minify_js(Path::new("bad.js"), "function( { ", &options()).unwrap_err();
        assert!(matches!(err, MinifyError::Js(_)));
    }

    #[test]
    fn test_minify_js_drop_console() {
        let mut opts = options();
        opts.drop_console = true;
        let source = "export function greet() { console.log(\"hi\"); return 1; }";
        let out = minify_js(Path::new("greet.js"), source, &opts).unwrap();
        assert!(!out.code.contains("console"));
    }

    #[test]
    fn test_minify_js_source_map() {
        let mut opts = options();
        opts.source_map = true;
        let source = "export const answer = 40 + 2;";
        let out = minify_js(Path::new("answer.js"), source, &opts).unwrap();
        let map = out.map.expect("map requested");
        assert!(map.contains("\"mappings\""));
    }
}
