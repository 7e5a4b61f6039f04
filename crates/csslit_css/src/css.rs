mod codegen;
mod error;
mod parse;

use csslit_core::error::Severity;
use swc_core::common::Span;
use swc_css_parser::parser::ParserConfig;

pub use codegen::{stringify, StringifyOptions};
pub use error::{CssError, CssErrorKind};
pub use parse::parse_stylesheet;

#[derive(Clone, Default)]
pub struct CssTransformOptions {
    pub parse: ParserConfig,
    pub stringify: StringifyOptions,
}

/// Parses and re-prints raw CSS, minified by default.
///
/// Returns `None` when the input could not be parsed. Recoverable parse
/// errors are collected into `errors` but do not block the output.
pub fn transform_css(
    content: &str,
    span: Span,
    errors: &mut Vec<CssError>,
    options: &CssTransformOptions,
) -> Option<String> {
    // Parse and collect errors
    let mut parse_errors = Vec::new();
    let parse_result = parse_stylesheet(content, span, options.parse.clone(), &mut parse_errors);
    let is_recoverable = parse_result.is_ok();
    errors.extend(
        parse_errors
            .into_iter()
            .map(|e| CssError::from_parse_error(e, is_recoverable)),
    );

    let stylesheet = match parse_result {
        Ok(stylesheet) => stylesheet,
        Err(e) => {
            errors.push(CssError::from_parse_error(e, false));
            return None;
        }
    };

    if errors.iter().any(Severity::is_unrecoverable_error) {
        return None;
    }

    Some(stringify(&stylesheet, &options.stringify))
}

#[cfg(test)]
mod tests {
    use swc_core::common::{BytePos, Span};

    use super::*;

    macro_rules! test_output {
        ($input: expr, $expected: expr) => {
            let span = Span::new(
                BytePos(1),
                BytePos(1 + $input.len() as u32),
            );
            let mut errors = Vec::new();
            let out = transform_css($input, span, &mut errors, &Default::default());
            assert_eq!(out.ok_or(()), $expected);
        };
    }

    macro_rules! test_ok {
        ($input: expr, $expected: expr) => {
            test_output!($input, Ok(String::from($expected)));
        };
    }

    #[test]
    fn it_minifies() {
        test_ok!(
            ".container { display: flex; padding: 20px; }",
            ".container{display:flex;padding:20px}"
        );

        test_ok!(
            ".foo > #bar baz { background: #ff0 }",
            ".foo>#bar baz{background:#ff0}"
        );

        test_ok!(
            ".button { padding: 10px; border: none; }",
            ".button{padding:10px;border:none}"
        );
    }

    #[test]
    fn it_keeps_unknown_values() {
        // A syntactically fine declaration with a bogus value is not our
        // problem to diagnose
        test_ok!(
            ".test { display: invalid-value; }",
            ".test{display:invalid-value}"
        );
    }

    #[test]
    fn it_recovers_from_stray_tokens() {
        // The parser drops the stray brace, reports a recoverable error and
        // still produces output
        let input = ".a { color: red; } }";
        let span = Span::new(
            BytePos(1),
            BytePos(1 + input.len() as u32),
        );
        let mut errors = Vec::new();

        let out = transform_css(input, span, &mut errors, &Default::default());

        assert!(out.is_some());
        assert!(!errors.is_empty());
        assert!(errors.iter().all(Severity::is_recoverable_error));
    }

    #[test]
    fn it_handles_at_rules() {
        test_ok!(
            "@media screen and (min-width: 500px) { .foo { background: #ff0 } }",
            "@media screen and (min-width:500px){.foo{background:#ff0}}"
        );
    }
}
