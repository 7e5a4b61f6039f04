use swc_core::common::{input::StringInput, Span};
use swc_css_ast::Stylesheet;
use swc_css_parser::{
    self,
    error::Error as ParseError,
    parse_string_input,
    parser::{PResult, ParserConfig},
};

/// Parses the `input` as `Stylesheet`
pub fn parse_stylesheet(
    input: &str,
    span: Span,
    config: ParserConfig,
    errors: &mut Vec<ParseError>,
) -> PResult<Stylesheet> {
    let parser_input = StringInput::new(input, span.lo, span.hi);
    parse_string_input(parser_input, None, config, errors)
}

#[cfg(test)]
mod tests {
    use swc_core::common::BytePos;

    use super::*;

    #[test]
    fn it_parses_regular() {
        assert_no_errors(".foo > #bar baz, .foo .bar { background: yellow }");
        assert_no_errors(".button { padding: 10px; border: none; }");
    }

    #[test]
    fn it_parses_placeholder_idents() {
        // Interpolation placeholders must survive a parse round-trip
        assert_no_errors(".button { color: csslit-dyn-0; padding: 10px; }");
    }

    fn assert_no_errors(input: &str) {
        let (parsed, errors) = test_parse(input);
        assert!(parsed.is_ok());
        assert!(errors.is_empty());
    }

    fn test_parse(input: &str) -> (Result<Stylesheet, ParseError>, Vec<ParseError>) {
        let span = Span::new(
            BytePos(1),
            BytePos(1 + input.len() as u32),
        );
        let mut errors = Vec::new();
        let parsed = parse_stylesheet(input, span, ParserConfig::default(), &mut errors);

        (parsed, errors)
    }
}
