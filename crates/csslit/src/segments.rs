use csslit_core::{Segment, SegmentKind, TaggedLiteral, DELIMITER, TAG};
use csslit_css::{transform_css, CssTransformOptions};
use swc_core::common::{BytePos, Span};

use crate::error::{preview, RewriteError, RewriteErrorKind};
use crate::locator::next_char;

/// Prefix of the identifiers standing in for interpolation spans while the
/// static CSS goes through the transformer
const PLACEHOLDER_PREFIX: &str = "csslit-dyn-";

fn placeholder(index: usize) -> String {
    format!("{}{}", PLACEHOLDER_PREFIX, index)
}

/// Splits a literal's inner text into static and dynamic segments.
///
/// Segments are strictly increasing, contiguous, non-overlapping and cover
/// the inner text exactly once; zero-length static runs are not emitted.
/// Braces inside a `${ ... }` span belong to the span and are depth-counted,
/// never treated as CSS braces. An escaped `\$` stays static.
pub fn split_literal<'s>(literal: &TaggedLiteral<'s>) -> Vec<Segment<'s>> {
    let inner = literal.inner;
    let offset = literal.inner_start();
    let mut segments = Vec::new();

    let mut idx = 0;
    let mut static_start = 0;

    while idx < inner.len() {
        let Some((ch, size)) = next_char(inner, idx) else {
            break;
        };
        match ch {
            '\\' => {
                idx += size;
                if let Some((_, esc_size)) = next_char(inner, idx) {
                    idx += esc_size;
                }
            }
            '$' if inner[idx + size..].starts_with('{') => {
                if idx > static_start {
                    segments.push(Segment {
                        kind: SegmentKind::Static,
                        content: &inner[static_start..idx],
                        start: offset + static_start,
                        end: offset + idx,
                    });
                }

                let dynamic_end = scan_interpolation(inner, idx + size + 1);
                segments.push(Segment {
                    kind: SegmentKind::Dynamic,
                    content: &inner[idx..dynamic_end],
                    start: offset + idx,
                    end: offset + dynamic_end,
                });

                idx = dynamic_end;
                static_start = idx;
            }
            _ => idx += size,
        }
    }

    if inner.len() > static_start {
        segments.push(Segment {
            kind: SegmentKind::Static,
            content: &inner[static_start..],
            start: offset + static_start,
            end: offset + inner.len(),
        });
    }

    segments
}

/// Advances past the matching top-level `}` of an interpolation span.
///
/// The locator never yields a literal with an unbalanced interpolation, but
/// a standalone caller still gets a dynamic tail instead of a panic.
fn scan_interpolation(inner: &str, mut idx: usize) -> usize {
    let mut depth = 1usize;

    while idx < inner.len() && depth > 0 {
        let Some((ch, size)) = next_char(inner, idx) else {
            break;
        };
        match ch {
            '\\' => {
                idx += size;
                if let Some((_, esc_size)) = next_char(inner, idx) {
                    idx += esc_size;
                }
                continue;
            }
            '{' => depth += 1,
            '}' => depth -= 1,
            _ => {}
        }
        idx += size;
    }

    idx
}

/// Heuristic gate deciding whether static text is worth sending to the CSS
/// transformer: non-blank, contains a `{` and a `}`, and has something that
/// looks like a selector (optional `.` or `#`, word characters, optional
/// whitespace, then `{`). False negatives are acceptable; prose must not
/// reach the transformer.
pub fn looks_like_css(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }

    trimmed.contains('{') && trimmed.contains('}') && has_selector_shape(trimmed)
}

fn has_selector_shape(text: &str) -> bool {
    let bytes = text.as_bytes();

    for (idx, _) in text.match_indices('{') {
        let mut cursor = idx;
        while cursor > 0 && bytes[cursor - 1].is_ascii_whitespace() {
            cursor -= 1;
        }

        // At least one word character before the brace; the `.`/`#` prefix
        // is optional and does not need checking
        let word_end = cursor;
        while cursor > 0 && is_word_byte(bytes[cursor - 1]) {
            cursor -= 1;
        }
        if cursor < word_end {
            return true;
        }
    }

    false
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Per-literal processing outcome. One explicit value per literal keeps the
/// aggregation policy in a single place: any [`Rejected`] or [`Failed`]
/// literal discards the owning file's whole pass.
///
/// [`Rejected`]: Outcome::Rejected
/// [`Failed`]: Outcome::Failed
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// At least one static segment was transformed
    Rewritten(String),
    /// Nothing to transform, or the transform output equals the input
    Unchanged,
    /// The static text does not look like CSS
    Rejected,
    /// The transformer could not handle the static text
    Failed,
}

/// Transforms one literal's static CSS and rebuilds the literal.
///
/// The static segments are joined into a single buffer with a unique
/// placeholder identifier standing in for each dynamic segment, transformed
/// in one call, and the transformed output is split back on the placeholders
/// to recover each static segment's final content. Dynamic content is never
/// shown to the transformer and is restored byte-for-byte.
pub fn rewrite_literal(
    literal: &TaggedLiteral,
    segments: &[Segment],
    options: &CssTransformOptions,
    errors: &mut Vec<RewriteError>,
) -> Outcome {
    let statics_blank = segments
        .iter()
        .filter(|segment| segment.is_static())
        .all(|segment| segment.content.trim().is_empty());
    if statics_blank {
        return Outcome::Unchanged;
    }

    let mut static_text = String::with_capacity(literal.inner.len());
    let mut dynamic_count = 0usize;
    for segment in segments {
        match segment.kind {
            SegmentKind::Static => static_text.push_str(segment.content),
            SegmentKind::Dynamic => {
                static_text.push_str(&placeholder(dynamic_count));
                dynamic_count += 1;
            }
        }
    }

    if !looks_like_css(&static_text) {
        errors.push(RewriteError {
            start: literal.start,
            end: literal.end,
            kind: RewriteErrorKind::NotCss {
                preview: preview(&static_text),
            },
        });
        return Outcome::Rejected;
    }

    if literal.inner.contains(PLACEHOLDER_PREFIX) {
        // Splitting the output back apart would be ambiguous
        errors.push(RewriteError {
            start: literal.start,
            end: literal.end,
            kind: RewriteErrorKind::PlaceholderMismatch {
                preview: preview(&static_text),
            },
        });
        return Outcome::Failed;
    }

    let lo = literal.inner_start() as u32 + 1;
    let span = Span::new(
        BytePos(lo),
        BytePos(lo + static_text.len() as u32),
    );

    let mut css_errors = Vec::new();
    let Some(transformed) = transform_css(&static_text, span, &mut css_errors, options) else {
        errors.push(RewriteError {
            start: literal.start,
            end: literal.end,
            kind: RewriteErrorKind::TransformFailed {
                preview: preview(&static_text),
                css_errors,
            },
        });
        return Outcome::Failed;
    };

    if !css_errors.is_empty() {
        // The parser recovered and the rewrite goes ahead, but the
        // malformed part may have been dropped from the output
        errors.push(RewriteError {
            start: literal.start,
            end: literal.end,
            kind: RewriteErrorKind::TransformRecovered {
                preview: preview(&static_text),
                css_errors,
            },
        });
    }

    // Re-interleave: the text between consecutive placeholders is the
    // transformed content of the static segment standing between them
    let mut rebuilt = String::with_capacity(transformed.len() + literal.inner.len());
    let mut cursor = 0usize;
    let mut dynamic_index = 0usize;

    for segment in segments {
        if !segment.is_dynamic() {
            continue;
        }

        let marker = placeholder(dynamic_index);
        let Some(found) = transformed[cursor..].find(&marker) else {
            errors.push(RewriteError {
                start: literal.start,
                end: literal.end,
                kind: RewriteErrorKind::PlaceholderMismatch {
                    preview: preview(&static_text),
                },
            });
            return Outcome::Failed;
        };

        rebuilt.push_str(&transformed[cursor..cursor + found]);
        rebuilt.push_str(segment.content);
        cursor += found + marker.len();
        dynamic_index += 1;
    }
    rebuilt.push_str(&transformed[cursor..]);

    if rebuilt == literal.inner {
        return Outcome::Unchanged;
    }

    let mut replacement = String::with_capacity(TAG.len() + rebuilt.len() + 2);
    replacement.push_str(TAG);
    replacement.push(DELIMITER);
    replacement.push_str(&rebuilt);
    replacement.push(DELIMITER);

    Outcome::Rewritten(replacement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::LiteralLocator;

    fn first_literal(source: &str) -> TaggedLiteral<'_> {
        LiteralLocator::new(source)
            .next()
            .expect("source should contain a literal")
    }

    #[test]
    fn split_covers_the_inner_text() {
        let source = "css`.button { color: ${color}; padding: 10px; }`";
        let literal = first_literal(source);
        let segments = split_literal(&literal);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].kind, SegmentKind::Static);
        assert_eq!(segments[1].kind, SegmentKind::Dynamic);
        assert_eq!(segments[1].content, "${color}");
        assert_eq!(segments[2].kind, SegmentKind::Static);

        let joined: String = segments.iter().map(|segment| segment.content).collect();
        assert_eq!(joined, literal.inner);

        for segment in &segments {
            assert_eq!(&source[segment.start..segment.end], segment.content);
        }
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn split_counts_braces_inside_interpolations() {
        let source = "css`.a { width: ${ {size: {px: 1}}.size.px }px; }`";
        let segments = split_literal(&first_literal(source));

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].content, "${ {size: {px: 1}}.size.px }");
    }

    #[test]
    fn split_keeps_escaped_interpolations_static() {
        let source = r"css`.a::before { content: '\${x}'; color: red; }`";
        let segments = split_literal(&first_literal(source));

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentKind::Static);
    }

    #[test]
    fn split_handles_adjacent_interpolations() {
        let source = "css`${a}${b}`";
        let segments = split_literal(&first_literal(source));

        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|segment| segment.is_dynamic()));
    }

    #[test]
    fn predicate_accepts_css_shaped_text() {
        assert!(looks_like_css(".class { color: red; }"));
        assert!(looks_like_css(" #id { margin: 0; }"));
        assert!(looks_like_css(
            ".multiple { color: red; } .classes { margin: 0; }"
        ));
        assert!(looks_like_css("element { padding: 10px; }"));
    }

    #[test]
    fn predicate_rejects_non_css_text() {
        assert!(!looks_like_css(""));
        assert!(!looks_like_css("   "));
        assert!(!looks_like_css("not css at all"));
        assert!(!looks_like_css("This is not valid CSS!"));
        assert!(!looks_like_css("{ invalid: true }"));
    }

    #[test]
    fn rewrite_minifies_static_segments() {
        let source = "css`.container { display: flex; padding: 20px; }`";
        let literal = first_literal(source);
        let segments = split_literal(&literal);
        let mut errors = Vec::new();

        let outcome = rewrite_literal(&literal, &segments, &Default::default(), &mut errors);

        assert_eq!(
            outcome,
            Outcome::Rewritten("css`.container{display:flex;padding:20px}`".into())
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn rewrite_restores_dynamic_segments_verbatim() {
        let source = "css`.button { color: ${color}; padding: 10px; }`";
        let literal = first_literal(source);
        let segments = split_literal(&literal);
        let mut errors = Vec::new();

        let outcome = rewrite_literal(&literal, &segments, &Default::default(), &mut errors);

        assert_eq!(
            outcome,
            Outcome::Rewritten("css`.button{color:${color};padding:10px}`".into())
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn rewrite_rejects_prose() {
        let source = "css`This is not valid CSS!`";
        let literal = first_literal(source);
        let segments = split_literal(&literal);
        let mut errors = Vec::new();

        let outcome = rewrite_literal(&literal, &segments, &Default::default(), &mut errors);

        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(errors.len(), 1);
        let RewriteErrorKind::NotCss { ref preview } = errors[0].kind else {
            panic!("expected a NotCss diagnostic, got {:?}", errors[0].kind);
        };
        assert!(preview.starts_with("This is not valid CSS!"));
    }

    #[test]
    fn rewrite_skips_blank_literals() {
        for source in ["css``", "css`   `", "css`${x}`", "css`${a} ${b}`"] {
            let literal = first_literal(source);
            let segments = split_literal(&literal);
            let mut errors = Vec::new();

            let outcome = rewrite_literal(&literal, &segments, &Default::default(), &mut errors);

            assert_eq!(outcome, Outcome::Unchanged, "source: {}", source);
            assert!(errors.is_empty(), "source: {}", source);
        }
    }

    #[test]
    fn rewrite_leaves_minified_literals_alone() {
        let source = "css`.a{color:red}`";
        let literal = first_literal(source);
        let segments = split_literal(&literal);
        let mut errors = Vec::new();

        let outcome = rewrite_literal(&literal, &segments, &Default::default(), &mut errors);

        assert_eq!(outcome, Outcome::Unchanged);
        assert!(errors.is_empty());
    }

    #[test]
    fn rewrite_reports_recovered_parse_errors() {
        // The stray closing brace is a recoverable parse error: the rule
        // before it still minifies, and the recovery is surfaced
        let source = "css`.a { color: red; } }`";
        let literal = first_literal(source);
        let segments = split_literal(&literal);
        let mut errors = Vec::new();

        let outcome = rewrite_literal(&literal, &segments, &Default::default(), &mut errors);

        assert!(matches!(outcome, Outcome::Rewritten(_)));
        assert_eq!(errors.len(), 1);
        let RewriteErrorKind::TransformRecovered { ref css_errors, .. } = errors[0].kind else {
            panic!(
                "expected a TransformRecovered diagnostic, got {:?}",
                errors[0].kind
            );
        };
        assert!(!css_errors.is_empty());
    }

    #[test]
    fn rewrite_fails_on_placeholder_collisions() {
        let source = "css`.csslit-dyn-0 { color: ${color}; }`";
        let literal = first_literal(source);
        let segments = split_literal(&literal);
        let mut errors = Vec::new();

        let outcome = rewrite_literal(&literal, &segments, &Default::default(), &mut errors);

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(errors.len(), 1);
    }
}
