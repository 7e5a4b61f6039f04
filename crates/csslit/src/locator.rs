use csslit_core::{TaggedLiteral, DELIMITER, TAG};

/// Finds `css` tagged template literals in raw source text.
///
/// The scan is a restartable left-to-right iterator over one file, holding an
/// explicit cursor value, so locating literals in different files never
/// shares state. Yielded literals are non-overlapping and appear in source
/// order; malformed or unterminated literals are silently not yielded.
pub struct LiteralLocator<'s> {
    source: &'s str,
    cursor: usize,
}

impl<'s> LiteralLocator<'s> {
    pub fn new(source: &'s str) -> Self {
        Self { source, cursor: 0 }
    }
}

impl<'s> Iterator for LiteralLocator<'s> {
    type Item = TaggedLiteral<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.source.len() {
            let found = self.source[self.cursor..].find(TAG)?;
            let tag_start = self.cursor + found;

            if !is_tag_boundary(self.source, tag_start)
                || !self.source[tag_start + TAG.len()..].starts_with(DELIMITER)
            {
                self.cursor = tag_start + TAG.len();
                continue;
            }

            let body_start = tag_start + TAG.len() + DELIMITER.len_utf8();
            let Some((inner_end, literal_end)) = scan_body(self.source, body_start) else {
                // Unterminated literal: leave the fragment untouched, but
                // keep looking past the dangling opener. An unclosed `${`
                // would otherwise swallow a later well-formed literal.
                self.cursor = body_start;
                continue;
            };

            self.cursor = literal_end;
            return Some(TaggedLiteral {
                start: tag_start,
                end: literal_end,
                inner: &self.source[body_start..inner_end],
            });
        }

        None
    }
}

/// The tag only counts when it stands on its own: at the very start of the
/// text or right after `(`, `=`, `:`, `,` or whitespace. This rejects
/// identifiers that merely end in the tag (`mycss`) and member access
/// (`obj.css`).
fn is_tag_boundary(source: &str, tag_start: usize) -> bool {
    let Some(prev) = source[..tag_start].chars().next_back() else {
        return true;
    };
    matches!(prev, '(' | '=' | ':' | ',') || prev.is_whitespace()
}

/// Scans the literal body from `idx`, returning the end of the inner text
/// and the end of the whole literal (past the closing delimiter).
///
/// A closing delimiter inside a balanced `${ ... }` span does not terminate
/// the literal, so interpolation brace depth is tracked one code point at a
/// time. Backslash escapes consume the next character at any depth.
fn scan_body(source: &str, mut idx: usize) -> Option<(usize, usize)> {
    let mut depth = 0usize;

    while idx < source.len() {
        let (ch, size) = next_char(source, idx)?;
        match ch {
            '\\' => {
                idx += size;
                if let Some((_, esc_size)) = next_char(source, idx) {
                    idx += esc_size;
                }
            }
            '$' if depth == 0 && source[idx + size..].starts_with('{') => {
                depth = 1;
                idx += size + 1;
            }
            '{' if depth > 0 => {
                depth += 1;
                idx += size;
            }
            '}' if depth > 0 => {
                depth -= 1;
                idx += size;
            }
            DELIMITER if depth == 0 => return Some((idx, idx + size)),
            _ => idx += size,
        }
    }

    None
}

pub(crate) fn next_char(text: &str, idx: usize) -> Option<(char, usize)> {
    text[idx..].chars().next().map(|ch| (ch, ch.len_utf8()))
}
