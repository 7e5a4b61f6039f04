/// The tag keyword marking an embedded CSS literal, e.g. ``css`.foo {}` ``
pub const TAG: &str = "css";

/// The delimiter opening and closing the literal body
pub const DELIMITER: char = '`';

/// One tagged CSS literal found in the source text.
///
/// Offsets are half-open byte offsets into the original text and span the
/// full match, tag keyword through closing delimiter inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedLiteral<'s> {
    pub start: usize,
    pub end: usize,
    /// Raw content strictly between the opening and closing delimiters
    pub inner: &'s str,
}

impl TaggedLiteral<'_> {
    /// Byte offset of `inner` within the original text
    pub fn inner_start(&self) -> usize {
        self.start + TAG.len() + DELIMITER.len_utf8()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Literal CSS text, eligible for transformation
    Static,
    /// A `${ ... }` interpolation span, always passed through verbatim
    Dynamic,
}

/// One contiguous slice of a tagged literal's inner text.
///
/// `start`/`end` are offsets into the original source text, not into the
/// inner text, so diagnostics can point at the file directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'s> {
    pub kind: SegmentKind,
    pub content: &'s str,
    pub start: usize,
    pub end: usize,
}

impl Segment<'_> {
    pub fn is_static(&self) -> bool {
        matches!(self.kind, SegmentKind::Static)
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self.kind, SegmentKind::Dynamic)
    }
}
