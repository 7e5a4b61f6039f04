//! Edit log over an immutable original text, materialized into the final
//! string plus a position map.

/// One replace-operation against the original text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

/// Ordered, non-overlapping overwrites over one file's original text.
///
/// Owned exclusively by a single file's processing run. Edits are recorded
/// against the original text and never applied in place, so scanning offsets
/// stay valid while the log fills up.
#[derive(Debug)]
pub struct EditLog<'s> {
    source: &'s str,
    edits: Vec<Edit>,
}

impl<'s> EditLog<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            edits: Vec::new(),
        }
    }

    /// Registers one atomic overwrite of `[start, end)`.
    ///
    /// Operations must arrive in source order and must not overlap.
    pub fn overwrite(&mut self, start: usize, end: usize, replacement: String) {
        debug_assert!(start <= end && end <= self.source.len());
        debug_assert!(self.edits.last().map_or(true, |prev| prev.end <= start));

        self.edits.push(Edit {
            start,
            end,
            replacement,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Applies all recorded edits, producing the final text and the map from
    /// generated positions back to original positions.
    pub fn materialize(self) -> (String, PositionMap) {
        let mut code = String::with_capacity(self.source.len());
        let mut ranges = Vec::with_capacity(self.edits.len() * 2 + 1);
        let mut original_cursor = 0usize;

        for edit in &self.edits {
            if edit.start > original_cursor {
                ranges.push(MappedRange {
                    original_start: original_cursor,
                    original_end: edit.start,
                    generated_start: code.len(),
                    generated_end: code.len() + (edit.start - original_cursor),
                    rewritten: false,
                });
                code.push_str(&self.source[original_cursor..edit.start]);
            }

            let generated_start = code.len();
            code.push_str(&edit.replacement);
            ranges.push(MappedRange {
                original_start: edit.start,
                original_end: edit.end,
                generated_start,
                generated_end: code.len(),
                rewritten: true,
            });

            original_cursor = edit.end;
        }

        if original_cursor < self.source.len() {
            ranges.push(MappedRange {
                original_start: original_cursor,
                original_end: self.source.len(),
                generated_start: code.len(),
                generated_end: code.len() + (self.source.len() - original_cursor),
                rewritten: false,
            });
            code.push_str(&self.source[original_cursor..]);
        }

        (code, PositionMap { ranges })
    }
}

/// One contiguous range of the rewritten text mapped back to the original
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappedRange {
    pub original_start: usize,
    pub original_end: usize,
    pub generated_start: usize,
    pub generated_end: usize,
    /// `false` for text copied verbatim, `true` for an applied overwrite
    pub rewritten: bool,
}

/// Maps offsets in the rewritten text back to offsets in the original text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionMap {
    pub ranges: Vec<MappedRange>,
}

impl PositionMap {
    /// Resolves an offset in the rewritten text to an offset in the original
    /// text. Offsets inside a rewritten range resolve to that range's start.
    pub fn original_offset(&self, generated: usize) -> Option<usize> {
        for range in &self.ranges {
            if generated >= range.generated_start && generated < range.generated_end {
                return Some(if range.rewritten {
                    range.original_start
                } else {
                    range.original_start + (generated - range.generated_start)
                });
            }
        }

        None
    }

    /// Number of rewritten ranges, one per applied overwrite
    pub fn rewrite_count(&self) -> usize {
        self.ranges.iter().filter(|range| range.rewritten).count()
    }
}
