//! The main public crate of the `csslit` project.
//!
//! `csslit` rewrites `css` tagged template literals embedded in JS/TS-like
//! source text: each literal is split into static CSS and dynamic `${...}`
//! segments, the static CSS is minified, the dynamic segments are kept
//! byte-for-byte, and the rebuilt literal is spliced back into the file with
//! a position map for the host build pipeline.
//!
//! ```
//! use csslit::{RewriteOptions, Rewriter};
//!
//! let source = "const styles = css`.container { display: flex; padding: 20px; }`;";
//!
//! let rewriter = Rewriter::new(RewriteOptions::default()).unwrap();
//!
//! let mut errors = Vec::new();
//! let result = rewriter.rewrite(source, "src/components/Button.ts", &mut errors);
//!
//! if let Some(result) = result {
//!     assert!(result.code.contains(".container{display:flex;padding:20px}"));
//! }
//! ```

mod error;
mod filter;
mod locator;
mod options;
mod segments;
mod splice;

pub use csslit_core::{Segment, SegmentKind, TaggedLiteral};
pub use csslit_css::CssTransformOptions;
pub use error::{RewriteError, RewriteErrorKind};
pub use filter::FileFilter;
pub use locator::LiteralLocator;
pub use options::{RewriteOptions, DEFAULT_INCLUDE};
pub use segments::{looks_like_css, rewrite_literal, split_literal, Outcome};
pub use splice::{Edit, EditLog, MappedRange, PositionMap};

use csslit_core::error::Severity;

/// The rewritten file: the full reassembled text and the map translating
/// positions in `code` back to positions in the original text
pub struct RewriteResult {
    pub code: String,
    pub map: PositionMap,
}

/// Per-file rewriter with a compiled inclusion filter.
///
/// Holds no per-file state: one instance may serve any number of files, and
/// different files can be processed on separate workers without
/// coordination.
pub struct Rewriter {
    filter: FileFilter,
    css: CssTransformOptions,
}

impl Rewriter {
    pub fn new(options: RewriteOptions) -> Result<Self, globset::Error> {
        Ok(Self {
            filter: FileFilter::new(&options.include, &options.exclude)?,
            css: options.css,
        })
    }

    /// Rewrites one file's source text.
    ///
    /// `None` means the file needs no modification: it is not included, it
    /// contains no tagged literals, nothing actually changed, or the whole
    /// pass was discarded because a literal was rejected or failed to
    /// transform. Diagnostics for the latter two land in `errors`.
    pub fn rewrite(
        &self,
        source: &str,
        filename: &str,
        errors: &mut Vec<RewriteError>,
    ) -> Option<RewriteResult> {
        if !self.filter.is_included(filename) {
            return None;
        }

        let error_watermark = errors.len();
        let mut log = EditLog::new(source);

        for literal in LiteralLocator::new(source) {
            let segments = split_literal(&literal);
            match rewrite_literal(&literal, &segments, &self.css, errors) {
                Outcome::Rewritten(replacement) => {
                    log.overwrite(literal.start, literal.end, replacement);
                }
                // Diagnostics for rejected and failed literals are already
                // recorded; keep scanning so one pass reports all of them
                Outcome::Unchanged | Outcome::Rejected | Outcome::Failed => {}
            }
        }

        // All-or-nothing: a single rejected or failed literal discards the
        // file, no partial rewrite is ever emitted
        if errors[error_watermark..]
            .iter()
            .any(Severity::is_unrecoverable_error)
        {
            return None;
        }

        if log.is_empty() {
            return None;
        }

        let (code, map) = log.materialize();
        Some(RewriteResult { code, map })
    }
}
