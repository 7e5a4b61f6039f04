//! Error definitions for the rewriting engine

use csslit_core::error::{Severity, SeverityLevel};
use csslit_css::CssError;

/// Width, in characters, of the static-text preview carried by diagnostics
const PREVIEW_LEN: usize = 50;

#[derive(Debug)]
pub struct RewriteError {
    /// Offsets of the owning literal in the original text
    pub start: usize,
    pub end: usize,
    pub kind: RewriteErrorKind,
}

#[derive(Debug)]
pub enum RewriteErrorKind {
    /// The transformer rejected the literal's static CSS
    TransformFailed {
        preview: String,
        css_errors: Vec<CssError>,
    },

    /// The transformer recovered from CSS parse errors; the rewrite was
    /// still applied, but the recovered output may have dropped the
    /// malformed part
    TransformRecovered {
        preview: String,
        css_errors: Vec<CssError>,
    },

    /// The static text does not look like CSS and was not transformed
    NotCss { preview: String },

    /// The interpolation placeholders could not be matched up with the
    /// transformer output
    PlaceholderMismatch { preview: String },
}

impl Severity for RewriteError {
    fn get_severity(&self) -> SeverityLevel {
        match &self.kind {
            // Coarse all-or-nothing policy: these discard the owning
            // file's pass
            RewriteErrorKind::TransformFailed { .. }
            | RewriteErrorKind::NotCss { .. }
            | RewriteErrorKind::PlaceholderMismatch { .. } => SeverityLevel::UnrecoverableError,

            RewriteErrorKind::TransformRecovered { .. } => SeverityLevel::RecoverableError,
        }
    }
}

impl std::fmt::Display for RewriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// First [`PREVIEW_LEN`] characters of the offending static text
pub(crate) fn preview(text: &str) -> String {
    let trimmed = text.trim();
    let mut out = String::new();

    for (taken, ch) in trimmed.chars().enumerate() {
        if taken == PREVIEW_LEN {
            out.push_str("...");
            break;
        }
        out.push(ch);
    }

    out
}
