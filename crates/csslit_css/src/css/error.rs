use csslit_core::error::{Severity, SeverityLevel};
use swc_core::common::{Span, Spanned};
use swc_css_parser::error::{Error as ParseError, ErrorKind as ParseErrorKind};

#[derive(Debug)]
pub struct CssError {
    pub span: Span,
    pub kind: CssErrorKind,
}

#[derive(Debug)]
pub enum CssErrorKind {
    ParseRecoverable(ParseErrorKind),
    ParseUnrecoverable(ParseErrorKind),
}

impl CssError {
    pub fn from_parse_error(from: ParseError, is_recoverable: bool) -> CssError {
        let (span, kind) = *from.into_inner();

        let kind = if is_recoverable {
            CssErrorKind::ParseRecoverable(kind)
        } else {
            CssErrorKind::ParseUnrecoverable(kind)
        };

        CssError { span, kind }
    }
}

impl Severity for CssError {
    fn get_severity(&self) -> SeverityLevel {
        match &self.kind {
            CssErrorKind::ParseRecoverable(_) => SeverityLevel::RecoverableError,
            CssErrorKind::ParseUnrecoverable(_) => SeverityLevel::UnrecoverableError,
        }
    }
}

impl Spanned for CssError {
    fn span(&self) -> swc_core::common::Span {
        self.span
    }
}

impl std::fmt::Display for CssError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
