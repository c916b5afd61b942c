//! Parse error types.

use paracl_ir::Span;
use paracl_lexer::LexError;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error("expected {expected}, found end of file")]
    UnexpectedEof { expected: String },
    #[error(transparent)]
    Lex(LexError),
}

/// A parse error with the location it was detected at.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    /// Format as `line:column: message` against the parsed source.
    pub fn render(&self, source: &str) -> String {
        let (line, column) = self.span.line_col(source);
        format!("{line}:{column}: {}", self.kind)
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        let span = err.span();
        ParseError::new(ParseErrorKind::Lex(err), span)
    }
}
