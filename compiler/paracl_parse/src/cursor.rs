//! Token cursor.

use paracl_ir::Span;
use paracl_lexer::{Token, TokenKind};

use crate::error::{ParseError, ParseErrorKind};

static EOF: Token = Token {
    kind: TokenKind::Eof,
    span: Span::new(0, 0),
};

/// Position in a token list that always ends with `Eof`.
///
/// Advancing past `Eof` is a no-op, so lookahead never runs off the end.
pub(crate) struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub(crate) fn current(&self) -> &Token {
        self.peek(0)
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Token `n` positions ahead of the current one.
    pub(crate) fn peek(&self, n: usize) -> &Token {
        self.tokens
            .get(self.pos + n)
            .or_else(|| self.tokens.last())
            .unwrap_or(&EOF)
    }

    #[inline]
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub(crate) fn at_eof(&self) -> bool {
        self.check(&TokenKind::Eof)
    }

    /// Move past the current token and return it.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is `kind`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or fail with an error naming it.
    pub(crate) fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.unexpected(&kind.describe()))
        }
    }

    /// Error for the current token when `expected` was wanted.
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.current();
        let kind = if token.kind == TokenKind::Eof {
            ParseErrorKind::UnexpectedEof {
                expected: expected.to_string(),
            }
        } else {
            ParseErrorKind::UnexpectedToken {
                expected: expected.to_string(),
                found: token.kind.describe(),
            }
        };
        ParseError::new(kind, token.span)
    }
}
