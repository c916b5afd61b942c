//! Lexer for ParaCL source text.
//!
//! Built on `logos`: [`RawToken`] is the generated DFA, [`lex`] converts its
//! output into owned [`Token`]s with spans, parsing integer literals and
//! reporting characters outside the language.
//!
//! Whitespace and `//` line comments are skipped. The token list always ends
//! with a single [`TokenKind::Eof`].

mod token;

use logos::Logos;
use paracl_ir::Span;

pub use token::{Token, TokenKind};

/// Raw token from logos, before literal conversion.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"([ \t\r\n\f]+|//[^\n]*)")]
enum RawToken {
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("print")]
    Print,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[regex(r"[0-9]+")]
    Int,

    #[token("?")]
    Question,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Assign,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("!")]
    Bang,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
}

/// Error produced while lexing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unexpected character `{ch}`")]
    UnexpectedChar { ch: char, span: Span },
    #[error("integer literal `{literal}` does not fit in 32 bits")]
    IntegerTooLarge { literal: String, span: Span },
}

impl LexError {
    /// Location of the offending text.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { span, .. } | LexError::IntegerTooLarge { span, .. } => *span,
        }
    }
}

/// Lex `source` into tokens, stopping at the first error.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut raw = RawToken::lexer(source);

    while let Some(result) = raw.next() {
        let span = Span::from_range(raw.span());
        let slice = raw.slice();
        let kind = match result {
            Ok(token) => convert(token, slice, span)?,
            Err(()) => {
                let ch = slice.chars().next().unwrap_or('\u{fffd}');
                return Err(LexError::UnexpectedChar { ch, span });
            }
        };
        tokens.push(Token::new(kind, span));
    }

    let end = u32::try_from(source.len()).unwrap_or(u32::MAX);
    tokens.push(Token::new(TokenKind::Eof, Span::point(end)));
    Ok(tokens)
}

fn convert(raw: RawToken, slice: &str, span: Span) -> Result<TokenKind, LexError> {
    let kind = match raw {
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::While => TokenKind::While,
        RawToken::Print => TokenKind::Print,
        RawToken::Ident => TokenKind::Ident(slice.into()),
        RawToken::Int => {
            let value = slice.parse().map_err(|_| LexError::IntegerTooLarge {
                literal: slice.to_string(),
                span,
            })?;
            TokenKind::Int(value)
        }
        RawToken::Question => TokenKind::Question,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Assign => TokenKind::Assign,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::AndAnd => TokenKind::AndAnd,
        RawToken::OrOr => TokenKind::OrOr,
        RawToken::Bang => TokenKind::Bang,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Semicolon => TokenKind::Semicolon,
    };
    Ok(kind)
}
