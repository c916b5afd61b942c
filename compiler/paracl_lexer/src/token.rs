//! Tokens handed from the lexer to the parser.

use std::fmt;

use paracl_ir::Span;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Int(i32),
    Ident(Box<str>),

    // Keywords
    If,
    Else,
    While,
    Print,

    /// `?`, reads an integer from input.
    Question,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Assign,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    AndAnd,
    OrOr,
    Bang,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,

    Eof,
}

impl TokenKind {
    /// Human-readable description for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Int(value) => format!("integer `{value}`"),
            TokenKind::Ident(name) => format!("identifier `{name}`"),
            TokenKind::Eof => "end of file".to_string(),
            other => format!("`{}`", other.symbol()),
        }
    }

    /// Source spelling of fixed tokens; literals and EOF have none.
    pub const fn symbol(&self) -> &'static str {
        match self {
            TokenKind::Int(_) | TokenKind::Ident(_) | TokenKind::Eof => "",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Print => "print",
            TokenKind::Question => "?",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Assign => "=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            TokenKind::Bang => "!",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Semicolon => ";",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(value) => write!(f, "{value}"),
            TokenKind::Ident(name) => f.write_str(name),
            TokenKind::Eof => f.write_str("<eof>"),
            other => f.write_str(other.symbol()),
        }
    }
}

/// A token with its location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}
