//! Recursive descent parser for ParaCL.
//!
//! Consumes the token list from `paracl_lexer` and builds a
//! [`paracl_ir::Node`] tree using only the node-construction API. Statement
//! lists fold into right-nested `Scope` nodes; an empty program parses to
//! `None`.
//!
//! # Grammar
//!
//! ```text
//! program  := stmt*
//! stmt     := 'if' '(' expr ')' body ('else' body)?
//!           | 'while' '(' expr ')' body
//!           | 'print' expr ';'
//!           | '{' stmt* '}'
//!           | expr ';'
//!           | ';'
//! body     := '{' stmt* '}' | stmt
//! expr     := IDENT '=' expr | or
//! or       := and ('||' and)*
//! and      := equality ('&&' equality)*
//! equality := relation (('==' | '!=') relation)*
//! relation := additive (('<' | '<=' | '>' | '>=') additive)*
//! additive := term (('+' | '-') term)*
//! term     := unary (('*' | '/') unary)*
//! unary    := '!' unary | '-' unary | primary
//! primary  := INT | IDENT | '?' | '(' expr ')'
//! ```

mod cursor;
mod error;
mod grammar;

use paracl_ir::Node;

pub use error::{ParseError, ParseErrorKind};

use cursor::Cursor;

/// Parser state over a lexed token list.
pub struct Parser {
    cursor: Cursor,
}

impl Parser {
    pub fn new(tokens: Vec<paracl_lexer::Token>) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse the whole token list as a program.
    pub fn parse_program(&mut self) -> Result<Option<Node>, ParseError> {
        let statements = self.parse_statements_until(&paracl_lexer::TokenKind::Eof)?;
        self.cursor.expect(&paracl_lexer::TokenKind::Eof)?;
        Ok(Node::sequence(statements))
    }
}

/// Lex and parse `source`.
///
/// Returns `Ok(None)` when the program has no statements.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<Option<Node>, ParseError> {
    let tokens = paracl_lexer::lex(source)?;
    tracing::debug!(tokens = tokens.len(), "lexed");
    let program = Parser::new(tokens).parse_program()?;
    tracing::debug!(
        root = program.as_ref().map_or("<empty>", Node::kind_name),
        "parsed"
    );
    Ok(program)
}
