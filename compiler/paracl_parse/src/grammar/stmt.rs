//! Statement productions.
//!
//! Statements return `Option<Node>`: `None` stands for "nothing to run"
//! (an empty block or a lone `;`). Callers decide what absence means for
//! them: an `if` drops the branch, a `while` body becomes `0`.

use paracl_ir::Node;
use paracl_lexer::TokenKind;
use paracl_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser {
    /// Parse statements until `end` (not consumed) or end of file.
    pub(crate) fn parse_statements_until(
        &mut self,
        end: &TokenKind,
    ) -> Result<Vec<Node>, ParseError> {
        let mut statements = Vec::new();
        while !self.cursor.check(end) && !self.cursor.at_eof() {
            if let Some(statement) = self.parse_statement()? {
                statements.push(statement);
            }
        }
        Ok(statements)
    }

    fn parse_statement(&mut self) -> Result<Option<Node>, ParseError> {
        ensure_sufficient_stack(|| match self.cursor.current_kind() {
            TokenKind::If => self.parse_if().map(Some),
            TokenKind::While => self.parse_while().map(Some),
            TokenKind::Print => self.parse_print().map(Some),
            TokenKind::LBrace => self.parse_block(),
            TokenKind::Semicolon => {
                self.cursor.advance();
                Ok(None)
            }
            _ => {
                let expr = self.parse_expr()?;
                self.cursor.expect(&TokenKind::Semicolon)?;
                Ok(Some(expr))
            }
        })
    }

    /// `'{' stmt* '}'`, folded into a sequence.
    fn parse_block(&mut self) -> Result<Option<Node>, ParseError> {
        self.cursor.expect(&TokenKind::LBrace)?;
        let statements = self.parse_statements_until(&TokenKind::RBrace)?;
        self.cursor.expect(&TokenKind::RBrace)?;
        Ok(Node::sequence(statements))
    }

    /// Body of `if`/`while`: a block or a single statement.
    fn parse_body(&mut self) -> Result<Option<Node>, ParseError> {
        if self.cursor.check(&TokenKind::LBrace) {
            self.parse_block()
        } else {
            self.parse_statement()
        }
    }

    /// `'(' expr ')'` after `if` / `while`.
    fn parse_condition(&mut self) -> Result<Node, ParseError> {
        self.cursor.expect(&TokenKind::LParen)?;
        let condition = self.parse_expr()?;
        self.cursor.expect(&TokenKind::RParen)?;
        Ok(condition)
    }

    fn parse_if(&mut self) -> Result<Node, ParseError> {
        self.cursor.expect(&TokenKind::If)?;
        let condition = self.parse_condition()?;
        let then_branch = self.parse_body()?;
        let else_branch = if self.cursor.eat(&TokenKind::Else) {
            self.parse_body()?
        } else {
            None
        };
        Ok(Node::if_else(condition, then_branch, else_branch))
    }

    fn parse_while(&mut self) -> Result<Node, ParseError> {
        self.cursor.expect(&TokenKind::While)?;
        let condition = self.parse_condition()?;
        let body = self.parse_body()?.unwrap_or(Node::num(0));
        Ok(Node::while_loop(condition, body))
    }

    fn parse_print(&mut self) -> Result<Node, ParseError> {
        self.cursor.expect(&TokenKind::Print)?;
        let expr = self.parse_expr()?;
        self.cursor.expect(&TokenKind::Semicolon)?;
        Ok(Node::output(expr))
    }
}
