//! Expression productions.
//!
//! Binary levels are handled by one loop parameterized by [`Precedence`];
//! assignment is right-associative and recognized by `IDENT '='` lookahead.

use paracl_ir::{ArithOp, Node, PredOp, VarNode};
use paracl_lexer::TokenKind;
use paracl_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

/// Binary precedence levels, loosest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Precedence {
    Or,
    And,
    Equality,
    Relation,
    Additive,
    Multiplicative,
}

impl Precedence {
    /// The next tighter level, `None` below multiplicative (unary follows).
    const fn tighter(self) -> Option<Precedence> {
        match self {
            Self::Or => Some(Self::And),
            Self::And => Some(Self::Equality),
            Self::Equality => Some(Self::Relation),
            Self::Relation => Some(Self::Additive),
            Self::Additive => Some(Self::Multiplicative),
            Self::Multiplicative => None,
        }
    }

    /// Operator at this level spelled by `kind`, if any.
    fn operator(self, kind: &TokenKind) -> Option<BinaryOp> {
        let op = match (self, kind) {
            (Self::Or, TokenKind::OrOr) => BinaryOp::Pred(PredOp::Or),
            (Self::And, TokenKind::AndAnd) => BinaryOp::Pred(PredOp::And),
            (Self::Equality, TokenKind::EqEq) => BinaryOp::Pred(PredOp::Eq),
            (Self::Equality, TokenKind::NotEq) => BinaryOp::Pred(PredOp::NotEq),
            (Self::Relation, TokenKind::Lt) => BinaryOp::Pred(PredOp::Lt),
            (Self::Relation, TokenKind::LtEq) => BinaryOp::Pred(PredOp::LtEq),
            (Self::Relation, TokenKind::Gt) => BinaryOp::Pred(PredOp::Gt),
            (Self::Relation, TokenKind::GtEq) => BinaryOp::Pred(PredOp::GtEq),
            (Self::Additive, TokenKind::Plus) => BinaryOp::Arith(ArithOp::Add),
            (Self::Additive, TokenKind::Minus) => BinaryOp::Arith(ArithOp::Sub),
            (Self::Multiplicative, TokenKind::Star) => BinaryOp::Arith(ArithOp::Mul),
            (Self::Multiplicative, TokenKind::Slash) => BinaryOp::Arith(ArithOp::Div),
            _ => return None,
        };
        Some(op)
    }
}

#[derive(Copy, Clone, Debug)]
enum BinaryOp {
    Arith(ArithOp),
    Pred(PredOp),
}

impl BinaryOp {
    fn build(self, left: Node, right: Node) -> Node {
        match self {
            BinaryOp::Arith(op) => Node::arith(op, left, right),
            BinaryOp::Pred(op) => Node::pred(op, left, right),
        }
    }
}

impl Parser {
    pub(crate) fn parse_expr(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| {
            let is_assignment = matches!(self.cursor.current_kind(), TokenKind::Ident(_))
                && self.cursor.peek(1).kind == TokenKind::Assign;
            if is_assignment {
                self.parse_assignment()
            } else {
                self.parse_binary(Precedence::Or)
            }
        })
    }

    fn parse_assignment(&mut self) -> Result<Node, ParseError> {
        let TokenKind::Ident(name) = self.cursor.advance().kind else {
            return Err(self.cursor.unexpected("identifier"));
        };
        self.cursor.expect(&TokenKind::Assign)?;
        let value = self.parse_expr()?;
        Ok(Node::assign(value, VarNode::new(name)))
    }

    fn parse_binary(&mut self, level: Precedence) -> Result<Node, ParseError> {
        let mut left = self.parse_operand(level)?;
        while let Some(op) = level.operator(self.cursor.current_kind()) {
            self.cursor.advance();
            let right = self.parse_operand(level)?;
            left = op.build(left, right);
        }
        Ok(left)
    }

    fn parse_operand(&mut self, level: Precedence) -> Result<Node, ParseError> {
        match level.tighter() {
            Some(next) => self.parse_binary(next),
            None => self.parse_unary(),
        }
    }

    fn parse_unary(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| {
            if self.cursor.eat(&TokenKind::Bang) {
                return Ok(Node::not(self.parse_unary()?));
            }
            if self.cursor.eat(&TokenKind::Minus) {
                return Ok(Node::minus(self.parse_unary()?));
            }
            self.parse_primary()
        })
    }

    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        let node = match self.cursor.current_kind() {
            TokenKind::Int(value) => Node::num(*value),
            TokenKind::Ident(name) => Node::var(name.clone()),
            TokenKind::Question => Node::input(),
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor.expect(&TokenKind::RParen)?;
                return Ok(inner);
            }
            _ => return Err(self.cursor.unexpected("expression")),
        };
        self.cursor.advance();
        Ok(node)
    }
}
