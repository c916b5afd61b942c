//! Binary operator tables.
//!
//! Arithmetic and predicate operators are kept as separate enums because the
//! node model keeps them on separate variants: `Arith` nodes produce
//! arbitrary integers, `Pred` nodes always produce 0 or 1.

use std::fmt;

/// Arithmetic operators carried by `Node::Arith`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    /// Integer division, truncating toward zero.
    Div,
}

impl ArithOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Name used in overflow diagnostics.
    pub const fn operation_name(self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Sub => "subtraction",
            Self::Mul => "multiplication",
            Self::Div => "division",
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Comparison and logical operators carried by `Node::Pred`.
///
/// `And` and `Or` combine two already-evaluated operands; they are not
/// short-circuiting.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PredOp {
    Gt,
    GtEq,
    Lt,
    LtEq,
    Eq,
    NotEq,
    And,
    Or,
}

impl PredOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    /// Apply the operator to two evaluated operands, normalized to 0/1.
    pub const fn apply(self, left: i32, right: i32) -> i32 {
        let result = match self {
            Self::Gt => left > right,
            Self::GtEq => left >= right,
            Self::Lt => left < right,
            Self::LtEq => left <= right,
            Self::Eq => left == right,
            Self::NotEq => left != right,
            Self::And => left != 0 && right != 0,
            Self::Or => left != 0 || right != 0,
        };
        result as i32
    }
}

impl fmt::Display for PredOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
