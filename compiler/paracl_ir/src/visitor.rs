//! Double-dispatch visitor protocol.
//!
//! A tree walk implements [`Visitor`]; [`Node::accept`] selects the one
//! `visit_*` method matching the node's variant and hands it the node's
//! fields. The trait has no default methods, so every visitor handles every
//! variant, and adding a variant breaks every visitor until it is handled.
//!
//! Visitors decide whether and in which order to recurse by calling
//! `accept` on the children they receive.
//!
//! # Example
//!
//! ```text
//! struct CountInputs(usize);
//!
//! impl Visitor for CountInputs {
//!     type Output = ();
//!     fn visit_input(&mut self) { self.0 += 1; }
//!     fn visit_arith(&mut self, _op: ArithOp, left: &Node, right: &Node) {
//!         left.accept(self);
//!         right.accept(self);
//!     }
//!     // ... one method per remaining variant
//! }
//! ```

use crate::ast::{Node, VarNode};
use crate::operators::{ArithOp, PredOp};

/// One operation per [`Node`] variant.
pub trait Visitor {
    /// Value produced by visiting a node.
    type Output;

    fn visit_scope(&mut self, first: &Node, second: &Node) -> Self::Output;

    fn visit_if(
        &mut self,
        condition: &Node,
        then_branch: Option<&Node>,
        else_branch: Option<&Node>,
    ) -> Self::Output;

    fn visit_while(&mut self, condition: &Node, body: &Node) -> Self::Output;

    fn visit_not(&mut self, operand: &Node) -> Self::Output;

    fn visit_minus(&mut self, operand: &Node) -> Self::Output;

    fn visit_arith(&mut self, op: ArithOp, left: &Node, right: &Node) -> Self::Output;

    fn visit_pred(&mut self, op: PredOp, left: &Node, right: &Node) -> Self::Output;

    fn visit_num(&mut self, value: i32) -> Self::Output;

    fn visit_var(&mut self, var: &VarNode) -> Self::Output;

    fn visit_input(&mut self) -> Self::Output;

    fn visit_output(&mut self, expr: &Node) -> Self::Output;

    /// `target` is only a name: visitors must not treat it as a read.
    fn visit_assign(&mut self, expr: &Node, target: &VarNode) -> Self::Output;
}

impl Node {
    /// Dispatch to the `visit_*` method of `visitor` matching this variant.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Node::Scope { first, second } => visitor.visit_scope(first, second),
            Node::If {
                condition,
                then_branch,
                else_branch,
            } => visitor.visit_if(condition, then_branch.as_deref(), else_branch.as_deref()),
            Node::While { condition, body } => visitor.visit_while(condition, body),
            Node::Not { operand } => visitor.visit_not(operand),
            Node::Minus { operand } => visitor.visit_minus(operand),
            Node::Arith { op, left, right } => visitor.visit_arith(*op, left, right),
            Node::Pred { op, left, right } => visitor.visit_pred(*op, left, right),
            Node::Num(value) => visitor.visit_num(*value),
            Node::Var(var) => visitor.visit_var(var),
            Node::Input => visitor.visit_input(),
            Node::Output { expr } => visitor.visit_output(expr),
            Node::Assign { expr, target } => visitor.visit_assign(expr, target),
        }
    }
}

#[cfg(test)]
mod tests;
