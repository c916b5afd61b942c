//! Indented debug rendering of a syntax tree.
//!
//! The dump is a read-only walk: it never evaluates anything, so `Input` is
//! printed as a label and no variable is looked up.

use paracl_stack::ensure_sufficient_stack;

use crate::ast::{Node, VarNode};
use crate::operators::{ArithOp, PredOp};
use crate::visitor::Visitor;

/// Columns added per nesting level.
const INDENT_STEP: usize = 2;

/// Visitor that renders one node per line into a `String`.
#[derive(Default)]
pub struct DumpVisitor {
    indent: usize,
    out: String,
}

impl DumpVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the visitor, returning everything rendered so far.
    pub fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, text: &str) {
        self.out.extend(std::iter::repeat(' ').take(self.indent));
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Render `node` one level deeper than the current line.
    fn nested(&mut self, node: &Node) {
        self.indent += INDENT_STEP;
        ensure_sufficient_stack(|| node.accept(self));
        self.indent -= INDENT_STEP;
    }

    fn binary(&mut self, symbol: &str, left: &Node, right: &Node) {
        self.nested(left);
        self.line(symbol);
        self.nested(right);
    }
}

impl Visitor for DumpVisitor {
    type Output = ();

    fn visit_scope(&mut self, first: &Node, second: &Node) {
        self.line("Scope:");
        // Statement sequences stay at the same depth.
        ensure_sufficient_stack(|| {
            first.accept(self);
            second.accept(self);
        });
    }

    fn visit_if(&mut self, condition: &Node, then_branch: Option<&Node>, else_branch: Option<&Node>) {
        self.line("If:");
        self.nested(condition);
        if let Some(branch) = then_branch {
            self.indent += INDENT_STEP;
            self.line("Then:");
            self.nested(branch);
            self.indent -= INDENT_STEP;
        }
        if let Some(branch) = else_branch {
            self.indent += INDENT_STEP;
            self.line("Else:");
            self.nested(branch);
            self.indent -= INDENT_STEP;
        }
    }

    fn visit_while(&mut self, condition: &Node, body: &Node) {
        self.line("While:");
        self.nested(condition);
        self.nested(body);
    }

    fn visit_not(&mut self, operand: &Node) {
        self.line("!");
        self.nested(operand);
    }

    fn visit_minus(&mut self, operand: &Node) {
        self.line("-");
        self.nested(operand);
    }

    fn visit_arith(&mut self, op: ArithOp, left: &Node, right: &Node) {
        self.binary(op.as_symbol(), left, right);
    }

    fn visit_pred(&mut self, op: PredOp, left: &Node, right: &Node) {
        self.binary(op.as_symbol(), left, right);
    }

    fn visit_num(&mut self, value: i32) {
        self.line(&format!("Num:{value}"));
    }

    fn visit_var(&mut self, var: &VarNode) {
        self.line(&format!("Var:{}", var.name()));
    }

    fn visit_input(&mut self) {
        self.line("Input:");
    }

    fn visit_output(&mut self, expr: &Node) {
        self.line("Output:");
        self.nested(expr);
    }

    fn visit_assign(&mut self, expr: &Node, target: &VarNode) {
        self.indent += INDENT_STEP;
        self.line(&format!("Var:{}", target.name()));
        self.indent -= INDENT_STEP;
        self.line("=");
        self.nested(expr);
    }
}

/// Render `node` with [`DumpVisitor`].
pub fn dump(node: &Node) -> String {
    let mut visitor = DumpVisitor::new();
    node.accept(&mut visitor);
    visitor.finish()
}
