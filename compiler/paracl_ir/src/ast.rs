//! The ParaCL syntax tree.
//!
//! One variant per language construct. Children are owned through `Box`, so a
//! tree is built bottom-up and every node has exactly one parent. The
//! associated functions on [`Node`] are the construction API used by the
//! parser; they take children by value and never fail.

use crate::operators::{ArithOp, PredOp};

/// A variable reference.
///
/// Kept as its own type so that `Node::Assign` can require its target to be a
/// variable at the type level.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct VarNode {
    name: Box<str>,
}

impl VarNode {
    pub fn new(name: impl Into<Box<str>>) -> Self {
        VarNode { name: name.into() }
    }

    /// The identifier this node refers to.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A node of the syntax tree.
#[derive(Debug, PartialEq, Eq)]
pub enum Node {
    /// Sequence: `first`, then `second`.
    Scope { first: Box<Node>, second: Box<Node> },
    /// Conditional. Either branch may be absent (an empty block).
    If {
        condition: Box<Node>,
        then_branch: Option<Box<Node>>,
        else_branch: Option<Box<Node>>,
    },
    /// Pre-tested loop.
    While { condition: Box<Node>, body: Box<Node> },
    /// Logical negation, result is 0 or 1.
    Not { operand: Box<Node> },
    /// Arithmetic negation.
    Minus { operand: Box<Node> },
    Arith {
        op: ArithOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Pred {
        op: PredOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// Integer literal.
    Num(i32),
    Var(VarNode),
    /// Read one integer from the input source.
    Input,
    /// Evaluate `expr` and print it on its own line.
    Output { expr: Box<Node> },
    /// Bind the value of `expr` to `target`.
    Assign { expr: Box<Node>, target: VarNode },
}

impl Node {
    pub fn scope(first: Node, second: Node) -> Node {
        Node::Scope {
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    pub fn if_else(condition: Node, then_branch: Option<Node>, else_branch: Option<Node>) -> Node {
        Node::If {
            condition: Box::new(condition),
            then_branch: then_branch.map(Box::new),
            else_branch: else_branch.map(Box::new),
        }
    }

    pub fn while_loop(condition: Node, body: Node) -> Node {
        Node::While {
            condition: Box::new(condition),
            body: Box::new(body),
        }
    }

    pub fn not(operand: Node) -> Node {
        Node::Not {
            operand: Box::new(operand),
        }
    }

    pub fn minus(operand: Node) -> Node {
        Node::Minus {
            operand: Box::new(operand),
        }
    }

    pub fn arith(op: ArithOp, left: Node, right: Node) -> Node {
        Node::Arith {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn pred(op: PredOp, left: Node, right: Node) -> Node {
        Node::Pred {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[inline]
    pub const fn num(value: i32) -> Node {
        Node::Num(value)
    }

    pub fn var(name: impl Into<Box<str>>) -> Node {
        Node::Var(VarNode::new(name))
    }

    #[inline]
    pub const fn input() -> Node {
        Node::Input
    }

    pub fn output(expr: Node) -> Node {
        Node::Output {
            expr: Box::new(expr),
        }
    }

    /// The target is a [`VarNode`], so assigning to anything but a variable
    /// cannot be constructed.
    pub fn assign(expr: Node, target: VarNode) -> Node {
        Node::Assign {
            expr: Box::new(expr),
            target,
        }
    }

    /// Fold statements into right-nested `Scope` nodes, preserving order.
    ///
    /// Returns `None` for an empty list and the statement itself for a
    /// single-element list.
    pub fn sequence(statements: Vec<Node>) -> Option<Node> {
        let mut iter = statements.into_iter().rev();
        let last = iter.next()?;
        Some(iter.fold(last, |rest, stmt| Node::scope(stmt, rest)))
    }

    /// Variants that own no child nodes.
    const fn is_leaf(&self) -> bool {
        matches!(self, Node::Num(_) | Node::Var(_) | Node::Input)
    }

    /// Move every non-leaf child out into `out`, leaving `Input` behind.
    fn detach_children(&mut self, out: &mut Vec<Node>) {
        let mut take = |child: &mut Box<Node>| {
            if !child.is_leaf() {
                out.push(std::mem::replace(&mut **child, Node::Input));
            }
        };
        match self {
            Node::Scope { first, second } => {
                take(first);
                take(second);
            }
            Node::If {
                condition,
                then_branch,
                else_branch,
            } => {
                take(condition);
                if let Some(branch) = then_branch {
                    take(branch);
                }
                if let Some(branch) = else_branch {
                    take(branch);
                }
            }
            Node::While { condition, body } => {
                take(condition);
                take(body);
            }
            Node::Arith { left, right, .. } | Node::Pred { left, right, .. } => {
                take(left);
                take(right);
            }
            Node::Not { operand } | Node::Minus { operand } => take(operand),
            Node::Output { expr } | Node::Assign { expr, .. } => take(expr),
            Node::Num(_) | Node::Var(_) | Node::Input => {}
        }
    }

    /// Short variant name, used in trace output.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Node::Scope { .. } => "scope",
            Node::If { .. } => "if",
            Node::While { .. } => "while",
            Node::Not { .. } => "not",
            Node::Minus { .. } => "minus",
            Node::Arith { .. } => "arith",
            Node::Pred { .. } => "pred",
            Node::Num(_) => "num",
            Node::Var(_) => "var",
            Node::Input => "input",
            Node::Output { .. } => "output",
            Node::Assign { .. } => "assign",
        }
    }
}

/// Frees the tree with an explicit work list. The derived drop recurses once
/// per level, and a long statement list is one level per statement.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}
