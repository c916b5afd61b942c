use super::*;
use pretty_assertions::assert_eq;

/// Records the order in which variants are visited, recursing left to right.
#[derive(Default)]
struct Trace(Vec<String>);

impl Visitor for Trace {
    type Output = usize;

    fn visit_scope(&mut self, first: &Node, second: &Node) -> usize {
        self.0.push("scope".into());
        first.accept(self) + second.accept(self)
    }

    fn visit_if(
        &mut self,
        condition: &Node,
        then_branch: Option<&Node>,
        else_branch: Option<&Node>,
    ) -> usize {
        self.0.push("if".into());
        let mut count = condition.accept(self);
        if let Some(branch) = then_branch {
            count += branch.accept(self);
        }
        if let Some(branch) = else_branch {
            count += branch.accept(self);
        }
        count
    }

    fn visit_while(&mut self, condition: &Node, body: &Node) -> usize {
        self.0.push("while".into());
        condition.accept(self) + body.accept(self)
    }

    fn visit_not(&mut self, operand: &Node) -> usize {
        self.0.push("not".into());
        operand.accept(self)
    }

    fn visit_minus(&mut self, operand: &Node) -> usize {
        self.0.push("minus".into());
        operand.accept(self)
    }

    fn visit_arith(&mut self, op: ArithOp, left: &Node, right: &Node) -> usize {
        self.0.push(format!("arith {op}"));
        left.accept(self) + right.accept(self)
    }

    fn visit_pred(&mut self, op: PredOp, left: &Node, right: &Node) -> usize {
        self.0.push(format!("pred {op}"));
        left.accept(self) + right.accept(self)
    }

    fn visit_num(&mut self, value: i32) -> usize {
        self.0.push(format!("num {value}"));
        1
    }

    fn visit_var(&mut self, var: &VarNode) -> usize {
        self.0.push(format!("var {}", var.name()));
        1
    }

    fn visit_input(&mut self) -> usize {
        self.0.push("input".into());
        1
    }

    fn visit_output(&mut self, expr: &Node) -> usize {
        self.0.push("output".into());
        expr.accept(self)
    }

    fn visit_assign(&mut self, expr: &Node, target: &VarNode) -> usize {
        self.0.push(format!("assign {}", target.name()));
        expr.accept(self)
    }
}

#[test]
fn accept_dispatches_each_variant_to_its_method() {
    let program = Node::scope(
        Node::assign(Node::minus(Node::input()), VarNode::new("a")),
        Node::while_loop(
            Node::pred(PredOp::Lt, Node::var("a"), Node::num(3)),
            Node::if_else(
                Node::not(Node::var("a")),
                Some(Node::output(Node::arith(
                    ArithOp::Mul,
                    Node::var("a"),
                    Node::num(2),
                ))),
                None,
            ),
        ),
    );

    let mut trace = Trace::default();
    let leaves = program.accept(&mut trace);

    assert_eq!(leaves, 6);
    assert_eq!(
        trace.0,
        vec![
            "scope",
            "assign a",
            "minus",
            "input",
            "while",
            "pred <",
            "var a",
            "num 3",
            "if",
            "not",
            "var a",
            "output",
            "arith *",
            "var a",
            "num 2",
        ]
    );
}

#[test]
fn accept_on_leaf_returns_visitor_output() {
    let mut trace = Trace::default();
    assert_eq!(Node::num(9).accept(&mut trace), 1);
    assert_eq!(trace.0, vec!["num 9"]);
}
