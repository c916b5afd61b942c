//! Evaluator behavior on hand-built trees.

use paracl_ir::{ArithOp, Node, PredOp, VarNode};
use pretty_assertions::assert_eq;

use crate::{buffer_handler, buffer_input, silent_handler, EvalErrorKind, Evaluator};

fn evaluator_with_input(input: &str) -> Evaluator {
    Evaluator::builder()
        .print_handler(silent_handler())
        .input_handler(buffer_input(input))
        .build()
}

fn assign(name: &str, expr: Node) -> Node {
    Node::assign(expr, VarNode::new(name))
}

#[test]
fn num_yields_its_value() {
    let mut ev = evaluator_with_input("");
    assert_eq!(ev.eval(&Node::num(-42)), Ok(-42));
}

#[test]
fn assign_yields_assigned_value() {
    let mut ev = evaluator_with_input("");
    assert_eq!(ev.eval(&assign("x", Node::num(9))), Ok(9));
    assert_eq!(ev.store().get("x"), Ok(9));
}

#[test]
fn output_yields_printed_value() {
    let print = buffer_handler();
    let mut ev = Evaluator::builder()
        .print_handler(print.clone())
        .input_handler(buffer_input(""))
        .build();
    assert_eq!(ev.eval(&Node::output(Node::num(3))), Ok(3));
    assert_eq!(print.get_output(), "3\n");
}

#[test]
fn control_nodes_yield_zero() {
    let mut ev = evaluator_with_input("");
    let scope = Node::scope(Node::num(1), Node::num(2));
    let branch = Node::if_else(Node::num(1), Some(Node::num(5)), None);
    let never = Node::while_loop(Node::num(0), Node::num(5));
    assert_eq!(ev.eval(&scope), Ok(0));
    assert_eq!(ev.eval(&branch), Ok(0));
    assert_eq!(ev.eval(&never), Ok(0));
}

#[test]
fn scope_runs_first_then_second() {
    let print = buffer_handler();
    let mut ev = Evaluator::builder()
        .print_handler(print.clone())
        .input_handler(buffer_input(""))
        .build();
    let program = Node::scope(
        assign("x", Node::num(1)),
        Node::output(Node::arith(ArithOp::Add, Node::var("x"), Node::num(1))),
    );
    assert_eq!(ev.evaluate(&program), Ok(()));
    assert_eq!(print.get_output(), "2\n");
}

#[test]
fn and_evaluates_right_side_when_left_is_false() {
    // 0 && (y = ?): the input must still be consumed and y assigned.
    let mut ev = evaluator_with_input("8");
    let expr = Node::pred(PredOp::And, Node::num(0), assign("y", Node::input()));
    assert_eq!(ev.eval(&expr), Ok(0));
    assert_eq!(ev.store().get("y"), Ok(8));
}

#[test]
fn or_evaluates_right_side_when_left_is_true() {
    let mut ev = evaluator_with_input("");
    let expr = Node::pred(PredOp::Or, Node::num(1), assign("z", Node::num(4)));
    assert_eq!(ev.eval(&expr), Ok(1));
    assert_eq!(ev.store().get("z"), Ok(4));
}

#[test]
fn operands_evaluate_left_to_right() {
    let mut ev = evaluator_with_input("10 3");
    let expr = Node::arith(ArithOp::Sub, Node::input(), Node::input());
    assert_eq!(ev.eval(&expr), Ok(7));
}

#[test]
fn if_condition_is_evaluated_once() {
    // The condition reads input; a second evaluation would exhaust it.
    let mut ev = evaluator_with_input("0");
    let program = Node::if_else(
        Node::input(),
        Some(assign("t", Node::num(1))),
        Some(assign("e", Node::num(1))),
    );
    assert_eq!(ev.evaluate(&program), Ok(()));
    assert!(!ev.store().contains("t"));
    assert_eq!(ev.store().get("e"), Ok(1));
}

#[test]
fn if_with_both_branches_absent() {
    let mut ev = evaluator_with_input("1");
    assert_eq!(ev.eval(&Node::if_else(Node::input(), None, None)), Ok(0));
}

#[test]
fn not_normalizes_to_zero_or_one() {
    let mut ev = evaluator_with_input("");
    assert_eq!(ev.eval(&Node::not(Node::num(-3))), Ok(0));
    assert_eq!(ev.eval(&Node::not(Node::num(0))), Ok(1));
}

#[test]
fn minus_negates() {
    let mut ev = evaluator_with_input("");
    assert_eq!(ev.eval(&Node::minus(Node::num(6))), Ok(-6));
    assert_eq!(ev.eval(&Node::minus(Node::num(i32::MAX))), Ok(-i32::MAX));
}

#[test]
fn comparisons() {
    let mut ev = evaluator_with_input("");
    let cases = [
        (PredOp::Gt, 2, 1, 1),
        (PredOp::GtEq, 1, 1, 1),
        (PredOp::Lt, 2, 1, 0),
        (PredOp::LtEq, 3, 2, 0),
        (PredOp::Eq, 4, 4, 1),
        (PredOp::NotEq, 4, 4, 0),
    ];
    for (op, l, r, expected) in cases {
        let expr = Node::pred(op, Node::num(l), Node::num(r));
        assert_eq!(ev.eval(&expr), Ok(expected), "{l} {op} {r}");
    }
}

#[test]
fn separate_evaluators_have_separate_stores() {
    let mut first = evaluator_with_input("");
    let mut second = evaluator_with_input("");
    assert_eq!(first.evaluate(&assign("x", Node::num(1))), Ok(()));
    assert_eq!(
        second.eval(&Node::var("x")).map_err(|e| e.kind),
        Err(EvalErrorKind::UndefinedVariable {
            name: "x".to_string()
        })
    );
}

#[test]
fn store_persists_across_evaluate_calls() {
    let mut ev = evaluator_with_input("");
    assert_eq!(ev.evaluate(&assign("x", Node::num(2))), Ok(()));
    assert_eq!(
        ev.evaluate(&assign("x", Node::arith(ArithOp::Mul, Node::var("x"), Node::num(5)))),
        Ok(())
    );
    assert_eq!(ev.into_store().get("x"), Ok(10));
}

#[test]
fn iterations_are_counted() {
    let mut ev = evaluator_with_input("");
    let program = Node::scope(
        assign("i", Node::num(0)),
        Node::while_loop(
            Node::pred(PredOp::Lt, Node::var("i"), Node::num(4)),
            assign("i", Node::arith(ArithOp::Add, Node::var("i"), Node::num(1))),
        ),
    );
    assert_eq!(ev.evaluate(&program), Ok(()));
    assert_eq!(ev.iterations(), 4);
}

#[test]
fn deeply_nested_tree_does_not_overflow_stack() {
    let mut expr = Node::num(11);
    for _ in 0..200_000 {
        expr = Node::minus(expr);
    }
    let mut ev = evaluator_with_input("");
    assert_eq!(ev.eval(&expr), Ok(11));
}

#[test]
fn top_level_evaluate_returns_store() {
    let store = crate::evaluate(&assign("k", Node::num(3))).unwrap();
    assert_eq!(store.snapshot(), vec![("k", 3)]);
}
