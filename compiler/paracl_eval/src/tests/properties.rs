use paracl_ir::{ArithOp, Node, PredOp, VarNode};
use proptest::prelude::*;

use crate::{buffer_input, silent_handler, EvalErrorKind, Evaluator};

fn evaluator() -> Evaluator {
    Evaluator::builder()
        .print_handler(silent_handler())
        .input_handler(buffer_input(""))
        .build()
}

fn arith(op: ArithOp, l: i32, r: i32) -> Result<i32, EvalErrorKind> {
    evaluator()
        .eval(&Node::arith(op, Node::num(l), Node::num(r)))
        .map_err(|e| e.kind)
}

proptest! {
    #[test]
    fn num_evaluates_to_itself(n in any::<i32>()) {
        prop_assert_eq!(evaluator().eval(&Node::num(n)), Ok(n));
    }

    #[test]
    fn read_after_write(n in any::<i32>(), name in "[a-z_][a-z0-9_]{0,8}") {
        let mut ev = evaluator();
        let program = Node::scope(
            Node::assign(Node::num(n), VarNode::new(name.as_str())),
            Node::var(name.as_str()),
        );
        prop_assert_eq!(ev.evaluate(&program), Ok(()));
        prop_assert_eq!(ev.store().get(&name), Ok(n));
    }

    #[test]
    fn division_matches_checked_div(l in any::<i32>(), r in any::<i32>()) {
        let result = arith(ArithOp::Div, l, r);
        if r == 0 {
            prop_assert_eq!(result, Err(EvalErrorKind::DivisionByZero));
        } else if let Some(q) = l.checked_div(r) {
            prop_assert_eq!(result, Ok(q));
        } else {
            prop_assert_eq!(result, Err(EvalErrorKind::IntegerOverflow { operation: "division" }));
        }
    }

    #[test]
    fn addition_matches_checked_add(l in any::<i32>(), r in any::<i32>()) {
        let expected = l
            .checked_add(r)
            .ok_or(EvalErrorKind::IntegerOverflow { operation: "addition" });
        prop_assert_eq!(arith(ArithOp::Add, l, r), expected);
    }

    #[test]
    fn predicates_are_boolean(l in any::<i32>(), r in any::<i32>()) {
        for op in [PredOp::Gt, PredOp::GtEq, PredOp::Lt, PredOp::LtEq,
                   PredOp::Eq, PredOp::NotEq, PredOp::And, PredOp::Or] {
            let value = evaluator()
                .eval(&Node::pred(op, Node::num(l), Node::num(r)))
                .unwrap();
            prop_assert!(value == 0 || value == 1);
        }
    }
}
