#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::{buffer_handler, buffer_input, EvalError, Evaluator, VarStore};

mod properties;
mod semantics;

/// Outcome of running one program against scripted input.
struct Run {
    result: Result<(), EvalError>,
    output: String,
    store: VarStore,
}

fn run_with(source: &str, input: &str, budget: Option<u64>) -> Run {
    let program = paracl_parse::parse(source).expect("program should parse");
    let print = buffer_handler();
    let mut builder = Evaluator::builder()
        .print_handler(print.clone())
        .input_handler(buffer_input(input));
    if let Some(budget) = budget {
        builder = builder.max_iterations(budget);
    }
    let mut evaluator = builder.build();
    let result = match &program {
        Some(root) => evaluator.evaluate(root),
        None => Ok(()),
    };
    Run {
        result,
        output: print.get_output(),
        store: evaluator.into_store(),
    }
}

fn run(source: &str, input: &str) -> Run {
    run_with(source, input, None)
}

/// Run a program that must succeed and return what it printed.
fn output_of(source: &str, input: &str) -> String {
    let run = run(source, input);
    run.result.expect("program should evaluate");
    run.output
}
