#![allow(clippy::unwrap_used, clippy::expect_used)]

use paracl_eval::{buffer_handler, buffer_input, EvalErrorKind};
use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn run_options_defaults() {
    assert_eq!(
        parse_run_options(&args(&["prog.cl"])).ok(),
        Some(("prog.cl".to_string(), RunOptions::default()))
    );
}

#[test]
fn run_options_flags_in_any_position() {
    let (path, options) =
        parse_run_options(&args(&["--no-store", "prog.cl", "--max-iterations=50"])).unwrap();
    assert_eq!(path, "prog.cl");
    assert_eq!(
        options,
        RunOptions {
            no_store: true,
            max_iterations: Some(50),
        }
    );
}

#[test]
fn run_options_reject_bad_input() {
    let message = |list: &[&str]| parse_run_options(&args(list)).unwrap_err().to_string();
    assert_eq!(message(&[]), "missing file path");
    assert_eq!(message(&["a.cl", "--fast"]), "unknown option '--fast'");
    assert_eq!(message(&["a.cl", "b.cl"]), "unexpected argument 'b.cl'");
    assert_eq!(
        message(&["a.cl", "--max-iterations=lots"]),
        "invalid value for --max-iterations: 'lots'"
    );
}

#[test]
fn run_source_returns_store_and_output() {
    let print = buffer_handler();
    let store = run_source(
        "sum.cl",
        "a = ?; b = ?; print a + b;",
        &RunOptions::default(),
        print.clone(),
        buffer_input("2 40"),
    )
    .unwrap();
    assert_eq!(print.get_output(), "42\n");
    assert_eq!(store.snapshot(), vec![("a", 2), ("b", 40)]);
}

#[test]
fn run_source_labels_parse_errors_with_path() {
    let err = run_source(
        "bad.cl",
        "x = 1\nprint x;",
        &RunOptions::default(),
        buffer_handler(),
        buffer_input(""),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "bad.cl:2:1: expected `;`, found `print`");
}

#[test]
fn run_source_passes_eval_errors_through() {
    let err = run_source(
        "div.cl",
        "print 1 / 0;",
        &RunOptions::default(),
        buffer_handler(),
        buffer_input(""),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        DriverError::Eval(ref e) if e.kind == EvalErrorKind::DivisionByZero
    ));
    assert_eq!(err.to_string(), "division by zero");
}

#[test]
fn run_source_applies_loop_budget() {
    let options = RunOptions {
        no_store: false,
        max_iterations: Some(3),
    };
    let err = run_source(
        "loop.cl",
        "while (1) ;",
        &options,
        buffer_handler(),
        buffer_input(""),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "loop iteration budget of 3 exceeded");
}

#[test]
fn dump_source_renders_tree() {
    assert_eq!(
        dump_source("p.cl", "x = 2;").unwrap(),
        "  Var:x\n=\n  Num:2\n"
    );
    assert_eq!(dump_source("p.cl", "").unwrap(), "");
}

#[test]
fn lex_source_lists_positions() {
    assert_eq!(
        lex_source("p.cl", "x =\n 3;").unwrap(),
        "1:1 identifier `x`\n1:3 `=`\n2:2 integer `3`\n2:3 `;`\n2:4 end of file\n"
    );
}

#[test]
fn lex_source_reports_bad_characters() {
    let err = lex_source("p.cl", "x = @;").unwrap_err();
    assert!(err.to_string().starts_with("p.cl:1:5: "), "{err}");
}

#[test]
fn read_missing_file() {
    let err = read_file("/definitely/not/here.cl").unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot find file '/definitely/not/here.cl'"
    );
}

#[test]
fn run_source_handles_long_flat_program() {
    let mut source = String::from("x = 0;\n");
    source.push_str(&"x = x + 1;\n".repeat(300_000));
    source.push_str("print x;\n");

    let print = buffer_handler();
    let store = run_source(
        "long.cl",
        &source,
        &RunOptions::default(),
        print.clone(),
        buffer_input(""),
    )
    .unwrap();
    assert_eq!(print.get_output(), "300000\n");
    assert_eq!(store.snapshot(), vec![("x", 300_000)]);
}
