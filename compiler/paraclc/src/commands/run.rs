//! The `run` command: parse and evaluate a ParaCL source file.

use paracl_eval::{
    stdin_handler, stdout_handler, Evaluator, SharedInputHandler, SharedPrintHandler, VarStore,
};
use tracing::debug;

use super::{read_file, DriverError};

/// Options accepted by `paracl run`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Skip printing the final store.
    pub no_store: bool,
    /// Loop iteration budget; `None` runs loops unbounded.
    pub max_iterations: Option<u64>,
}

/// Split `run` arguments into the file path and options.
pub fn parse_run_options(args: &[String]) -> Result<(String, RunOptions), DriverError> {
    let mut options = RunOptions::default();
    let mut path = None;

    for arg in args {
        if arg == "--no-store" {
            options.no_store = true;
        } else if let Some(value) = arg.strip_prefix("--max-iterations=") {
            let budget = value.parse::<u64>().map_err(|_| {
                DriverError::Usage(format!("invalid value for --max-iterations: '{value}'"))
            })?;
            options.max_iterations = Some(budget);
        } else if arg.starts_with('-') {
            return Err(DriverError::Usage(format!("unknown option '{arg}'")));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(DriverError::Usage(format!("unexpected argument '{arg}'")));
        }
    }

    let path = path.ok_or_else(|| DriverError::Usage("missing file path".to_string()))?;
    Ok((path, options))
}

/// Run a file against stdin/stdout and print the final store.
pub fn run_file(path: &str, options: &RunOptions) -> Result<(), DriverError> {
    let source = read_file(path)?;
    let print = stdout_handler();
    let store = run_source(path, &source, options, print.clone(), stdin_handler())?;
    if !options.no_store {
        for (name, value) in store.snapshot() {
            print.println(&format!("{name} = {value}"));
        }
    }
    Ok(())
}

/// Parse and evaluate `source`, returning the final store.
///
/// `path` is only used to label parse errors.
pub fn run_source(
    path: &str,
    source: &str,
    options: &RunOptions,
    print: SharedPrintHandler,
    input: SharedInputHandler,
) -> Result<VarStore, DriverError> {
    let program =
        paracl_parse::parse(source).map_err(|err| DriverError::parse(path, source, &err))?;

    let mut builder = Evaluator::builder().print_handler(print).input_handler(input);
    if let Some(budget) = options.max_iterations {
        builder = builder.max_iterations(budget);
    }
    let mut evaluator = builder.build();

    match &program {
        Some(root) => evaluator.evaluate(root)?,
        None => debug!(path, "empty program"),
    }
    Ok(evaluator.into_store())
}
