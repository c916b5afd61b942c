//! ParaCL Eval - tree-walking evaluator.
//!
//! # Architecture
//!
//! - [`Evaluator`]: the evaluation visitor; one instance is one run
//! - [`VarStore`]: the run's variables, created on first assignment
//! - [`PrintHandler`] / [`InputHandler`]: where `print` writes and `?` reads
//! - [`EvalError`]: the reason a run aborted
//!
//! Errors propagate through `?` up the visit chain and abort the run. Stores
//! are not rolled back: assignments made before the failure stay visible
//! through [`Evaluator::store`].

pub mod errors;
mod evaluator;
mod input_handler;
mod print_handler;
mod store;

pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use evaluator::{Evaluator, EvaluatorBuilder};
pub use input_handler::{
    buffer_input, stdin_handler, BufferInputHandler, InputHandler, SharedInputHandler,
    StdinInputHandler,
};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandler,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use store::VarStore;

use paracl_ir::Node;

/// Evaluate `root` against stdin/stdout and return the final store.
pub fn evaluate(root: &Node) -> Result<VarStore, EvalError> {
    let mut evaluator = Evaluator::new();
    evaluator.evaluate(root)?;
    Ok(evaluator.into_store())
}

#[cfg(test)]
mod tests;
