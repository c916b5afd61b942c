//! The evaluation visitor.
//!
//! Every node evaluates to an `i32`. Expressions yield their value;
//! statements yield a value too so the visitor has one result type:
//! `Assign` and `Output` yield the value they stored or printed, while
//! `Scope`, `If` and `While` yield 0.

use paracl_ir::{ArithOp, Node, PredOp, VarNode, Visitor};
use paracl_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::errors::{division_by_zero, integer_overflow, loop_budget_exceeded, EvalError, EvalResult};
use crate::input_handler::{stdin_handler, SharedInputHandler};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::store::VarStore;

/// Tree-walking evaluator. One instance is one run: the store persists
/// across calls to [`Evaluator::evaluate`].
pub struct Evaluator {
    store: VarStore,
    print: SharedPrintHandler,
    input: SharedInputHandler,
    /// Maximum number of `while` body executions, across all loops.
    max_iterations: Option<u64>,
    iterations: u64,
}

impl Evaluator {
    /// Evaluator reading stdin and writing stdout, with no loop budget.
    pub fn new() -> Self {
        EvaluatorBuilder::new().build()
    }

    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    /// Run a whole program.
    ///
    /// On error the store keeps every assignment made before the failure.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn evaluate(&mut self, root: &Node) -> Result<(), EvalError> {
        debug!(root = root.kind_name(), "evaluation started");
        match self.eval(root) {
            Ok(_) => {
                debug!(
                    variables = self.store.len(),
                    iterations = self.iterations,
                    "evaluation finished"
                );
                Ok(())
            }
            Err(err) => {
                debug!(error = %err, "evaluation aborted");
                Err(err)
            }
        }
    }

    /// Evaluate a single node.
    pub fn eval(&mut self, node: &Node) -> EvalResult {
        ensure_sufficient_stack(|| node.accept(self))
    }

    pub fn store(&self) -> &VarStore {
        &self.store
    }

    pub fn into_store(self) -> VarStore {
        self.store
    }

    /// Number of `while` body executions so far.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    fn count_iteration(&mut self) -> Result<(), EvalError> {
        self.iterations = self.iterations.saturating_add(1);
        match self.max_iterations {
            Some(budget) if self.iterations > budget => Err(loop_budget_exceeded(budget)),
            _ => Ok(()),
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for Evaluator {
    type Output = EvalResult;

    fn visit_scope(&mut self, first: &Node, second: &Node) -> EvalResult {
        self.eval(first)?;
        self.eval(second)?;
        Ok(0)
    }

    fn visit_if(
        &mut self,
        condition: &Node,
        then_branch: Option<&Node>,
        else_branch: Option<&Node>,
    ) -> EvalResult {
        let taken = self.eval(condition)? != 0;
        trace!(taken, "if");
        let branch = if taken { then_branch } else { else_branch };
        if let Some(branch) = branch {
            self.eval(branch)?;
        }
        Ok(0)
    }

    fn visit_while(&mut self, condition: &Node, body: &Node) -> EvalResult {
        while self.eval(condition)? != 0 {
            self.count_iteration()?;
            trace!(iteration = self.iterations, "while");
            self.eval(body)?;
        }
        Ok(0)
    }

    fn visit_not(&mut self, operand: &Node) -> EvalResult {
        let value = self.eval(operand)?;
        Ok(i32::from(value == 0))
    }

    fn visit_minus(&mut self, operand: &Node) -> EvalResult {
        let value = self.eval(operand)?;
        value.checked_neg().ok_or_else(|| integer_overflow("negation"))
    }

    fn visit_arith(&mut self, op: ArithOp, left: &Node, right: &Node) -> EvalResult {
        let lhs = self.eval(left)?;
        let rhs = self.eval(right)?;
        let result = match op {
            ArithOp::Add => lhs.checked_add(rhs),
            ArithOp::Sub => lhs.checked_sub(rhs),
            ArithOp::Mul => lhs.checked_mul(rhs),
            ArithOp::Div => {
                if rhs == 0 {
                    return Err(division_by_zero());
                }
                lhs.checked_div(rhs)
            }
        };
        result.ok_or_else(|| integer_overflow(op.operation_name()))
    }

    fn visit_pred(&mut self, op: PredOp, left: &Node, right: &Node) -> EvalResult {
        // Both sides always run: `&&` and `||` do not short-circuit.
        let lhs = self.eval(left)?;
        let rhs = self.eval(right)?;
        Ok(op.apply(lhs, rhs))
    }

    fn visit_num(&mut self, value: i32) -> EvalResult {
        Ok(value)
    }

    fn visit_var(&mut self, var: &VarNode) -> EvalResult {
        self.store.get(var.name())
    }

    fn visit_input(&mut self) -> EvalResult {
        let value = self.input.read_int()?;
        trace!(value, "input");
        Ok(value)
    }

    fn visit_output(&mut self, expr: &Node) -> EvalResult {
        let value = self.eval(expr)?;
        self.print.println(&value.to_string());
        Ok(value)
    }

    fn visit_assign(&mut self, expr: &Node, target: &VarNode) -> EvalResult {
        let value = self.eval(expr)?;
        debug!(name = target.name(), value, "store");
        self.store.set(target.name(), value);
        Ok(value)
    }
}

/// Builder for [`Evaluator`].
///
/// Defaults: stdout for `print`, stdin for `?`, no loop budget.
#[derive(Default)]
pub struct EvaluatorBuilder {
    print_handler: Option<SharedPrintHandler>,
    input_handler: Option<SharedInputHandler>,
    max_iterations: Option<u64>,
}

impl EvaluatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn input_handler(mut self, handler: SharedInputHandler) -> Self {
        self.input_handler = Some(handler);
        self
    }

    /// Abort with `LoopBudgetExceeded` once `while` bodies have run more
    /// than `budget` times in total.
    #[must_use]
    pub fn max_iterations(mut self, budget: u64) -> Self {
        self.max_iterations = Some(budget);
        self
    }

    pub fn build(self) -> Evaluator {
        Evaluator {
            store: VarStore::new(),
            print: self.print_handler.unwrap_or_else(stdout_handler),
            input: self.input_handler.unwrap_or_else(stdin_handler),
            max_iterations: self.max_iterations,
            iterations: 0,
        }
    }
}
