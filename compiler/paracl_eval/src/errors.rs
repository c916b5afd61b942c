//! Evaluation errors.
//!
//! [`EvalErrorKind`] is the structured category; the factory functions below
//! are the construction API used by the evaluator and the I/O handlers.

/// Result of evaluating one node.
pub type EvalResult = Result<i32, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
    #[error("malformed input: `{token}` is not an integer")]
    MalformedInput { token: String },
    #[error("unexpected end of input")]
    InputExhausted,
    #[error("failed to read input: {message}")]
    InputIo { message: String },
    #[error("loop iteration budget of {budget} exceeded")]
    LoopBudgetExceeded { budget: u64 },
}

/// An error that aborted evaluation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

impl EvalError {
    #[inline]
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

// Variable errors

pub fn undefined_variable(name: &str) -> EvalError {
    EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    }
    .into()
}

// Arithmetic errors

pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalErrorKind::IntegerOverflow { operation }.into()
}

// Input errors

pub fn malformed_input(token: impl Into<String>) -> EvalError {
    EvalErrorKind::MalformedInput {
        token: token.into(),
    }
    .into()
}

pub fn input_exhausted() -> EvalError {
    EvalErrorKind::InputExhausted.into()
}

#[allow(clippy::needless_pass_by_value)] // used as `map_err(input_io)`
pub fn input_io(err: std::io::Error) -> EvalError {
    EvalErrorKind::InputIo {
        message: err.to_string(),
    }
    .into()
}

// Budget errors

pub fn loop_budget_exceeded(budget: u64) -> EvalError {
    EvalErrorKind::LoopBudgetExceeded { budget }.into()
}
