//! Where `?` reads from.
//!
//! Input is a stream of whitespace-separated tokens. Each `?` consumes one
//! token and parses it as a signed 32-bit integer. Line breaks carry no
//! meaning, so `1 2` on one line and `1\n2` read the same.

use std::collections::VecDeque;
use std::io::BufRead;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::errors::{input_exhausted, input_io, malformed_input, EvalError};

/// Reads tokens from stdin one line at a time, only when a `?` needs one.
#[derive(Default)]
pub struct StdinInputHandler {
    pending: Mutex<VecDeque<String>>,
}

impl StdinInputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_token(&self) -> std::io::Result<Option<String>> {
        let mut pending = self.pending.lock();
        loop {
            if let Some(token) = pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if std::io::stdin().lock().read_line(&mut line)? == 0 {
                return Ok(None);
            }
            pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// Serves tokens from a fixed piece of text.
pub struct BufferInputHandler {
    tokens: Mutex<VecDeque<String>>,
}

impl BufferInputHandler {
    pub fn new(text: &str) -> Self {
        BufferInputHandler {
            tokens: Mutex::new(text.split_whitespace().map(str::to_owned).collect()),
        }
    }

    fn next_token(&self) -> Option<String> {
        self.tokens.lock().pop_front()
    }

    /// Tokens not consumed yet.
    pub fn remaining(&self) -> usize {
        self.tokens.lock().len()
    }
}

/// Input source for an evaluator.
pub enum InputHandler {
    /// Reads from the process's stdin (default).
    Stdin(StdinInputHandler),
    /// Reads from scripted text.
    Buffer(BufferInputHandler),
}

impl InputHandler {
    /// Consume the next token and parse it as an integer.
    ///
    /// End of input is [`EvalErrorKind::InputExhausted`]; a token that is not
    /// an `i32` is [`EvalErrorKind::MalformedInput`].
    ///
    /// [`EvalErrorKind::InputExhausted`]: crate::EvalErrorKind::InputExhausted
    /// [`EvalErrorKind::MalformedInput`]: crate::EvalErrorKind::MalformedInput
    pub fn read_int(&self) -> Result<i32, EvalError> {
        let token = match self {
            Self::Stdin(h) => h.next_token().map_err(input_io)?,
            Self::Buffer(h) => h.next_token(),
        };
        let token = token.ok_or_else(input_exhausted)?;
        token.parse::<i32>().map_err(|_| malformed_input(token))
    }
}

/// Input handler shared between the evaluator and its owner.
pub type SharedInputHandler = Arc<InputHandler>;

pub fn stdin_handler() -> SharedInputHandler {
    Arc::new(InputHandler::Stdin(StdinInputHandler::new()))
}

pub fn buffer_input(text: &str) -> SharedInputHandler {
    Arc::new(InputHandler::Buffer(BufferInputHandler::new(text)))
}
