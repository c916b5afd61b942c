//! Command implementations for the `paracl` binary.
//!
//! Each command returns a [`DriverError`]; `main` prints it as
//! `error: <message>` and exits with status 1.

mod debug;
mod run;

pub use debug::{dump_file, dump_source, lex_file, lex_source};
pub use run::{parse_run_options, run_file, run_source, RunOptions};

use paracl_eval::EvalError;
use paracl_parse::ParseError;

/// Anything that stops a command.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("{0}")]
    Read(String),
    #[error("{path}:{rendered}")]
    Parse { path: String, rendered: String },
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("{0}")]
    Usage(String),
}

impl DriverError {
    pub fn parse(path: &str, source: &str, err: &ParseError) -> Self {
        DriverError::Parse {
            path: path.to_string(),
            rendered: err.render(source),
        }
    }
}

pub(crate) fn read_file(path: &str) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|e| {
        DriverError::Read(match e.kind() {
            std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
            std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
            _ => format!("error reading '{path}': {e}"),
        })
    })
}

#[cfg(test)]
mod tests;
