//! Debug commands: `dump` and `lex` for inspecting the front end.

use super::{read_file, DriverError};

/// Parse a file and print its tree.
pub fn dump_file(path: &str) -> Result<(), DriverError> {
    let source = read_file(path)?;
    print!("{}", dump_source(path, &source)?);
    Ok(())
}

/// Tree rendering of `source`; empty for an empty program.
pub fn dump_source(path: &str, source: &str) -> Result<String, DriverError> {
    let program =
        paracl_parse::parse(source).map_err(|err| DriverError::parse(path, source, &err))?;
    Ok(program.as_ref().map(paracl_ir::dump).unwrap_or_default())
}

/// Lex a file and print the token stream.
pub fn lex_file(path: &str) -> Result<(), DriverError> {
    let source = read_file(path)?;
    print!("{}", lex_source(path, &source)?);
    Ok(())
}

/// One `line:col kind` line per token, ending with end of file.
pub fn lex_source(path: &str, source: &str) -> Result<String, DriverError> {
    let tokens = paracl_lexer::lex(source)
        .map_err(|err| DriverError::parse(path, source, &err.into()))?;
    Ok(tokens
        .iter()
        .map(|token| {
            let (line, col) = token.span.line_col(source);
            format!("{line}:{col} {}\n", token.kind.describe())
        })
        .collect())
}
