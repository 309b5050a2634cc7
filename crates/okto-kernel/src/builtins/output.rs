//! log, type, help: write to the host's output.

use crate::interpreter::{EvalError, ExecResult};
use crate::token::{Token, TokenKind};

use super::ExecContext;

pub const HELP_TEXT: &str = "\
Oktolang Help
Built In Functions:
 help:    This current help function
 log:     Log something to the command line
 type:    Find the type of the input
 run:     Run a command on the host system
 in:      Read a line of input, with an optional prompt
 str:     Define a string
 int:     Define a whole number
 dec:     Define a number with a decimal place
 bool:    Define true or false
 verbose: Toggle verbose diagnostics
 exit:    Leave, with an optional exit code";

/// `log <value>`: print a string, integer or decimal literal.
///
/// A bare variable name prints the variable's current value.
pub fn log(tokens: &[Token], ctx: &mut ExecContext<'_>) -> Result<ExecResult, EvalError> {
    ctx.info("Log function run");
    let arg = tokens.get(1).ok_or(EvalError::MissingArgument { verb: "log" })?;
    let text = match arg.kind {
        TokenKind::StringLiteral | TokenKind::IntLiteral | TokenKind::DecLiteral => {
            arg.text.clone()
        }
        TokenKind::Variable => ctx.store.get(&arg.text)?.to_string(),
        other => return Err(EvalError::CannotLog(other)),
    };
    ctx.host.write_line(&text);
    Ok(ExecResult::Continue)
}

/// `type <value>`: print the kind of the argument.
pub fn type_of(tokens: &[Token], ctx: &mut ExecContext<'_>) -> Result<ExecResult, EvalError> {
    ctx.info("Type function run");
    let arg = tokens.get(1).ok_or(EvalError::MissingArgument { verb: "type" })?;
    ctx.host.write_line(arg.kind.label());
    Ok(ExecResult::Continue)
}

/// `help`: print the usage summary.
pub fn help(ctx: &mut ExecContext<'_>) -> Result<ExecResult, EvalError> {
    for line in HELP_TEXT.lines() {
        ctx.host.write_line(line);
    }
    Ok(ExecResult::Continue)
}
