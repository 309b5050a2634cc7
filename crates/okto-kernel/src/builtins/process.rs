//! exit, run: session termination and external commands.

use crate::classify::{NumberLiteral, number_literal};
use crate::interpreter::{EvalError, ExecResult};
use crate::token::{Token, TokenKind};

use super::ExecContext;

/// `exit [<int>]`: end the session, by default with code 0.
pub fn exit(tokens: &[Token], ctx: &mut ExecContext<'_>) -> Result<ExecResult, EvalError> {
    ctx.info("Exit function run");
    let Some(arg) = tokens.get(1) else {
        return Ok(ExecResult::Exit(0));
    };
    if !arg.is(TokenKind::IntLiteral) {
        return Err(EvalError::ExitArgument(arg.kind));
    }
    let code = match number_literal(&arg.text) {
        Some(NumberLiteral::Int(code)) => i32::try_from(code).ok(),
        _ => None,
    };
    code.map(ExecResult::Exit)
        .ok_or_else(|| EvalError::ExitOutOfRange(arg.text.clone()))
}

/// `run <string>`: hand the string to the host and wait for it.
///
/// The exit status is only logged; it does not affect the statement.
pub fn run(tokens: &[Token], ctx: &mut ExecContext<'_>) -> Result<ExecResult, EvalError> {
    ctx.info("Run function run");
    let arg = tokens.get(1).ok_or(EvalError::MissingArgument { verb: "run" })?;
    if !arg.is(TokenKind::StringLiteral) {
        return Err(EvalError::RunArgument(arg.kind));
    }
    let status = ctx
        .host
        .execute_external(&arg.text)
        .map_err(EvalError::External)?;
    ctx.info(format!("Command exited with status {status}"));
    Ok(ExecResult::Continue)
}
