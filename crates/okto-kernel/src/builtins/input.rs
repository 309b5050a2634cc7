//! in: read a line from the host.

use crate::interpreter::{EvalError, ExecResult};
use crate::token::{Token, TokenKind};
use crate::value::Value;

use super::ExecContext;

/// `in [<string-prompt>]`: yields the line read as a string value.
pub fn read(tokens: &[Token], ctx: &mut ExecContext<'_>) -> Result<ExecResult, EvalError> {
    let line = read_line(tokens.get(1..).unwrap_or_default(), ctx)?;
    Ok(ExecResult::Value(Value::String(line)))
}

/// Shared by `in` and declarations of the form `str x = in "prompt"`.
///
/// `args` are the tokens after `in`; only the first (the prompt) is used.
pub(crate) fn read_line(args: &[Token], ctx: &mut ExecContext<'_>) -> Result<String, EvalError> {
    ctx.info("In function run");
    if let Some(prompt) = args.first() {
        if !prompt.is(TokenKind::StringLiteral) {
            return Err(EvalError::InPrompt(prompt.kind));
        }
        ctx.host.write_prompt(&prompt.text);
    }
    let line = ctx
        .host
        .read_line()
        .map_err(EvalError::Input)?
        .ok_or(EvalError::InputClosed)?;
    ctx.info(format!("Inputted {line}"));
    Ok(line)
}
