//! Error types for statement evaluation.
//!
//! Every variant is recoverable: the kernel reports it and the statement is
//! abandoned, but the session carries on.

use std::io;

use thiserror::Error;

use crate::token::TokenKind;
use crate::value::ValueKind;

/// Errors from the variable store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("variable {0} is already defined")]
    AlreadyDefined(String),
    #[error("variable {0} not found")]
    NotFound(String),
}

/// Errors raised while evaluating one statement.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error(transparent)]
    Store(#[from] StoreError),

    // Reference errors
    #[error("{0} is not a function or variable")]
    NotFunctionOrVariable(String),
    #[error("variable {0} not found")]
    Unresolved(String),

    // Builtin argument errors
    #[error("{verb} requires an argument")]
    MissingArgument { verb: &'static str },
    #[error("type {0} cannot be logged")]
    CannotLog(TokenKind),
    #[error("exit argument must be an integer, got {0}")]
    ExitArgument(TokenKind),
    #[error("exit code {0} is out of range")]
    ExitOutOfRange(String),
    #[error("run argument must be a string, got {0}")]
    RunArgument(TokenKind),
    #[error("in prompt must be a string, got {0}")]
    InPrompt(TokenKind),
    #[error("no input available")]
    InputClosed,
    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),
    #[error("failed to run command: {0}")]
    External(#[source] io::Error),

    // Declaration errors
    #[error("variable must have a name")]
    MissingName,
    #[error("{name} cannot be a variable name, it is a {kind} token")]
    InvalidName { name: String, kind: TokenKind },
    #[error("when defining a variable, set what the variable means")]
    MissingValue,
    #[error("when defining a variable, use '='")]
    MissingEquals,
    #[error("{name} is declared as {expected}, but its value is a {found} token")]
    WrongLiteral {
        name: String,
        expected: ValueKind,
        found: TokenKind,
    },

    // Arithmetic errors
    #[error("expected an operator")]
    ExpectedOperator,
    #[error("invalid operation")]
    InvalidOperation,
    #[error("operand {0} is not a number")]
    NotANumber(String),
    #[error("{target} variables need {target} operands, got {found}")]
    OperandMismatch { target: ValueKind, found: ValueKind },
    #[error("division by zero")]
    DivisionByZero,
    #[error("arithmetic overflow")]
    Overflow,
}
