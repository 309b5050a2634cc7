//! ExecResult: the outcome of executing one statement.
//!
//! Termination is an explicit value here rather than a side effect: only
//! the `exit` builtin produces [`ExecResult::Exit`], and the read loop
//! decides what to do with it.

use crate::value::Value;

/// Outcome of one statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ExecResult {
    /// The statement ran; carry on with the next line.
    #[default]
    Continue,
    /// The statement produced a value (`in` yields the line it read).
    Value(Value),
    /// End the session with this exit code.
    Exit(i32),
    /// The statement failed. The message has already been reported.
    Error(String),
}

impl ExecResult {
    /// True unless the statement failed.
    pub fn ok(&self) -> bool {
        !matches!(self, ExecResult::Error(_))
    }

    /// Exit code if the statement asked to end the session.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ExecResult::Exit(code) => Some(*code),
            _ => None,
        }
    }

    /// The yielded value, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            ExecResult::Value(v) => Some(v),
            _ => None,
        }
    }
}
