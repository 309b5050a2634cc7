//! Builtin verbs for Oktolang.
//!
//! The verb set is closed: [`Verb`] lists every command the first token of
//! a statement can name, and the classifier uses the same list.

mod context;
mod declare;
mod input;
mod output;
mod process;

use std::fmt;

pub use context::ExecContext;
pub use output::HELP_TEXT;

use crate::interpreter::{EvalError, ExecResult};
use crate::token::Token;
use crate::value::ValueKind;

/// A builtin verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Log,
    Exit,
    Type,
    Run,
    In,
    Str,
    Int,
    Dec,
    Bool,
    Verbose,
    Help,
}

impl Verb {
    pub const ALL: [Verb; 11] = [
        Verb::Log,
        Verb::Exit,
        Verb::Type,
        Verb::Run,
        Verb::In,
        Verb::Str,
        Verb::Int,
        Verb::Dec,
        Verb::Bool,
        Verb::Verbose,
        Verb::Help,
    ];

    /// Look up a verb by its source spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|verb| verb.name() == name)
    }

    /// Source spelling of the verb.
    pub fn name(self) -> &'static str {
        match self {
            Verb::Log => "log",
            Verb::Exit => "exit",
            Verb::Type => "type",
            Verb::Run => "run",
            Verb::In => "in",
            Verb::Str => "str",
            Verb::Int => "int",
            Verb::Dec => "dec",
            Verb::Bool => "bool",
            Verb::Verbose => "verbose",
            Verb::Help => "help",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run a builtin. `tokens[0]` is the verb itself.
pub fn execute(
    verb: Verb,
    tokens: &[Token],
    ctx: &mut ExecContext<'_>,
) -> Result<ExecResult, EvalError> {
    match verb {
        Verb::Log => output::log(tokens, ctx),
        Verb::Type => output::type_of(tokens, ctx),
        Verb::Help => output::help(ctx),
        Verb::Exit => process::exit(tokens, ctx),
        Verb::Run => process::run(tokens, ctx),
        Verb::In => input::read(tokens, ctx),
        Verb::Str => declare::declare(ValueKind::String, tokens, ctx),
        Verb::Int => declare::declare(ValueKind::Integer, tokens, ctx),
        Verb::Dec => declare::declare(ValueKind::Decimal, tokens, ctx),
        Verb::Bool => declare::declare(ValueKind::Boolean, tokens, ctx),
        Verb::Verbose => {
            ctx.info("Verbose mode disabled");
            ctx.toggle_verbose();
            ctx.info("Verbose mode enabled");
            Ok(ExecResult::Continue)
        }
    }
}
