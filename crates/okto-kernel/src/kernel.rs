//! The Kernel: runs Oktolang statements.
//!
//! One kernel is one session: it owns the variable store and the verbose
//! flag, and turns each input line into an [`ExecResult`].
//!
//! ```text
//! line ─► tokenize ─► classify ─► preprocess ─► dispatch ─┬─► builtin
//!                                                         └─► arithmetic
//! ```

use crate::builtins::{self, ExecContext, Verb};
use crate::classify::classify_all;
use crate::host::{Host, Severity};
use crate::interpreter::{EvalError, ExecResult, VariableStore, arith};
use crate::lexer::tokenize;
use crate::preprocess::{Preprocessed, preprocess};
use crate::token::{Token, TokenKind};

/// Configuration for kernel initialization.
#[derive(Debug, Clone, Default)]
pub struct KernelConfig {
    /// Start with verbose diagnostics on.
    pub verbose: bool,
}

impl KernelConfig {
    /// Config with verbose diagnostics switched on.
    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

/// The Kernel: executes Oktolang statements against its own store.
#[derive(Debug, Default)]
pub struct Kernel {
    store: VariableStore,
    verbose: bool,
}

impl Kernel {
    /// Create a new kernel with the given configuration.
    pub fn new(config: KernelConfig) -> Self {
        Self {
            store: VariableStore::new(),
            verbose: config.verbose,
        }
    }

    /// The session's variables.
    pub fn store(&self) -> &VariableStore {
        &self.store
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Execute one line.
    ///
    /// Failures are reported through `host` and returned as
    /// [`ExecResult::Error`]; they never end the session.
    pub fn execute(&mut self, line: &str, host: &mut dyn Host) -> ExecResult {
        let raw = tokenize(line);
        if raw.is_empty() {
            return ExecResult::Continue;
        }
        tracing::debug!(line, tokens = raw.len(), "execute");

        let mut ctx = ExecContext::new(&mut self.store, host, &mut self.verbose);
        if raw[0] == "//" {
            ctx.info("Comment detected. Skipping line...");
            return ExecResult::Continue;
        }

        let tokens = classify_all(raw, ctx.store);
        let Preprocessed {
            tokens,
            diagnostics,
        } = preprocess(tokens, ctx.store);
        for diagnostic in diagnostics {
            ctx.host.report(&diagnostic.to_string(), Severity::Error);
        }

        match dispatch(&tokens, &mut ctx) {
            Ok(result) => result,
            Err(err) => {
                let message = err.to_string();
                tracing::debug!(%message, "statement failed");
                ctx.host.report(&message, Severity::Error);
                ExecResult::Error(message)
            }
        }
    }
}

/// Route a preprocessed statement to a builtin or the arithmetic pathway.
fn dispatch(tokens: &[Token], ctx: &mut ExecContext<'_>) -> Result<ExecResult, EvalError> {
    let Some(first) = tokens.first() else {
        return Ok(ExecResult::Continue);
    };

    if first.is(TokenKind::Function) {
        if let Some(verb) = Verb::from_name(&first.text) {
            ctx.info(format!("Attempting to run function {verb}"));
            return builtins::execute(verb, tokens, ctx);
        }
    }

    if first.is(TokenKind::Variable) {
        ctx.info(format!("Updating variable {}", first.text));
        let value = arith::evaluate(tokens, ctx.store)?;
        ctx.info(format!("{} is now {value}", first.text));
        ctx.store.set(&first.text, value)?;
        return Ok(ExecResult::Continue);
    }

    Err(EvalError::NotFunctionOrVariable(first.text.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;
    use crate::value::Value;

    #[test]
    fn blank_line_continues_silently() {
        let mut kernel = Kernel::default();
        let mut host = MemoryHost::new();
        assert_eq!(kernel.execute("   ", &mut host), ExecResult::Continue);
        assert!(host.output.is_empty());
        assert!(host.diagnostics.is_empty());
    }

    #[test]
    fn comment_line_is_skipped_without_interpolating() {
        let mut kernel = Kernel::default();
        let mut host = MemoryHost::new();
        let result = kernel.execute(r#"// note "${nothing}""#, &mut host);
        assert_eq!(result, ExecResult::Continue);
        assert!(host.diagnostics.is_empty());
    }

    #[test]
    fn unknown_first_token_is_an_error() {
        let mut kernel = Kernel::default();
        let mut host = MemoryHost::new();
        let result = kernel.execute("frobnicate 1", &mut host);
        assert_eq!(
            result,
            ExecResult::Error("frobnicate is not a function or variable".into())
        );
        assert_eq!(host.errors(), vec!["frobnicate is not a function or variable"]);
    }

    #[test]
    fn failed_mutation_leaves_value() {
        let mut kernel = Kernel::default();
        let mut host = MemoryHost::new();
        kernel.execute("int a = 4", &mut host);
        kernel.execute("int b = 0", &mut host);
        assert!(!kernel.execute("a = a / b", &mut host).ok());
        assert_eq!(kernel.store().get("a"), Ok(&Value::Integer(4)));
    }

    #[test]
    fn verbose_config_reports_info() {
        let mut kernel = Kernel::new(KernelConfig::verbose());
        let mut host = MemoryHost::new();
        kernel.execute("int n = 1", &mut host);
        assert!(!host.messages(Severity::Info).is_empty());
    }
}
