//! Execution context for builtins.

use std::fmt::Display;

use crate::host::{Host, Severity};
use crate::interpreter::VariableStore;

/// Execution context passed to builtins and the arithmetic pathway.
///
/// Borrows the kernel's state for the length of one statement.
pub struct ExecContext<'a> {
    /// Variable store.
    pub store: &'a mut VariableStore,
    /// Output, input, external commands and diagnostics.
    pub host: &'a mut dyn Host,
    verbose: &'a mut bool,
}

impl<'a> ExecContext<'a> {
    pub fn new(
        store: &'a mut VariableStore,
        host: &'a mut dyn Host,
        verbose: &'a mut bool,
    ) -> Self {
        Self {
            store,
            host,
            verbose,
        }
    }

    /// Emit a diagnostic that is only shown in verbose mode.
    pub fn info(&mut self, message: impl Display) {
        let message = message.to_string();
        tracing::debug!("{message}");
        if *self.verbose {
            self.host.report(&message, Severity::Info);
        }
    }

    /// Flip verbose mode, returning the new setting.
    pub fn toggle_verbose(&mut self) -> bool {
        *self.verbose = !*self.verbose;
        *self.verbose
    }
}
