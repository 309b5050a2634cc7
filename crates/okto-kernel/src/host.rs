//! The host: everything the kernel needs from the outside world.
//!
//! The kernel never touches stdout, stdin or processes directly. Output,
//! input, external commands and diagnostics all go through a [`Host`]. The
//! terminal implementation lives with the REPL; [`MemoryHost`] keeps
//! everything in memory for tests and embedding.

use std::collections::VecDeque;
use std::fmt;
use std::io;

/// How serious a reported diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Verbose-mode chatter.
    Info,
    Warning,
    /// A statement failed.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(label)
    }
}

/// Outside-world interface for the kernel.
pub trait Host {
    /// Write one line of statement output.
    fn write_line(&mut self, text: &str);

    /// Write prompt text without a trailing newline.
    fn write_prompt(&mut self, text: &str);

    /// Read one line of input without its line terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Run a command through the host and wait for it to finish.
    ///
    /// Returns the exit status, or `-1` if the command was killed by a signal.
    fn execute_external(&mut self, command: &str) -> io::Result<i32>;

    /// Report a diagnostic.
    fn report(&mut self, message: &str, severity: Severity);
}

/// A diagnostic captured by [`MemoryHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub severity: Severity,
}

/// In-memory host.
///
/// Input lines are scripted up front; output, prompts, diagnostics and
/// external commands are recorded for inspection.
#[derive(Debug, Default)]
pub struct MemoryHost {
    input: VecDeque<String>,
    /// Lines written by `write_line`.
    pub output: Vec<String>,
    /// Text written by `write_prompt`.
    pub prompts: Vec<String>,
    /// Commands passed to `execute_external`.
    pub commands: Vec<String>,
    /// Everything passed to `report`.
    pub diagnostics: Vec<Diagnostic>,
    /// Status returned for every external command.
    pub exit_status: i32,
}

impl MemoryHost {
    /// Create a host with no input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host that will answer `read_line` with these lines.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Queue another input line.
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.input.push_back(line.into());
    }

    /// Messages reported at `severity`.
    pub fn messages(&self, severity: Severity) -> Vec<&str> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .map(|d| d.message.as_str())
            .collect()
    }

    /// Messages reported as errors.
    pub fn errors(&self) -> Vec<&str> {
        self.messages(Severity::Error)
    }
}

impl Host for MemoryHost {
    fn write_line(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn write_prompt(&mut self, text: &str) {
        self.prompts.push(text.to_string());
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn execute_external(&mut self, command: &str) -> io::Result<i32> {
        self.commands.push(command.to_string());
        Ok(self.exit_status)
    }

    fn report(&mut self, message: &str, severity: Severity) {
        self.diagnostics.push(Diagnostic {
            message: message.to_string(),
            severity,
        });
    }
}
