//! okto REPL: interactive prompt and script runner for Oktolang.
//!
//! Two ways in:
//!
//! - **Interactive**: a rustyline prompt with persistent history. `/vars`
//!   lists the session's variables.
//! - **File**: each line of a script is fed to the kernel. Lines starting
//!   with `#` are skipped, which makes `#!/usr/bin/env okto` work.
//!
//! Both end on `exit`, which becomes the process exit code.

pub mod config;
pub mod host;
pub mod paths;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use okto_kernel::{ExecResult, Host, Kernel, KernelConfig};

pub use config::ReplConfig;
pub use host::TerminalHost;

/// REPL state: one kernel session plus its configuration.
pub struct Repl {
    kernel: Kernel,
    config: ReplConfig,
}

impl Repl {
    /// Create a new REPL instance.
    pub fn new(config: ReplConfig) -> Self {
        let kernel = Kernel::new(KernelConfig {
            verbose: config.verbose,
        });
        Self { kernel, config }
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    pub fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// Process one interactive line.
    pub fn process_line(&mut self, line: &str, host: &mut dyn Host) -> ExecResult {
        if line.trim() == "/vars" {
            self.list_vars(host);
            return ExecResult::Continue;
        }
        self.kernel.execute(line, host)
    }

    fn list_vars(&self, host: &mut dyn Host) {
        let store = self.kernel.store();
        if store.is_empty() {
            host.write_line("(no variables set)");
            return;
        }
        for name in store.names() {
            if let Ok(value) = store.get(name) {
                host.write_line(&format!(
                    "{} {name} = {}",
                    value.kind().verb(),
                    value.literal_form()
                ));
            }
        }
    }

    /// Run a script file. Returns the exit code for the process.
    pub fn run_file(&mut self, path: &Path, host: &mut dyn Host) -> Result<i32> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("reading script: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "running script");
        Ok(self.run_source(&source, host))
    }

    /// Run script text line by line. Returns the exit code for the process.
    ///
    /// Stops at `exit`. In strict mode the first failing line ends the run
    /// with code 1; otherwise failures are reported and the script goes on.
    pub fn run_source(&mut self, source: &str, host: &mut dyn Host) -> i32 {
        for (index, line) in source.lines().enumerate() {
            if line.starts_with('#') {
                continue;
            }
            match self.kernel.execute(line, host) {
                ExecResult::Exit(code) => return code,
                ExecResult::Error(message) if self.config.strict => {
                    tracing::debug!(line = index + 1, %message, "strict mode: stopping");
                    return 1;
                }
                _ => {}
            }
        }
        0
    }

    /// Run the interactive prompt until `exit` or end of input.
    pub fn run_interactive(&mut self) -> Result<i32> {
        println!("Oktolang interpreter v{}", env!("CARGO_PKG_VERSION"));

        let mut rl: Editor<(), DefaultHistory> =
            Editor::new().context("Failed to create editor")?;

        let history_path = self.config.history.then(paths::history_file);
        if let Some(path) = &history_path {
            // No history yet on first run.
            let _ = rl.load_history(path);
        }

        let mut host = TerminalHost::new();
        let prompt = self.config.prompt.clone();
        let code = loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.as_str());
                    }
                    if let ExecResult::Exit(code) = self.process_line(&line, &mut host) {
                        break code;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                }
                Err(ReadlineError::Eof) => break 0,
                Err(err) => return Err(err).context("reading input"),
            }
        };

        if let Some(path) = &history_path {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Err(err) = rl.save_history(path) {
                tracing::warn!(path = %path.display(), "failed to save history: {err}");
            }
        }

        Ok(code)
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new(ReplConfig::default())
    }
}
