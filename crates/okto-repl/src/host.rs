//! Terminal host: stdout, stdin, the platform shell, colored diagnostics.

use std::io::{self, BufRead, Write};
use std::process::Command;

use okto_kernel::{Host, Severity};
use owo_colors::OwoColorize;

/// Host backed by the process's own terminal.
///
/// Statement output goes to stdout, diagnostics to stderr. Commands run
/// through `sh -c` (`cmd /C` on Windows) with inherited stdio.
#[derive(Debug, Default)]
pub struct TerminalHost;

impl TerminalHost {
    pub fn new() -> Self {
        Self
    }
}

impl Host for TerminalHost {
    // A closed stdout (`okto script | head`) is not an error.
    fn write_line(&mut self, text: &str) {
        let _ = writeln!(io::stdout().lock(), "{text}");
    }

    fn write_prompt(&mut self, text: &str) {
        let mut stdout = io::stdout().lock();
        let _ = write!(stdout, "{text}");
        let _ = stdout.flush();
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn execute_external(&mut self, command: &str) -> io::Result<i32> {
        tracing::debug!(command, "running external command");
        let status = shell(command).status()?;
        Ok(status.code().unwrap_or(-1))
    }

    fn report(&mut self, message: &str, severity: Severity) {
        let line = match severity {
            Severity::Error => format!("Error running code: {message}").red().to_string(),
            Severity::Warning => format!("Warning: {message}").yellow().to_string(),
            Severity::Info => format!("Info: {message}").cyan().to_string(),
        };
        let _ = writeln!(io::stderr().lock(), "{line}");
    }
}

#[cfg(unix)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn external_status_is_returned() {
        let mut host = TerminalHost::new();
        assert_eq!(host.execute_external("exit 0").unwrap(), 0);
        assert_eq!(host.execute_external("exit 4").unwrap(), 4);
    }

    #[test]
    fn killed_command_reports_minus_one() {
        let mut host = TerminalHost::new();
        assert_eq!(host.execute_external("kill -9 $$").unwrap(), -1);
    }
}
