//! okto entry point.
//!
//! ```bash
//! okto                  # interactive prompt
//! okto script.okto      # run a file
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use okto_repl::{Repl, ReplConfig, TerminalHost};

/// Oktolang interpreter.
#[derive(Parser, Debug)]
#[command(name = "okto", version, about, long_about = None)]
struct Cli {
    /// Script to run. Starts the interactive prompt when omitted.
    script: Option<PathBuf>,

    /// Start with verbose diagnostics on.
    #[arg(long)]
    verbose: bool,

    /// Stop a script at its first failing line (exit code 1).
    #[arg(long)]
    strict: bool,

    /// Do not load or save interactive history.
    #[arg(long)]
    no_history: bool,

    /// Config file to use instead of `$XDG_CONFIG_HOME/okto/config.toml`.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Flags only ever switch settings on (or history off).
    fn apply(&self, config: &mut ReplConfig) {
        config.verbose |= self.verbose;
        config.strict |= self.strict;
        if self.no_history {
            config.history = false;
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ReplConfig::load_from(path),
        None => ReplConfig::load(),
    }
    .context("Failed to load configuration")?;
    cli.apply(&mut config);
    tracing::debug!(?config, "configuration loaded");

    let mut repl = Repl::new(config);
    let code = match &cli.script {
        Some(path) => repl.run_file(path, &mut TerminalHost::new())?,
        None => repl.run_interactive()?,
    };

    std::process::exit(code)
}
