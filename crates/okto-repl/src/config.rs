//! REPL configuration.
//!
//! Read from `$XDG_CONFIG_HOME/okto/config.toml` when it exists:
//!
//! ```toml
//! verbose = false
//! strict = true
//! history = true
//! prompt = "okto> "
//! ```
//!
//! Every key is optional. Command-line flags are applied on top.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::paths;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplConfig {
    /// Start with verbose diagnostics on.
    pub verbose: bool,
    /// In file mode, stop at the first failing statement with exit code 1.
    pub strict: bool,
    /// Persist interactive history.
    pub history: bool,
    /// Interactive prompt.
    pub prompt: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            strict: false,
            history: true,
            prompt: "> ".to_string(),
        }
    }
}

impl ReplConfig {
    /// Load the user's config file, or defaults if there is none.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_file())
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config: {}", path.display()))
    }

    /// Parse config file contents.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_defaults() {
        assert_eq!(ReplConfig::parse("").unwrap(), ReplConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = ReplConfig::parse("strict = true\nprompt = \"okto> \"").unwrap();
        assert!(config.strict);
        assert!(config.history);
        assert_eq!(config.prompt, "okto> ");
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(ReplConfig::parse("colour = true").is_err());
    }

    #[test]
    fn missing_file_is_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReplConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ReplConfig::default());
    }

    #[test]
    fn bad_file_names_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "verbose = \"loud\"").unwrap();
        let err = ReplConfig::load_from(&path).unwrap_err();
        assert!(format!("{err}").contains("config.toml"));
    }
}
