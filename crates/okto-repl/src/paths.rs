//! XDG Base Directory paths for okto.
//!
//! | Purpose | XDG Variable | Default | okto Path |
//! |---------|--------------|---------|-----------|
//! | History | `$XDG_DATA_HOME` | `~/.local/share` | `$XDG_DATA_HOME/okto/history.txt` |
//! | Config | `$XDG_CONFIG_HOME` | `~/.config` | `$XDG_CONFIG_HOME/okto/config.toml` |

use std::path::PathBuf;

use directories::BaseDirs;

/// Get the data directory.
///
/// Uses `$XDG_DATA_HOME/okto` or falls back to `~/.local/share/okto`.
pub fn data_dir() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(|| home_fallback().join(".local").join("share"))
        .join("okto")
}

/// Get the config directory.
///
/// Uses `$XDG_CONFIG_HOME/okto` or falls back to `~/.config/okto`.
pub fn config_dir() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| home_fallback().join(".config"))
        .join("okto")
}

/// Interactive line history.
pub fn history_file() -> PathBuf {
    data_dir().join("history.txt")
}

pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Home directory when BaseDirs fails.
fn home_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dirs_are_under_okto() {
        assert!(data_dir().ends_with("okto"));
        assert!(config_dir().ends_with("okto"));
    }

    #[test]
    fn files_live_in_their_dirs() {
        assert!(history_file().starts_with(data_dir()));
        assert!(history_file().ends_with("history.txt"));
        assert!(config_file().starts_with(config_dir()));
        assert!(config_file().ends_with("config.toml"));
    }
}
