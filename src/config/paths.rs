//! Path utilities for surebet.
//!
//! User data lives under `~/.surebet/`:
//! - `~/.surebet/config.toml` - calculator configuration

use std::path::PathBuf;

/// Returns the surebet home directory (`~/.surebet/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".surebet")
}

/// Returns the default config file path (`~/.surebet/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
