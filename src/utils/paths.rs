//! Path utilities.

use std::path::{Path, PathBuf};

/// Get the config directory for auto.
///
/// Returns `~/.config/auto-pm` on Unix-like systems.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("auto-pm"))
}

/// Get the global config file path.
///
/// Returns `~/.config/auto-pm/config.toml`.
pub fn global_config_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Find the local config file in the project root.
///
/// Looks for `.autorc.toml` in the given directory.
pub fn local_config_file(project_root: &Path) -> Option<PathBuf> {
    let config_file = project_root.join(".autorc.toml");
    if config_file.exists() {
        Some(config_file)
    } else {
        None
    }
}
