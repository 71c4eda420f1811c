//! Configuration file loading and merging.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::types::Config;
use crate::utils::local_config_file;

/// Load configuration from the specified path.
fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}

/// Load configuration with proper priority and merging.
///
/// Searches for config files in order of priority (lowest to highest):
/// 1. `~/.config/auto-pm/config.toml` (user-level)
/// 2. `.autorc.toml` in the project root
/// 3. CLI argument `--config <path>`
///
/// Missing default-location files are not errors; unreadable ones produce a
/// warning and are skipped. A CLI-specified config that fails to load is a
/// hard error.
pub fn load_config(cli_config_path: Option<&Path>, project_root: &Path) -> Result<Config> {
    let mut config = Config::default();

    if let Some(user_config_path) = Config::user_config_path() {
        if user_config_path.exists() {
            match load_config_from_path(&user_config_path) {
                Ok(user_config) => config.merge(user_config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load user config at {}: {}",
                        user_config_path.display(),
                        e
                    );
                }
            }
        }
    }

    if let Some(project_config_path) = local_config_file(project_root) {
        match load_config_from_path(&project_config_path) {
            Ok(project_config) => config.merge(project_config),
            Err(e) => {
                eprintln!(
                    "Warning: Failed to load project config at {}: {}",
                    project_config_path.display(),
                    e
                );
            }
        }
    }

    if let Some(cli_path) = cli_config_path {
        let cli_config = load_config_from_path(cli_path).with_context(|| {
            format!(
                "Failed to load config from CLI-specified path: {}",
                cli_path.display()
            )
        })?;
        config.merge(cli_config);
    }

    Ok(config)
}

/// Generate an example configuration file with all options documented.
pub fn generate_example_config() -> String {
    r#"# auto Configuration File
# Place this file at ~/.config/auto-pm/config.toml for global settings
# or .autorc.toml in your project root for project-specific settings

[general]
# Pin the package manager, overriding lock-file detection.
# Options: "npm", "yarn", "pnpm", "bun", "deno"
# runner = "pnpm"

# Echo the constructed command line before running it.
echo_commands = true
"#
    .to_string()
}
