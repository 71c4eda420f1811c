//! Configuration type definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::package::PackageManager;

/// General configuration settings.
///
/// Fields are optional in the file representation so that merging can tell
/// "explicitly set" apart from "left at default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Pin the package manager kind, overriding marker-based detection.
    /// Detection still resolves the project root.
    #[serde(default)]
    pub runner: Option<PackageManager>,

    /// Echo the constructed command line before running it (default: true).
    #[serde(default)]
    pub echo_commands: Option<bool>,
}

/// Root configuration for auto.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Merge another config into this one.
    ///
    /// Fields set in `other` override this config's values.
    pub fn merge(&mut self, other: Config) {
        if other.general.runner.is_some() {
            self.general.runner = other.general.runner;
        }
        if other.general.echo_commands.is_some() {
            self.general.echo_commands = other.general.echo_commands;
        }
    }

    /// Whether command lines should be echoed before execution.
    pub fn echo_commands(&self) -> bool {
        self.general.echo_commands.unwrap_or(true)
    }

    /// The pinned package manager, if any.
    pub fn runner(&self) -> Option<PackageManager> {
        self.general.runner
    }

    /// Get the user-level config file path.
    pub fn user_config_path() -> Option<PathBuf> {
        crate::utils::global_config_file()
    }
}
