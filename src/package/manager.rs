//! Package manager kinds and their marker files.
//!
//! A project is owned by exactly one package manager, identified by the
//! presence of its lock file (or config file, for Deno) somewhere in the
//! directory tree. The marker table below is ordered: when a directory
//! contains markers for several managers, the first match wins.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    /// Node Package Manager (npm)
    Npm,
    /// Yarn package manager
    Yarn,
    /// pnpm - Fast, disk space efficient package manager
    Pnpm,
    /// Bun - Fast all-in-one JavaScript runtime
    Bun,
    /// Deno - Secure JavaScript/TypeScript runtime
    Deno,
}

/// Marker-file priority table used by detection.
///
/// Checked in order within each directory; first existing marker wins.
pub const MARKER_TABLE: &[(PackageManager, &[&str])] = &[
    (PackageManager::Yarn, &["yarn.lock"]),
    (PackageManager::Npm, &["package-lock.json"]),
    (PackageManager::Pnpm, &["pnpm-lock.yaml"]),
    (PackageManager::Bun, &["bun.lockb", "bun.lock"]),
    (PackageManager::Deno, &["deno.json", "deno.jsonc"]),
];

impl PackageManager {
    /// Get the executable name for this package manager.
    pub fn executable(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
            PackageManager::Deno => "deno",
        }
    }

    /// Get the marker file names that identify this package manager.
    ///
    /// # Examples
    ///
    /// ```
    /// use auto_pm::package::PackageManager;
    ///
    /// assert_eq!(PackageManager::Npm.marker_files(), &["package-lock.json"]);
    /// assert_eq!(PackageManager::Bun.marker_files(), &["bun.lockb", "bun.lock"]);
    /// ```
    pub fn marker_files(&self) -> &'static [&'static str] {
        MARKER_TABLE
            .iter()
            .find(|(manager, _)| manager == self)
            .map(|(_, markers)| *markers)
            .unwrap_or(&[])
    }

    /// Get the display name for the package manager.
    pub fn display_name(&self) -> &'static str {
        self.executable()
    }

    /// Get all supported package managers, in marker priority order.
    pub fn all() -> &'static [PackageManager] {
        &[
            PackageManager::Yarn,
            PackageManager::Npm,
            PackageManager::Pnpm,
            PackageManager::Bun,
            PackageManager::Deno,
        ]
    }

    /// Check if any marker file for this manager exists in a directory.
    pub fn has_marker(&self, dir: &Path) -> bool {
        self.marker_files().iter().any(|m| dir.join(m).exists())
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            "pnpm" => Ok(PackageManager::Pnpm),
            "bun" => Ok(PackageManager::Bun),
            "deno" => Ok(PackageManager::Deno),
            _ => Err(format!(
                "Unknown package manager: '{s}'. Valid options are: npm, yarn, pnpm, bun, deno"
            )),
        }
    }
}
