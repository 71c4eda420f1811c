//! Project root and package manager detection.
//!
//! Walks upward from a starting directory until a marker file from the
//! priority table identifies the owning package manager. The walk is
//! read-only and bounded: it stops at the filesystem root or after
//! [`MAX_SEARCH_DEPTH`] levels, whichever comes first.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::manager::{PackageManager, MARKER_TABLE};
use crate::error::AutoError;

/// Maximum number of directory levels to search, including the start.
pub const MAX_SEARCH_DEPTH: usize = 20;

/// Outcome of a successful detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// The package manager that owns the project.
    pub manager: PackageManager,
    /// The directory where the marker file was found.
    pub project_root: PathBuf,
}

impl Detection {
    /// Human-readable reason for the detection, for debug output.
    pub fn reason(&self) -> String {
        let markers = self.manager.marker_files().join(" or ");
        format!("found {} in {}", markers, self.project_root.display())
    }
}

/// Detect the package manager by walking up from `start_dir`.
///
/// # Errors
///
/// Returns [`AutoError::NoPackageManager`] when no marker file is found
/// within the search bounds, naming the final directory reached.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use auto_pm::package::detect;
///
/// let detection = detect(Path::new(".")).unwrap();
/// println!("{} at {}", detection.manager, detection.project_root.display());
/// ```
pub fn detect(start_dir: &Path) -> Result<Detection> {
    let start = start_dir.canonicalize().with_context(|| {
        format!(
            "Cannot access directory '{}': path does not exist or is not accessible",
            start_dir.display()
        )
    })?;

    detect_with(&start, |path| path.exists()).map_err(Into::into)
}

/// Detection core with an injectable existence predicate.
///
/// `exists` is consulted for each candidate marker path; it must be free of
/// side effects. Keeping the filesystem behind a predicate makes the walk
/// deterministic under test.
pub fn detect_with<F>(start_dir: &Path, exists: F) -> crate::error::Result<Detection>
where
    F: Fn(&Path) -> bool,
{
    let mut current = start_dir.to_path_buf();

    for _ in 0..MAX_SEARCH_DEPTH {
        for (manager, markers) in MARKER_TABLE {
            if markers.iter().any(|m| exists(&current.join(m))) {
                return Ok(Detection {
                    manager: *manager,
                    project_root: current,
                });
            }
        }

        match current.parent() {
            Some(parent) if parent != current => current = parent.to_path_buf(),
            // Reached the root of the filesystem.
            _ => break,
        }
    }

    Err(AutoError::NoPackageManager {
        path: current,
        depth: MAX_SEARCH_DEPTH,
    })
}
