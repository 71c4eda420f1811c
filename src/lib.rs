//! auto - package-manager-agnostic command dispatcher
//!
//! Detects which package manager owns a project (npm, yarn, pnpm, bun or
//! deno, by lock/config-file presence in the directory tree) and forwards a
//! command either to that manager's script runner or to its "execute a
//! package binary" form (`auto x <pkg>`).
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface argument parsing
//! - [`config`] - Configuration file loading and merging
//! - [`dispatch`] - Translation from user command to concrete invocation
//! - [`error`] - Error types and result helpers
//! - [`package`] - Package manager detection and script lookup
//! - [`runner`] - Command construction and shell execution
//! - [`utils`] - Path utilities
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use auto_pm::dispatch::plan;
//! use auto_pm::package::{detect, load_scripts};
//!
//! let detection = detect(Path::new(".")).unwrap();
//! let scripts = load_scripts(&detection.project_root);
//! let spec = plan("test", &[], detection.manager, &scripts).unwrap();
//! println!("Would forward: {}", spec.command_line());
//! ```

/// CLI argument definitions.
pub mod cli;

/// Configuration system for loading and merging settings.
pub mod config;

/// Command dispatch decision table.
pub mod dispatch;

/// Error types and result helpers.
pub mod error;

/// Package manager detection and package.json script lookup.
pub mod package;

/// Command construction and shell execution.
pub mod runner;

/// Path utilities.
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Config;
pub use error::{AutoError, Result};
pub use package::{Detection, PackageManager, Scripts};
pub use runner::CommandSpec;
