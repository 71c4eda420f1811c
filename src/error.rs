//! Custom error types for auto.
//!
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for auto.
///
/// Every fatal condition (missing command, detection failure, unsupported
/// `x` invocation, child failure) terminates with the same general code.
pub mod exit_code {
    /// Success.
    pub const SUCCESS: i32 = 0;
    /// General error.
    pub const GENERAL_ERROR: i32 = 1;
}

/// Main error type for auto.
#[derive(Error, Debug)]
pub enum AutoError {
    /// No package manager marker file found within the search bounds.
    #[error("No supported package manager detected. Searched up to: {path} ({depth} levels)")]
    NoPackageManager { path: PathBuf, depth: usize },

    /// `x` was invoked for Deno without a script or URL to execute.
    #[error("'deno x' requires a script or URL to execute.")]
    MissingExecTarget,

    /// The child command exited non-zero or could not be spawned.
    ///
    /// The rendered message is the multi-line diagnostic: each of exit code,
    /// failure message, and captured stderr appears only when available.
    #[error("{}", command_failed_message(.command, .code, .message, .stderr))]
    CommandFailed {
        /// The full command line that was executed.
        command: String,
        /// Exit status of the child, if it exited normally.
        code: Option<i32>,
        /// Failure message (e.g. from a spawn error).
        message: Option<String>,
        /// Standard-error output captured from the child.
        stderr: Option<String>,
    },
}

impl AutoError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        exit_code::GENERAL_ERROR
    }
}

/// Build the multi-line diagnostic for a failed child command.
fn command_failed_message(
    command: &str,
    code: &Option<i32>,
    message: &Option<String>,
    stderr: &Option<String>,
) -> String {
    let mut out = format!("Error executing command: {command}\n");
    if let Some(code) = code {
        out.push_str(&format!("Command failed with exit code {code}\n"));
    }
    if let Some(message) = message {
        out.push_str(&format!("Message: {message}\n"));
    }
    if let Some(stderr) = stderr {
        out.push_str(&format!("Stderr: {stderr}\n"));
    }
    out
}

/// Result type alias for auto operations.
pub type Result<T> = std::result::Result<T, AutoError>;
