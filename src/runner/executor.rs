//! Command construction and execution.
//!
//! A [`CommandSpec`] is a transient description of a single shell
//! invocation. Tokens are joined with single spaces and no quoting, an
//! inherited limitation of the tool: arguments containing spaces or shell
//! metacharacters are not safely supported. The joined line runs through
//! the ambient shell with stdin/stdout inherited; stderr is relayed through
//! the parent unbuffered so it can also appear in the failure diagnostic.

use std::io::{self, Read, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{AutoError, Result};

/// A single command invocation to be run through the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// The program name (e.g. `npm`, `npx`, `deno`).
    pub program: String,
    /// Optional subcommand placed immediately after the program.
    pub subcommand: Option<String>,
    /// Remaining arguments, in order.
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Create a new command spec.
    pub fn new<P, S, A>(program: P, subcommand: Option<S>, args: A) -> Self
    where
        P: Into<String>,
        S: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            program: program.into(),
            subcommand: subcommand.map(Into::into),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The full token sequence: program, subcommand (if any), then args.
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens = vec![self.program.as_str()];
        if let Some(sub) = &self.subcommand {
            tokens.push(sub.as_str());
        }
        tokens.extend(self.args.iter().map(String::as_str));
        tokens
    }

    /// Build the flat command line: tokens joined with single spaces.
    ///
    /// No shell-escaping or quoting is performed.
    ///
    /// # Examples
    ///
    /// ```
    /// use auto_pm::runner::CommandSpec;
    ///
    /// let spec = CommandSpec::new("npm", Some("run"), ["test", "--watch"]);
    /// assert_eq!(spec.command_line(), "npm run test --watch");
    /// ```
    pub fn command_line(&self) -> String {
        self.tokens().join(" ")
    }
}

impl std::fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command_line())
    }
}

/// Run a command through the ambient shell in the given directory.
///
/// Echoes `> <command line>` to stdout before running (unless `echo` is
/// disabled). In dry-run mode the command line is printed and nothing is
/// executed.
///
/// # Errors
///
/// Returns [`AutoError::CommandFailed`] when the child cannot be spawned or
/// exits non-zero. The error carries the exit code, a failure message, and
/// any stderr text the child produced. A failed command is never retried.
pub fn run_command(
    spec: &CommandSpec,
    project_dir: &Path,
    echo: bool,
    dry_run: bool,
) -> Result<()> {
    let command_line = spec.command_line();

    if dry_run {
        println!("Would run: {command_line}");
        return Ok(());
    }

    if echo {
        println!("> {command_line}");
        io::stdout().flush().ok();
    }

    let mut command = shell_command(&command_line);
    command.current_dir(project_dir);
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::piped());

    let mut child = command.spawn().map_err(|e| AutoError::CommandFailed {
        command: command_line.clone(),
        code: None,
        message: Some(e.to_string()),
        stderr: None,
    })?;

    // Relay the child's stderr as it arrives, keeping a copy for the
    // failure diagnostic.
    let mut captured = Vec::new();
    if let Some(mut child_stderr) = child.stderr.take() {
        let mut stderr = io::stderr();
        let mut buf = [0u8; 8192];
        loop {
            match child_stderr.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    stderr.write_all(&buf[..n]).ok();
                    stderr.flush().ok();
                    captured.extend_from_slice(&buf[..n]);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(_) => break,
            }
        }
    }

    let status = child.wait().map_err(|e| AutoError::CommandFailed {
        command: command_line.clone(),
        code: None,
        message: Some(e.to_string()),
        stderr: None,
    })?;

    if status.success() {
        return Ok(());
    }

    let stderr_text = String::from_utf8_lossy(&captured).trim_end().to_string();
    Err(AutoError::CommandFailed {
        command: command_line.clone(),
        code: status.code(),
        message: Some(format!("Command failed: {command_line}")),
        stderr: (!stderr_text.is_empty()).then_some(stderr_text),
    })
}

/// Build a Command that runs the given line through the ambient shell.
#[cfg(unix)]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(line);
    command
}

/// Build a Command that runs the given line through the ambient shell.
#[cfg(windows)]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(line);
    command
}
