//! CLI argument definitions for auto.
//!
//! Uses clap with derive macros for argument parsing.
//!
//! All options must come before the command: everything after the command
//! name is collected verbatim and forwarded to the child invocation.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{generate, Shell};

use crate::package::PackageManager;

/// Package-manager-agnostic command dispatcher.
#[derive(Parser, Debug)]
#[command(name = "auto")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "auto [OPTIONS] <COMMAND> [ARGS]...")]
#[command(arg_required_else_help = false)]
pub struct Cli {
    /// Command to forward: 'x' runs a package binary, anything else is a
    /// script name or raw manager subcommand
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Arguments forwarded to the child invocation
    #[arg(
        value_name = "ARGS",
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub args: Vec<String>,

    /// Directory to start detection from (default: current directory)
    #[arg(short = 'C', long = "dir", value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Override package manager detection
    #[arg(short, long, value_name = "RUNNER", value_enum)]
    pub runner: Option<CliRunner>,

    /// Show the command without executing it
    #[arg(short, long)]
    pub dry_run: bool,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    pub no_config: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<CliShell>,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliShell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    Powershell,
    /// Elvish shell
    Elvish,
}

/// Package manager for CLI parsing.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliRunner {
    Npm,
    Yarn,
    Pnpm,
    Bun,
    Deno,
}

impl From<CliRunner> for PackageManager {
    fn from(runner: CliRunner) -> Self {
        match runner {
            CliRunner::Npm => PackageManager::Npm,
            CliRunner::Yarn => PackageManager::Yarn,
            CliRunner::Pnpm => PackageManager::Pnpm,
            CliRunner::Bun => PackageManager::Bun,
            CliRunner::Deno => PackageManager::Deno,
        }
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Get the directory to start detection from.
    ///
    /// Returns the provided path or the current directory.
    pub fn start_dir(&self) -> PathBuf {
        self.dir
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Get the runner override.
    pub fn runner_override(&self) -> Option<PackageManager> {
        self.runner.map(Into::into)
    }

    /// Print the usage text to stdout.
    pub fn print_usage() {
        let mut cmd = Cli::command();
        let _ = cmd.print_help();
    }

    /// Generate shell completions and write to stdout.
    pub fn generate_completions(shell: CliShell) {
        let mut cmd = Cli::command();
        let shell = match shell {
            CliShell::Bash => Shell::Bash,
            CliShell::Zsh => Shell::Zsh,
            CliShell::Fish => Shell::Fish,
            CliShell::Powershell => Shell::PowerShell,
            CliShell::Elvish => Shell::Elvish,
        };
        generate(shell, &mut cmd, "auto", &mut std::io::stdout());
    }
}
