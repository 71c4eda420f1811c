//! Build script for auto.
//!
//! Generates man pages using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

/// Minimal CLI struct for man page generation.
///
/// This duplicates the CLI definition to avoid build dependency issues.
#[derive(Parser)]
#[command(name = "auto")]
#[command(
    author,
    version,
    about = "Package-manager-agnostic command dispatcher"
)]
#[command(
    long_about = "auto inspects the directory tree to determine which package manager owns \
    the project (npm, yarn, pnpm, bun or deno, by lock-file presence), then forwards the \
    given command to that manager's script runner or to its 'execute a package binary' \
    form via `auto x <pkg>`."
)]
struct Cli {
    /// Command to forward: 'x' runs a package binary, anything else is a
    /// script name or raw manager subcommand
    #[arg(value_name = "COMMAND")]
    command: Option<String>,

    /// Arguments forwarded to the child invocation
    #[arg(value_name = "ARGS", allow_hyphen_values = true, trailing_var_arg = true)]
    args: Vec<String>,

    /// Directory to start detection from (default: current directory)
    #[arg(short = 'C', long = "dir", value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Override package manager detection
    #[arg(short, long, value_name = "RUNNER", value_enum)]
    runner: Option<Runner>,

    /// Show the command without executing it
    #[arg(short, long)]
    dry_run: bool,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    no_config: bool,

    /// Enable debug output
    #[arg(long)]
    debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Runner {
    Npm,
    Yarn,
    Pnpm,
    Bun,
    Deno,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}

fn main() {
    // Only generate man pages for release builds or when explicitly requested
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("AUTO_GEN_MANPAGE").is_err() {
        return;
    }

    let out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };

    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);

    let mut buffer = Vec::new();
    man.render(&mut buffer)
        .expect("Failed to generate man page");

    let man_path = out_dir.join("auto.1");
    fs::write(&man_path, buffer).expect("Failed to write man page");

    println!("cargo:rerun-if-changed=build.rs");
}
