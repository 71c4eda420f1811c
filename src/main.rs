//! auto - package-manager-agnostic command dispatcher
//!
//! Entry point for the auto CLI application.

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;

use auto_pm::cli::Cli;
use auto_pm::config::Config;
use auto_pm::dispatch::{self, plan};
use auto_pm::error::{exit_code, AutoError};
use auto_pm::package::{detect, load_scripts, Scripts};
use auto_pm::runner::run_command;
use auto_pm::utils::{global_config_file, local_config_file};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            // Our own errors already carry a complete message.
            if let Some(auto_err) = err.downcast_ref::<AutoError>() {
                eprintln!("{auto_err}");
                return ExitCode::from(auto_err.exit_code() as u8);
            }
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code::GENERAL_ERROR as u8)
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse_args();

    // Handle shell completions early
    if let Some(shell) = cli.completions {
        Cli::generate_completions(shell);
        return Ok(exit_code::SUCCESS);
    }

    if cli.debug {
        print_debug_header();
        eprintln!("Debug: CLI arguments = {cli:#?}");
    }

    // No command: print usage and fail.
    let command = match &cli.command {
        Some(command) => command.clone(),
        None => {
            Cli::print_usage();
            return Ok(exit_code::GENERAL_ERROR);
        }
    };

    // Detect the owning package manager and project root
    let start = Instant::now();
    let detection = detect(&cli.start_dir())?;

    if cli.debug {
        eprintln!(
            "Debug: Package manager = {} ({}, took {}ms)",
            detection.manager,
            detection.reason(),
            start.elapsed().as_millis()
        );
        print_debug_paths(&detection.project_root);
    }

    // Load config (unless disabled)
    let config = if cli.no_config {
        Config::default()
    } else {
        auto_pm::config::load_config(cli.config.as_deref(), &detection.project_root)?
    };

    // Resolve the manager kind: CLI flag > config pin > detection
    let manager = cli
        .runner_override()
        .or_else(|| config.runner())
        .unwrap_or(detection.manager);

    if cli.debug && manager != detection.manager {
        eprintln!("Debug: Manager overridden to {manager}");
    }

    // The x verb never consults package.json scripts
    let scripts = if command == dispatch::EXEC_COMMAND {
        Scripts::new()
    } else {
        load_scripts(&detection.project_root)
    };

    let spec = plan(&command, &cli.args, manager, &scripts)?;

    if cli.debug {
        eprintln!("Debug: Forwarding as `{spec}`");
    }

    run_command(
        &spec,
        &detection.project_root,
        config.echo_commands(),
        cli.dry_run,
    )?;

    Ok(exit_code::SUCCESS)
}

// ==================== Debug Functions ====================

/// Print debug header with version info.
fn print_debug_header() {
    eprintln!("=== auto debug mode ===");
    eprintln!("Version: {}", env!("CARGO_PKG_VERSION"));
    eprintln!();
}

/// Print debug information about file paths.
fn print_debug_paths(project_root: &Path) {
    eprintln!("Debug: File locations:");

    if let Some(cfg) = global_config_file() {
        let exists = cfg.exists();
        eprintln!("  Global config: {} (exists: {})", cfg.display(), exists);
    } else {
        eprintln!("  Global config: <not available>");
    }

    if let Some(cfg) = local_config_file(project_root) {
        eprintln!("  Local config: {} (exists: true)", cfg.display());
    } else {
        eprintln!(
            "  Local config: {}/.autorc.toml (exists: false)",
            project_root.display()
        );
    }

    let package_json = project_root.join("package.json");
    eprintln!(
        "  package.json: {} (exists: {})",
        package_json.display(),
        package_json.exists()
    );

    eprintln!();
}
