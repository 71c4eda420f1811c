//! Command dispatch: from a user command to a concrete invocation.
//!
//! `x` is a reserved verb with a per-manager translation to the "execute a
//! package binary" form. Every other command is a pass-through: if the name
//! is declared in package.json scripts it is forwarded to the manager's
//! script runner, otherwise it is forwarded as a raw manager subcommand.

use crate::error::{AutoError, Result};
use crate::package::{PackageManager, Scripts};
use crate::runner::CommandSpec;

/// The reserved command name for running a package binary.
pub const EXEC_COMMAND: &str = "x";

/// Plan the invocation for a user command.
///
/// Pure function: no filesystem or process side effects.
///
/// # Errors
///
/// Returns [`AutoError::MissingExecTarget`] for `x` on a Deno project with
/// no script or URL argument.
///
/// # Examples
///
/// ```
/// use auto_pm::dispatch::plan;
/// use auto_pm::package::{PackageManager, Scripts};
///
/// let spec = plan("x", &["prettier".into()], PackageManager::Yarn, &Scripts::new()).unwrap();
/// assert_eq!(spec.command_line(), "yarn dlx prettier");
/// ```
pub fn plan(
    command: &str,
    args: &[String],
    manager: PackageManager,
    scripts: &Scripts,
) -> Result<CommandSpec> {
    if command == EXEC_COMMAND {
        plan_exec(manager, args)
    } else {
        Ok(plan_passthrough(manager, command, args, scripts))
    }
}

/// Translate `x <args>` to the manager-specific package-binary invocation.
fn plan_exec(manager: PackageManager, args: &[String]) -> Result<CommandSpec> {
    let spec = match manager {
        PackageManager::Npm => CommandSpec::new("npx", None::<String>, args.to_vec()),
        PackageManager::Yarn => CommandSpec::new("yarn", Some("dlx"), args.to_vec()),
        PackageManager::Pnpm => CommandSpec::new("pnpm", Some("dlx"), args.to_vec()),
        PackageManager::Bun => CommandSpec::new("bun", Some("x"), args.to_vec()),
        PackageManager::Deno => {
            // The closest Deno equivalent is `deno run -A <script-or-url>`.
            if args.is_empty() {
                return Err(AutoError::MissingExecTarget);
            }
            let mut deno_args = vec!["-A".to_string()];
            deno_args.extend(args.iter().cloned());
            CommandSpec::new("deno", Some("run"), deno_args)
        }
    };
    Ok(spec)
}

/// Forward a non-reserved command to the detected manager.
fn plan_passthrough(
    manager: PackageManager,
    command: &str,
    args: &[String],
    scripts: &Scripts,
) -> CommandSpec {
    if scripts.contains(command) {
        let mut run_args = vec![command.to_string()];
        run_args.extend(args.iter().cloned());
        CommandSpec::new(manager.executable(), Some("run"), run_args)
    } else {
        CommandSpec::new(manager.executable(), Some(command), args.to_vec())
    }
}
