//! Runner module for auto.
//!
//! Builds flat command lines and executes them through the ambient shell.

mod executor;

pub use executor::{run_command, CommandSpec};
