//! Configuration module for auto.
//!
//! Handles loading and merging configuration from multiple sources:
//! - CLI argument `--config` (highest priority)
//! - Project-level `.autorc.toml`
//! - User-level `~/.config/auto-pm/config.toml`

pub mod file;
mod types;

pub use file::{generate_example_config, load_config};
pub use types::{Config, GeneralConfig};
