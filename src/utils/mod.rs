//! Utility module for auto.

mod paths;

pub use paths::{config_dir, global_config_file, local_config_file};
