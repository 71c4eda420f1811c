//! Package module for auto.
//!
//! Handles package manager detection and package.json script lookup.

mod detect;
mod manager;
pub mod scripts;

pub use detect::{detect, detect_with, Detection, MAX_SEARCH_DEPTH};
pub use manager::{PackageManager, MARKER_TABLE};
pub use scripts::{load_scripts, parse_scripts_from_json, Package, Scripts};
