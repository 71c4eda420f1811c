//! Integration tests for auto.
//!
//! Organized by feature:
//!
//! - `fixtures` - Test helpers for creating temporary projects
//! - `cli_tests` - CLI interface tests
//! - `detection_tests` - Package manager detection tests
//! - `dispatch_tests` - Command translation tests (via --dry-run)
//! - `exec_tests` - Real child execution tests using shim binaries

mod cli_tests;
mod dispatch_tests;
