//! CLI command handlers for the carousel showcase.
//!
//! This module provides headless, scriptable access to the carousel engine
//! and the configuration file for automation and testing.

pub mod config;
pub mod simulate;

// Re-export types used by main.rs and tests
pub use config::ConfigArgs;
pub use simulate::{SimulateArgs, Step};
