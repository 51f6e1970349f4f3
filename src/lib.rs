//! Carousel Showcase Library
//!
//! This library provides an auto-rotating carousel engine with responsive
//! visible-item counts, pause-on-interaction rules and a manual-navigation
//! cooldown, plus the terminal host that renders it.
//!
//! The [`engine`] module has no terminal dependency. The [`tui`] module is
//! behind the `ratatui` feature.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
#[cfg(feature = "ratatui")]
pub mod tui;
