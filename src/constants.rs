//! Application-wide constants.
//!
//! This module defines the application name and the default timings shared
//! by the engines and the configuration file.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Carousel Showcase";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "carousel-tui";

/// Directory name under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "CarouselShowcase";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "CAROUSEL_TUI_CONFIG_DIR";

/// Default time between automatic advances.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 6000;

/// How long manual navigation suspends autoplay.
pub const DEFAULT_PAUSE_COOLDOWN_MS: u64 = 2500;

/// Horizontal travel that turns a touch into a swipe.
pub const SWIPE_THRESHOLD: u16 = 40;

/// Seconds for the partner marquee to scroll one full loop.
pub const DEFAULT_MARQUEE_LOOP_SECS: f64 = 48.96;

/// How often the TUI loop wakes up when idle.
pub const DEFAULT_TICK_RATE_MS: u64 = 100;
