//! Carousel configuration and validation errors.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::breakpoints::{Breakpoint, Breakpoints};
use crate::constants::{DEFAULT_AUTOPLAY_INTERVAL_MS, DEFAULT_PAUSE_COOLDOWN_MS, SWIPE_THRESHOLD};

/// Reasons a carousel configuration is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Autoplay interval is zero or negative
    NonPositiveInterval(i64),
    /// Item count is negative
    NegativeItemCount(i64),
    /// Breakpoint threshold is negative
    NegativeBreakpointWidth(i64),
    /// Breakpoint would show no items
    ZeroVisibleCount {
        /// Threshold of the offending breakpoint
        min_width: u32,
    },
    /// Two breakpoints share a threshold
    DuplicateBreakpoint {
        /// Repeated threshold
        min_width: u32,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveInterval(ms) => {
                write!(f, "autoplay interval must be positive, got {ms}ms")
            }
            Self::NegativeItemCount(n) => write!(f, "item count cannot be negative, got {n}"),
            Self::NegativeBreakpointWidth(w) => {
                write!(f, "breakpoint width cannot be negative, got {w}")
            }
            Self::ZeroVisibleCount { min_width } => {
                write!(f, "breakpoint at width {min_width} shows zero items")
            }
            Self::DuplicateBreakpoint { min_width } => {
                write!(f, "breakpoint width {min_width} is listed more than once")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Immutable per-instance carousel settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Number of items in the rotation
    pub item_count: usize,
    /// Time between automatic advances
    pub autoplay_interval: Duration,
    /// Whether the carousel rotates on its own
    pub autoplay_enabled: bool,
    /// Visible-count breakpoints
    pub breakpoints: Breakpoints,
    /// How long manual navigation suspends autoplay
    pub pause_cooldown: Duration,
    /// Minimum horizontal touch travel recognised as a swipe
    pub swipe_threshold: u16,
}

impl CarouselConfig {
    /// Creates a config with default timing and web breakpoints.
    #[must_use]
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            autoplay_interval: Duration::from_millis(DEFAULT_AUTOPLAY_INTERVAL_MS),
            autoplay_enabled: true,
            breakpoints: Breakpoints::web_default(),
            pause_cooldown: Duration::from_millis(DEFAULT_PAUSE_COOLDOWN_MS),
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }

    /// Sets the autoplay interval.
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.autoplay_interval = interval;
        self
    }

    /// Enables or disables autoplay.
    #[must_use]
    pub const fn with_autoplay(mut self, enabled: bool) -> Self {
        self.autoplay_enabled = enabled;
        self
    }

    /// Replaces the breakpoints.
    #[must_use]
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Sets the manual-navigation cooldown.
    #[must_use]
    pub const fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.pause_cooldown = cooldown;
        self
    }

    /// Checks invariants that the typed fields cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.autoplay_interval.is_zero() {
            return Err(ConfigError::NonPositiveInterval(0));
        }
        Ok(())
    }
}

/// Breakpoint as written in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBreakpoint {
    /// Smallest width the breakpoint applies to
    pub min_width: i64,
    /// Items shown at or above `min_width`
    pub visible: i64,
}

/// Carousel settings as written in a config file.
///
/// Numbers are signed so that out-of-range values reach validation instead
/// of failing to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCarouselConfig {
    /// Number of items
    pub item_count: i64,
    /// Autoplay interval in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: i64,
    /// Autoplay toggle
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
    /// Cooldown after manual navigation in milliseconds
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: i64,
    /// Breakpoints; empty means web defaults
    #[serde(default)]
    pub breakpoints: Vec<RawBreakpoint>,
}

#[allow(clippy::cast_possible_wrap)]
fn default_interval_ms() -> i64 {
    DEFAULT_AUTOPLAY_INTERVAL_MS as i64
}

fn default_autoplay() -> bool {
    true
}

#[allow(clippy::cast_possible_wrap)]
fn default_cooldown_ms() -> i64 {
    DEFAULT_PAUSE_COOLDOWN_MS as i64
}

impl TryFrom<RawCarouselConfig> for CarouselConfig {
    type Error = ConfigError;

    fn try_from(raw: RawCarouselConfig) -> Result<Self, Self::Error> {
        let item_count = usize::try_from(raw.item_count)
            .map_err(|_| ConfigError::NegativeItemCount(raw.item_count))?;
        let interval_ms = u64::try_from(raw.interval_ms)
            .ok()
            .filter(|ms| *ms > 0)
            .ok_or(ConfigError::NonPositiveInterval(raw.interval_ms))?;
        // A negative cooldown means "resume immediately".
        let cooldown_ms = u64::try_from(raw.cooldown_ms).unwrap_or(0);

        let breakpoints = if raw.breakpoints.is_empty() {
            Breakpoints::web_default()
        } else {
            let mut entries = Vec::with_capacity(raw.breakpoints.len());
            for bp in &raw.breakpoints {
                let min_width = u32::try_from(bp.min_width)
                    .map_err(|_| ConfigError::NegativeBreakpointWidth(bp.min_width))?;
                // Negative counts are treated like zero.
                let visible_count = usize::try_from(bp.visible).unwrap_or(0);
                entries.push(Breakpoint::new(min_width, visible_count));
            }
            Breakpoints::new(entries)?
        };

        Ok(Self {
            item_count,
            autoplay_interval: Duration::from_millis(interval_ms),
            autoplay_enabled: raw.autoplay,
            breakpoints,
            pause_cooldown: Duration::from_millis(cooldown_ms),
            swipe_threshold: SWIPE_THRESHOLD,
        })
    }
}
