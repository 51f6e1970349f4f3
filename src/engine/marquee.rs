//! Continuous logo marquee.
//!
//! Unlike the carousel, a marquee has no index to step through: a strip of
//! items scrolls at constant speed and loops every `loop_period`. Hovering,
//! focusing or touching it freezes the strip in place, and Space/Enter toggle
//! an explicit pause. Reduced motion freezes it entirely.

use std::time::{Duration, Instant};
use tracing::debug;

use super::clock::{Clock, SystemClock};
use super::config::ConfigError;
use super::holds::Holds;

/// Constant-speed looping strip.
#[derive(Debug)]
pub struct Marquee<C: Clock = SystemClock> {
    item_count: usize,
    loop_period: Duration,
    clock: C,
    /// Progress banked from earlier running spans, in loops
    banked: f64,
    running_since: Option<Instant>,
    holds: Holds,
    reduced_motion: bool,
    disposed: bool,
}

impl Marquee<SystemClock> {
    /// Creates a marquee driven by the system clock.
    pub fn new(
        item_count: usize,
        loop_period: Duration,
        reduced_motion: bool,
    ) -> Result<Self, ConfigError> {
        Self::with_clock(item_count, loop_period, reduced_motion, SystemClock)
    }
}

impl<C: Clock> Marquee<C> {
    /// Creates a marquee reading time from `clock`.
    pub fn with_clock(
        item_count: usize,
        loop_period: Duration,
        reduced_motion: bool,
        clock: C,
    ) -> Result<Self, ConfigError> {
        if loop_period.is_zero() {
            return Err(ConfigError::NonPositiveInterval(0));
        }
        let mut marquee = Self {
            item_count,
            loop_period,
            clock,
            banked: 0.0,
            running_since: None,
            holds: Holds::default(),
            reduced_motion,
            disposed: false,
        };
        marquee.sync();
        Ok(marquee)
    }

    /// Position within the current loop, in `[0, 1)`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let running = self.running_since.map_or(0.0, |since| {
            self.clock.now().duration_since(since).as_secs_f64() / self.loop_period.as_secs_f64()
        });
        (self.banked + running).fract()
    }

    /// Item currently at the leading edge of the strip.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn leading_item(&self) -> Option<usize> {
        if self.item_count == 0 {
            return None;
        }
        let index = (self.progress() * self.item_count as f64).floor() as usize;
        Some(index.min(self.item_count - 1))
    }

    /// Horizontal scroll offset for a strip `strip_width` cells wide.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn offset(&self, strip_width: usize) -> usize {
        if strip_width == 0 {
            return 0;
        }
        ((self.progress() * strip_width as f64).floor() as usize).min(strip_width - 1)
    }

    /// Whether the strip is moving.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    /// Whether the user paused it explicitly.
    #[must_use]
    pub const fn is_explicitly_paused(&self) -> bool {
        self.holds.explicit
    }

    /// Items in the strip.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Space/Enter on the focused marquee.
    pub fn toggle_paused(&mut self) {
        self.holds.explicit = !self.holds.explicit;
        self.sync();
    }

    /// Escape: resume and drop focus.
    pub fn release(&mut self) {
        self.holds.explicit = false;
        self.holds.focus = false;
        self.sync();
    }

    /// Pointer entered the strip.
    pub fn pointer_enter(&mut self) {
        self.holds.hover = true;
        self.sync();
    }

    /// Pointer left the strip.
    pub fn pointer_leave(&mut self) {
        self.holds.hover = false;
        self.sync();
    }

    /// Focus moved into the strip.
    pub fn focus_in(&mut self) {
        self.holds.focus = true;
        self.sync();
    }

    /// Focus left the strip.
    pub fn focus_out(&mut self) {
        self.holds.focus = false;
        self.sync();
    }

    /// Finger down.
    pub fn touch_start(&mut self) {
        self.holds.touch = true;
        self.sync();
    }

    /// Finger up.
    pub fn touch_end(&mut self) {
        self.holds.touch = false;
        self.sync();
    }

    /// Applies a changed reduced-motion preference.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        self.reduced_motion = reduced_motion;
        self.sync();
    }

    /// Items were added or removed.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
    }

    /// Stops the strip for good.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.sync();
    }

    fn should_run(&self) -> bool {
        !self.disposed && !self.reduced_motion && !self.holds.any()
    }

    fn sync(&mut self) {
        let now = self.clock.now();
        match (self.should_run(), self.running_since) {
            (true, None) => {
                self.running_since = Some(now);
                debug!("marquee running");
            }
            (false, Some(since)) => {
                self.banked = (self.banked
                    + now.duration_since(since).as_secs_f64() / self.loop_period.as_secs_f64())
                .fract();
                self.running_since = None;
                debug!("marquee frozen");
            }
            _ => {}
        }
    }
}
