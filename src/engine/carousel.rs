//! Auto-rotating carousel engine.
//!
//! The engine owns the index window, the visible-item count, the autoplay
//! timer and every reason autoplay may be held back. Hosts read its derived
//! values when rendering and forward user interaction as commands.
//!
//! # Playback
//!
//! The engine is either autoplaying or paused. It pauses while any hold is
//! active (hover, focus, touch, explicit pause) and for a cooldown after each
//! manual navigation. It only resumes once every hold is released *and* the
//! cooldown has elapsed. With autoplay disabled or reduced motion requested it
//! stays paused and its timer is never armed.
//!
//! # Timers
//!
//! The autoplay [`IntervalTimer`] runs only while the engine is autoplaying.
//! It is cancelled on every transition into the paused state and restarted
//! from scratch on resume, so the first automatic advance after a resume
//! always waits a full interval. [`CarouselEngine::dispose`] (also run on
//! drop) cancels every timer for good.

use serde::Serialize;
use std::ops::Range;
use std::time::Instant;
use tracing::debug;

use super::clock::{Clock, SystemClock};
use super::config::{CarouselConfig, ConfigError};
use super::holds::Holds;
use super::timer::{Deadline, IntervalTimer};

/// Viewport facts supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Current viewport width in the breakpoints' unit
    pub width: u32,
    /// User asked for reduced motion
    pub reduced_motion: bool,
}

impl Viewport {
    /// Creates a viewport without a reduced-motion preference.
    #[must_use]
    pub const fn new(width: u32) -> Self {
        Self {
            width,
            reduced_motion: false,
        }
    }

    /// Sets the reduced-motion preference.
    #[must_use]
    pub const fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }
}

/// Playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// Timer armed, ticks advance the index
    Autoplaying,
    /// Ticks are ignored
    Paused,
}

/// Direction of the most recent index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Towards higher indices (or wrapped to the start)
    #[default]
    Forward,
    /// Towards lower indices (or wrapped to the end)
    Backward,
}

/// Read-only view of the engine, handed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselSnapshot {
    /// First visible item
    pub current_index: usize,
    /// Items shown side by side
    pub visible_count: usize,
    /// Items in the rotation
    pub item_count: usize,
    /// Largest valid `current_index`
    pub max_index: usize,
    /// Whether ticks are currently ignored
    pub is_paused: bool,
    /// Last navigation direction
    pub direction: Direction,
}

/// Handle returned by [`CarouselEngine::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&CarouselSnapshot)>;

/// Carousel state machine.
pub struct CarouselEngine<C: Clock = SystemClock> {
    config: CarouselConfig,
    clock: C,
    item_count: usize,
    current_index: usize,
    visible_count: usize,
    direction: Direction,
    autoplay_enabled: bool,
    reduced_motion: bool,
    holds: Holds,
    cooldown: Deadline,
    last_interaction_at: Option<Instant>,
    autoplay: IntervalTimer,
    /// Pause state the timer was last synchronised with
    timer_paused: bool,
    touch_origin: Option<i32>,
    disposed: bool,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl<C: Clock> std::fmt::Debug for CarouselEngine<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselEngine")
            .field("item_count", &self.item_count)
            .field("current_index", &self.current_index)
            .field("visible_count", &self.visible_count)
            .field("holds", &self.holds)
            .field("autoplay", &self.autoplay)
            .field("disposed", &self.disposed)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl CarouselEngine<SystemClock> {
    /// Creates an engine driven by the system clock.
    pub fn new(config: CarouselConfig, viewport: Viewport) -> Result<Self, ConfigError> {
        Self::with_clock(config, viewport, SystemClock)
    }
}

impl<C: Clock> CarouselEngine<C> {
    /// Creates an engine reading time from `clock`.
    ///
    /// Starts at index 0 with the visible count for `viewport.width`. Arms
    /// the autoplay timer unless autoplay is disabled or reduced motion is
    /// requested.
    pub fn with_clock(
        config: CarouselConfig,
        viewport: Viewport,
        clock: C,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let visible_count = config.breakpoints.evaluate(viewport.width);
        let mut engine = Self {
            item_count: config.item_count,
            current_index: 0,
            visible_count,
            direction: Direction::Forward,
            autoplay_enabled: config.autoplay_enabled,
            reduced_motion: viewport.reduced_motion,
            holds: Holds::default(),
            cooldown: Deadline::new(),
            last_interaction_at: None,
            autoplay: IntervalTimer::new(config.autoplay_interval),
            timer_paused: true,
            touch_origin: None,
            disposed: false,
            observers: Vec::new(),
            next_subscription: 0,
            config,
            clock,
        };

        let now = engine.clock.now();
        engine.sync_timer(now);
        debug!(
            items = engine.item_count,
            visible = engine.visible_count,
            autoplay = engine.autoplay_active(),
            "carousel initialized"
        );
        Ok(engine)
    }

    // === Derived values ===

    /// Index of the first visible item.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Items shown side by side; never 0.
    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Items in the rotation.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Largest valid index: `max(0, item_count - visible_count)`.
    #[must_use]
    pub const fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.visible_count)
    }

    /// Number of pagination stops, 0 when there is nothing to show.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        if self.item_count == 0 {
            0
        } else {
            self.max_index() + 1
        }
    }

    /// Item in the middle of the visible window.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        if self.item_count == 0 {
            return None;
        }
        Some((self.current_index + self.visible_count / 2).min(self.item_count - 1))
    }

    /// Indices of the items currently on screen.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.current_index + self.visible_count).min(self.item_count);
        self.current_index.min(end)..end
    }

    /// Track translation as a percentage of the full strip.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn translate_percent(&self) -> f64 {
        if self.item_count == 0 {
            return 0.0;
        }
        -(self.current_index as f64 * 100.0 / self.item_count as f64)
    }

    /// Track translation for fixed-width items separated by `gap`.
    #[must_use]
    pub const fn offset(&self, item_width: u32, gap: u32) -> u64 {
        self.current_index as u64 * (item_width as u64 + gap as u64)
    }

    /// Human-readable position, e.g. "Showing 2 of 4".
    #[must_use]
    pub fn status_label(&self) -> String {
        if self.item_count == 0 {
            return "No items".to_string();
        }
        let total = self.page_count();
        format!("Showing {} of {}", (self.current_index + 1).min(total), total)
    }

    /// Direction of the last index change.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether automatic rotation is permitted at all.
    #[must_use]
    pub const fn autoplay_active(&self) -> bool {
        self.autoplay_enabled && !self.reduced_motion && !self.disposed
    }

    /// Whether transitions should animate.
    #[must_use]
    pub const fn animations_enabled(&self) -> bool {
        !self.reduced_motion
    }

    /// Whether ticks are currently ignored.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused_at(self.clock.now())
    }

    /// Current playback state.
    #[must_use]
    pub fn playback_state(&self) -> PlaybackState {
        if self.is_paused() {
            PlaybackState::Paused
        } else {
            PlaybackState::Autoplaying
        }
    }

    /// When the last manual navigation happened.
    #[must_use]
    pub const fn last_interaction_at(&self) -> Option<Instant> {
        self.last_interaction_at
    }

    /// True while the autoplay timer is scheduled.
    #[must_use]
    pub const fn timer_armed(&self) -> bool {
        self.autoplay.is_armed()
    }

    /// True once [`dispose`](Self::dispose) has run.
    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Engine configuration.
    #[must_use]
    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Copies the observable state.
    #[must_use]
    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            current_index: self.current_index,
            visible_count: self.visible_count,
            item_count: self.item_count,
            max_index: self.max_index(),
            is_paused: self.is_paused(),
            direction: self.direction,
        }
    }

    // === Navigation ===

    /// Moves one step forward, wrapping to 0 past the last index.
    ///
    /// This is the raw move used by autoplay; it does not pause. Use
    /// [`next`](Self::next) for user commands.
    pub fn advance(&mut self) {
        self.mutate(Self::step_forward);
    }

    /// Moves one step back, wrapping to the last index before 0.
    ///
    /// Does not pause; use [`previous`](Self::previous) for user commands.
    pub fn retreat(&mut self) {
        self.mutate(Self::step_backward);
    }

    /// User "next": advances and starts a transient pause.
    pub fn next(&mut self) {
        self.mutate(|engine| {
            engine.step_forward();
            engine.begin_transient_pause();
        });
    }

    /// User "previous": retreats and starts a transient pause.
    pub fn previous(&mut self) {
        self.mutate(|engine| {
            engine.step_backward();
            engine.begin_transient_pause();
        });
    }

    /// User jump (pagination dots). Clamps into range, never wraps, and
    /// starts a transient pause.
    pub fn go_to(&mut self, target: i64) {
        self.mutate(|engine| {
            let max = engine.max_index();
            let clamped = usize::try_from(target).unwrap_or(0).min(max);
            if clamped != engine.current_index {
                engine.direction = if clamped > engine.current_index {
                    Direction::Forward
                } else {
                    Direction::Backward
                };
                engine.current_index = clamped;
            }
            engine.begin_transient_pause();
        });
    }

    /// Autoplay tick: advances unless paused or autoplay is off.
    pub fn tick(&mut self) {
        self.mutate(|engine| {
            let now = engine.clock.now();
            if !engine.paused_at(now) {
                engine.step_forward();
            }
        });
    }

    /// Drives timers from the host loop.
    ///
    /// Expires the manual-navigation cooldown, then performs at most one
    /// autoplay tick if the timer is due. Returns true if observable state
    /// changed.
    pub fn poll(&mut self) -> bool {
        self.mutate(|engine| {
            let now = engine.clock.now();
            if engine.cooldown.take_expired(now) {
                debug!("manual navigation cooldown elapsed");
            }
            // Resuming re-arms the timer in `mutate`; a fire is only possible
            // if it was already armed before this poll.
            if engine.autoplay.poll(now) && !engine.paused_at(now) {
                engine.step_forward();
            }
        })
    }

    // === Pause control ===

    /// Sets or clears the explicit pause.
    ///
    /// Clearing it also cancels a pending manual-navigation cooldown. Hover,
    /// focus and touch holds are left alone.
    pub fn set_paused(&mut self, paused: bool) {
        self.mutate(|engine| {
            engine.holds.explicit = paused;
            if !paused {
                engine.cooldown.cancel();
            }
        });
    }

    /// Flips the explicit pause (Space/Enter on a focused carousel).
    pub fn toggle_paused(&mut self) {
        let paused = !self.holds.explicit;
        self.set_paused(paused);
    }

    /// Escape: clears the explicit pause and drops focus.
    pub fn release(&mut self) {
        self.mutate(|engine| {
            engine.holds.explicit = false;
            engine.holds.focus = false;
            engine.cooldown.cancel();
        });
    }

    /// Pointer entered the carousel.
    pub fn pointer_enter(&mut self) {
        self.mutate(|engine| engine.holds.hover = true);
    }

    /// Pointer left the carousel.
    pub fn pointer_leave(&mut self) {
        self.mutate(|engine| engine.holds.hover = false);
    }

    /// Keyboard focus moved into the carousel.
    pub fn focus_in(&mut self) {
        self.mutate(|engine| engine.holds.focus = true);
    }

    /// Keyboard focus left the carousel.
    pub fn focus_out(&mut self) {
        self.mutate(|engine| engine.holds.focus = false);
    }

    /// Touch began at horizontal position `x`.
    pub fn touch_start(&mut self, x: i32) {
        self.mutate(|engine| {
            engine.holds.touch = true;
            engine.touch_origin = Some(x);
        });
    }

    /// Touch ended at horizontal position `x`.
    ///
    /// A rightward swipe longer than the threshold goes to the previous item,
    /// a leftward one to the next.
    pub fn touch_end(&mut self, x: i32) {
        self.mutate(|engine| {
            engine.holds.touch = false;
            let Some(origin) = engine.touch_origin.take() else {
                return;
            };
            let dx = i64::from(x) - i64::from(origin);
            let threshold = i64::from(engine.config.swipe_threshold);
            if dx > threshold {
                engine.step_backward();
                engine.begin_transient_pause();
            } else if dx < -threshold {
                engine.step_forward();
                engine.begin_transient_pause();
            }
        });
    }

    // === Reconfiguration ===

    /// Re-evaluates breakpoints for a new viewport width.
    ///
    /// Only ever clamps the index down; a wider viewport never moves it.
    pub fn recompute_visible_count(&mut self, width: u32) {
        self.mutate(|engine| {
            let visible = engine.config.breakpoints.evaluate(width);
            if visible != engine.visible_count {
                debug!(
                    from = engine.visible_count,
                    to = visible,
                    width,
                    "visible count changed"
                );
                engine.visible_count = visible;
                engine.clamp_index();
            }
        });
    }

    /// Items were added or removed after mount.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.mutate(|engine| {
            engine.item_count = item_count;
            engine.clamp_index();
        });
    }

    /// Turns autoplay on or off, cancelling or re-arming the timer.
    pub fn set_autoplay_enabled(&mut self, enabled: bool) {
        self.mutate(|engine| engine.autoplay_enabled = enabled);
    }

    /// Applies a changed reduced-motion preference.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        self.mutate(|engine| engine.reduced_motion = reduced_motion);
    }

    // === Observers ===

    /// Registers a callback run after every observable state change.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&CarouselSnapshot) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    // === Teardown ===

    /// Cancels every timer and drops observers. Further commands are ignored.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.autoplay.cancel();
        self.cooldown.cancel();
        self.observers.clear();
        self.disposed = true;
        debug!("carousel disposed");
    }

    // === Internals ===

    fn paused_at(&self, now: Instant) -> bool {
        !self.autoplay_active() || self.holds.any() || self.cooldown.is_pending(now)
    }

    fn step_forward(&mut self) {
        if self.max_index() == 0 {
            return;
        }
        self.direction = Direction::Forward;
        if self.current_index >= self.max_index() {
            self.current_index = 0;
        } else {
            self.current_index += 1;
        }
    }

    fn step_backward(&mut self) {
        if self.max_index() == 0 {
            return;
        }
        self.direction = Direction::Backward;
        if self.current_index == 0 {
            self.current_index = self.max_index();
        } else {
            self.current_index -= 1;
        }
    }

    fn clamp_index(&mut self) {
        self.current_index = self.current_index.min(self.max_index());
    }

    fn begin_transient_pause(&mut self) {
        let now = self.clock.now();
        self.last_interaction_at = Some(now);
        self.cooldown.arm(now, self.config.pause_cooldown);
    }

    /// Cancels the timer on entering the paused state and restarts it on
    /// leaving it.
    fn sync_timer(&mut self, now: Instant) {
        let paused = self.paused_at(now);
        if paused == self.timer_paused && (paused || self.autoplay.is_armed()) {
            return;
        }
        if paused {
            self.autoplay.cancel();
            debug!("autoplay paused");
        } else {
            self.autoplay.start(now);
            debug!("autoplay resumed");
        }
        self.timer_paused = paused;
    }

    /// Runs `change`, re-synchronises the timer and notifies observers if the
    /// snapshot differs. Returns whether it did.
    fn mutate(&mut self, change: impl FnOnce(&mut Self)) -> bool {
        if self.disposed {
            return false;
        }
        let before = self.snapshot();
        let timer_was_paused = self.timer_paused;
        change(self);
        let now = self.clock.now();
        self.sync_timer(now);

        let after = self.snapshot();
        if before == after && timer_was_paused == self.timer_paused {
            return false;
        }
        for (_, observer) in &mut self.observers {
            observer(&after);
        }
        true
    }
}

impl<C: Clock> Drop for CarouselEngine<C> {
    fn drop(&mut self) {
        self.dispose();
    }
}
