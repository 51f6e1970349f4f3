//! Rotation engines independent of any renderer.
//!
//! - [`CarouselEngine`]: stepping carousel with autoplay, pause holds and
//!   manual-navigation cooldown
//! - [`breakpoints`]: viewport width to visible-item count
//! - [`Marquee`]: constant-speed looping strip
//! - [`Accordion`]: single-open panel list
//!
//! Engines are single-threaded and own their timers. Hosts call `poll` from
//! their event loop after handling input.

pub mod accordion;
pub mod breakpoints;
pub mod carousel;
pub mod clock;
pub mod config;
mod holds;
pub mod marquee;
pub mod timer;

pub use accordion::Accordion;
pub use breakpoints::{evaluate, Breakpoint, Breakpoints};
pub use carousel::{
    CarouselEngine, CarouselSnapshot, Direction, PlaybackState, SubscriptionId, Viewport,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{CarouselConfig, ConfigError, RawBreakpoint, RawCarouselConfig};
pub use marquee::Marquee;
pub use timer::{Deadline, IntervalTimer};
