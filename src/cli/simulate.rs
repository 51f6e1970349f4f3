//! Headless carousel simulation.
//!
//! Drives a [`CarouselEngine`] on a manual clock and prints a snapshot after
//! every step, so autoplay and pause behavior can be checked from scripts.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{DEFAULT_AUTOPLAY_INTERVAL_MS, DEFAULT_PAUSE_COOLDOWN_MS};
use crate::engine::{
    CarouselConfig, CarouselEngine, CarouselSnapshot, ManualClock, RawCarouselConfig, Viewport,
};

/// Simulate a carousel without a terminal
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Number of items
    #[arg(long, allow_hyphen_values = true)]
    items: i64,

    /// Viewport width in pixels (web breakpoints: 768 → 2, 1024 → 3)
    #[arg(long)]
    width: u32,

    /// Autoplay ticks to run when no --step is given
    #[arg(long, default_value_t = 5)]
    ticks: u32,

    /// Autoplay interval in milliseconds
    #[arg(
        long,
        default_value_t = DEFAULT_AUTOPLAY_INTERVAL_MS as i64,
        allow_hyphen_values = true
    )]
    interval_ms: i64,

    /// Manual-navigation cooldown in milliseconds
    #[arg(
        long,
        default_value_t = DEFAULT_PAUSE_COOLDOWN_MS as i64,
        allow_hyphen_values = true
    )]
    cooldown_ms: i64,

    /// Start with autoplay disabled
    #[arg(long)]
    no_autoplay: bool,

    /// Start with reduced motion requested
    #[arg(long)]
    reduced_motion: bool,

    /// Scripted step, repeatable: next, prev, goto:N, tick, wait:MS, hover,
    /// leave, focus, blur, pause, resume, release, resize:W, swipe:DX
    #[arg(long = "step", value_name = "STEP")]
    steps: Vec<Step>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// One scripted interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Manual next
    Next,
    /// Manual previous
    Previous,
    /// Manual jump
    GoTo(i64),
    /// Raw autoplay tick, bypassing the timer
    Tick,
    /// Advance the clock and poll once
    Wait(u64),
    /// Pointer enters
    Hover,
    /// Pointer leaves
    Leave,
    /// Keyboard focus in
    Focus,
    /// Keyboard focus out
    Blur,
    /// Explicit pause
    Pause,
    /// Clear explicit pause
    Resume,
    /// Escape
    Release,
    /// New viewport width
    Resize(u32),
    /// Touch gesture travelling `dx` pixels
    Swipe(i32),
}

fn step_value<T: FromStr>(step: &str, arg: Option<&str>) -> Result<T, String> {
    let arg = arg.ok_or_else(|| format!("step '{step}' needs a value, e.g. {step}:3"))?;
    arg.parse()
        .map_err(|_| format!("invalid value for step '{step}': {arg}"))
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        let step = match name {
            "next" => Self::Next,
            "prev" | "previous" => Self::Previous,
            "goto" => Self::GoTo(step_value(name, arg)?),
            "tick" => Self::Tick,
            "wait" => Self::Wait(step_value(name, arg)?),
            "hover" => Self::Hover,
            "leave" => Self::Leave,
            "focus" => Self::Focus,
            "blur" => Self::Blur,
            "pause" => Self::Pause,
            "resume" => Self::Resume,
            "release" => Self::Release,
            "resize" => Self::Resize(step_value(name, arg)?),
            "swipe" => Self::Swipe(step_value(name, arg)?),
            _ => return Err(format!("unknown step: {s}")),
        };
        Ok(step)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => write!(f, "next"),
            Self::Previous => write!(f, "prev"),
            Self::GoTo(index) => write!(f, "goto:{index}"),
            Self::Tick => write!(f, "tick"),
            Self::Wait(ms) => write!(f, "wait:{ms}"),
            Self::Hover => write!(f, "hover"),
            Self::Leave => write!(f, "leave"),
            Self::Focus => write!(f, "focus"),
            Self::Blur => write!(f, "blur"),
            Self::Pause => write!(f, "pause"),
            Self::Resume => write!(f, "resume"),
            Self::Release => write!(f, "release"),
            Self::Resize(width) => write!(f, "resize:{width}"),
            Self::Swipe(dx) => write!(f, "swipe:{dx}"),
        }
    }
}

/// State after one step.
#[derive(Serialize, Debug)]
pub struct Frame {
    /// Step that produced this frame
    pub step: String,
    /// Simulated time since start, in milliseconds
    pub elapsed_ms: u64,
    /// Human-readable position
    pub label: String,
    /// Engine state
    #[serde(flatten)]
    pub snapshot: CarouselSnapshot,
}

impl SimulateArgs {
    /// Execute simulate command
    pub fn execute(&self) -> Result<()> {
        let frames = self.run()?;

        if self.json {
            let json = serde_json::to_string_pretty(&frames)
                .context("Failed to serialize simulation to JSON")?;
            println!("{json}");
        } else {
            for frame in &frames {
                let state = if frame.snapshot.is_paused {
                    "paused"
                } else {
                    "autoplaying"
                };
                println!(
                    "{:>8}ms  {:<12} {} [{state}] index={} visible={}",
                    frame.elapsed_ms,
                    frame.step,
                    frame.label,
                    frame.snapshot.current_index,
                    frame.snapshot.visible_count
                );
            }
        }

        Ok(())
    }

    /// Runs the simulation and returns one frame per step, starting with the
    /// initial state.
    pub fn run(&self) -> Result<Vec<Frame>> {
        let config = CarouselConfig::try_from(RawCarouselConfig {
            item_count: self.items,
            interval_ms: self.interval_ms,
            autoplay: !self.no_autoplay,
            cooldown_ms: self.cooldown_ms,
            breakpoints: Vec::new(),
        })
        .context("Invalid carousel configuration")?;
        let interval = config.autoplay_interval;

        let clock = ManualClock::new();
        let viewport = Viewport::new(self.width).with_reduced_motion(self.reduced_motion);
        let mut engine = CarouselEngine::with_clock(config, viewport, clock.clone())
            .context("Invalid carousel configuration")?;

        let steps = if self.steps.is_empty() {
            let wait = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
            vec![Step::Wait(wait); self.ticks as usize]
        } else {
            self.steps.clone()
        };

        let mut frames = vec![frame("init", &engine, &clock)];
        for step in steps {
            apply(&mut engine, &clock, step);
            frames.push(frame(&step.to_string(), &engine, &clock));
        }

        engine.dispose();
        Ok(frames)
    }
}

fn apply(engine: &mut CarouselEngine<ManualClock>, clock: &ManualClock, step: Step) {
    match step {
        Step::Next => engine.next(),
        Step::Previous => engine.previous(),
        Step::GoTo(index) => engine.go_to(index),
        Step::Tick => engine.tick(),
        Step::Wait(ms) => {
            clock.advance(Duration::from_millis(ms));
            engine.poll();
        }
        Step::Hover => engine.pointer_enter(),
        Step::Leave => engine.pointer_leave(),
        Step::Focus => engine.focus_in(),
        Step::Blur => engine.focus_out(),
        Step::Pause => engine.set_paused(true),
        Step::Resume => engine.set_paused(false),
        Step::Release => engine.release(),
        Step::Resize(width) => engine.recompute_visible_count(width),
        Step::Swipe(dx) => {
            engine.touch_start(0);
            engine.touch_end(dx);
        }
    }
}

fn frame(step: &str, engine: &CarouselEngine<ManualClock>, clock: &ManualClock) -> Frame {
    Frame {
        step: step.to_string(),
        elapsed_ms: u64::try_from(clock.elapsed().as_millis()).unwrap_or(u64::MAX),
        label: engine.status_label(),
        snapshot: engine.snapshot(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: SimulateArgs,
    }

    fn run(argv: &[&str]) -> Result<Vec<Frame>> {
        let mut full = vec!["simulate"];
        full.extend_from_slice(argv);
        TestCli::try_parse_from(full).unwrap().args.run()
    }

    fn indices(frames: &[Frame]) -> Vec<usize> {
        frames.iter().map(|f| f.snapshot.current_index).collect()
    }

    #[test]
    fn test_step_parsing() {
        assert_eq!("next".parse::<Step>(), Ok(Step::Next));
        assert_eq!("goto:-3".parse::<Step>(), Ok(Step::GoTo(-3)));
        assert_eq!("wait:2500".parse::<Step>(), Ok(Step::Wait(2500)));
        assert_eq!("swipe:-60".parse::<Step>(), Ok(Step::Swipe(-60)));
        assert!("goto".parse::<Step>().is_err());
        assert!("wait:soon".parse::<Step>().is_err());
        assert!("jump".parse::<Step>().is_err());
    }

    #[test]
    fn test_step_display_parses_back() {
        for step in [Step::Previous, Step::Resize(800), Step::Swipe(45)] {
            assert_eq!(step.to_string().parse::<Step>(), Ok(step));
        }
    }

    #[test]
    fn test_bad_step_is_usage_error() {
        let argv = [
            "simulate", "--items", "3", "--width", "320", "--step", "jump",
        ];
        let err = TestCli::try_parse_from(argv).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_default_run_wraps_single_column() {
        let frames = run(&["--items", "5", "--width", "320"]).unwrap();
        assert_eq!(indices(&frames), vec![0, 1, 2, 3, 4, 0]);
        assert_eq!(frames[0].step, "init");
        assert_eq!(frames[1].step, "wait:6000");
        assert_eq!(frames[5].elapsed_ms, 30_000);
        assert_eq!(frames[5].label, "Showing 1 of 5");
    }

    #[test]
    fn test_manual_step_pauses_autoplay() {
        let frames = run(&[
            "--items",
            "4",
            "--width",
            "320",
            "--interval-ms",
            "1000",
            "--step",
            "next",
            "--step",
            "wait:1000",
            "--step",
            "wait:2000",
            "--step",
            "wait:1000",
        ])
        .unwrap();
        assert_eq!(indices(&frames), vec![0, 1, 1, 1, 2]);
        assert!(frames[2].snapshot.is_paused);
        assert!(!frames[3].snapshot.is_paused);
    }

    #[test]
    fn test_goto_clamps_to_last_page() {
        let frames = run(&["--items", "5", "--width", "800", "--step", "goto:10"]).unwrap();
        assert_eq!(frames[1].snapshot.visible_count, 2);
        assert_eq!(frames[1].snapshot.max_index, 3);
        assert_eq!(frames[1].snapshot.current_index, 3);
    }

    #[test]
    fn test_json_frame_fields() {
        let frames = run(&["--items", "3", "--width", "320", "--ticks", "1"]).unwrap();
        let json = serde_json::to_value(&frames).unwrap();
        let frame = &json[1];
        assert_eq!(frame["step"], "wait:6000");
        assert_eq!(frame["current_index"], 1);
        assert_eq!(frame["visible_count"], 1);
        assert_eq!(frame["max_index"], 2);
        assert_eq!(frame["label"], "Showing 2 of 3");
        assert_eq!(frame["is_paused"], false);
    }

    #[test]
    fn test_invalid_interval_is_rejected() {
        let err = run(&["--items", "3", "--width", "320", "--interval-ms", "0"]).unwrap_err();
        assert!(format!("{err:#}").contains("interval must be positive"));
    }
}
