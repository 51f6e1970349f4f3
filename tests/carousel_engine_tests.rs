//! Behavior tests for the carousel engine through the public API.
//!
//! Every test runs on a `ManualClock`, so timing is deterministic.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use carousel_tui::engine::{
    Breakpoint, Breakpoints, CarouselConfig, CarouselEngine, ConfigError, ManualClock, Viewport,
};

const INTERVAL_MS: u64 = 1000;

fn engine(items: usize, visible: usize) -> (CarouselEngine<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let config = CarouselConfig::new(items)
        .with_interval(Duration::from_millis(INTERVAL_MS))
        .with_breakpoints(Breakpoints::fixed(visible));
    let engine = CarouselEngine::with_clock(config, Viewport::new(1000), clock.clone()).unwrap();
    (engine, clock)
}

/// Advances in 100ms steps, polling like the TUI loop does.
fn run_for(engine: &mut CarouselEngine<ManualClock>, clock: &ManualClock, ms: u64) {
    for _ in 0..ms / 100 {
        clock.advance_ms(100);
        engine.poll();
    }
}

#[test]
fn test_index_stays_in_bounds_under_mixed_operations() {
    let (mut engine, clock) = engine(7, 3);
    let targets = [-4_i64, 0, 2, 9, 100, 3];
    for (step, target) in targets.iter().cycle().take(60).enumerate() {
        match step % 5 {
            0 => engine.next(),
            1 => engine.previous(),
            2 => engine.go_to(*target),
            3 => engine.recompute_visible_count(u32::try_from(step * 37).unwrap()),
            _ => run_for(&mut engine, &clock, 300),
        }
        assert!(engine.current_index() <= engine.max_index());
    }
}

#[test]
fn test_wraparound_is_symmetric() {
    let (mut engine, _clock) = engine(6, 2);
    assert_eq!(engine.max_index(), 4);

    engine.go_to(4);
    engine.advance();
    assert_eq!(engine.current_index(), 0);

    engine.retreat();
    assert_eq!(engine.current_index(), 4);
}

#[test]
fn test_all_items_visible_is_inert() {
    let (mut engine, clock) = engine(3, 3);
    engine.next();
    engine.previous();
    engine.go_to(2);
    run_for(&mut engine, &clock, 10_000);
    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.page_count(), 1);
}

#[test]
fn test_resize_clamps_index_down() {
    let clock = ManualClock::new();
    let breakpoints = Breakpoints::new(vec![
        Breakpoint {
            min_width: 0,
            visible_count: 3,
        },
        Breakpoint {
            min_width: 1200,
            visible_count: 5,
        },
    ])
    .unwrap();
    let config = CarouselConfig::new(10).with_breakpoints(breakpoints);
    let mut engine = CarouselEngine::with_clock(config, Viewport::new(800), clock).unwrap();

    engine.go_to(7);
    assert_eq!(engine.current_index(), 7);

    engine.recompute_visible_count(1400);
    assert_eq!(engine.visible_count(), 5);
    assert_eq!(engine.current_index(), 5);

    // Narrowing again does not move it back up.
    engine.recompute_visible_count(800);
    assert_eq!(engine.current_index(), 5);
}

#[test]
fn test_explicit_pause_suppresses_autoplay() {
    let (mut engine, clock) = engine(5, 1);
    engine.set_paused(true);
    run_for(&mut engine, &clock, 5 * INTERVAL_MS);
    assert_eq!(engine.current_index(), 0);

    engine.set_paused(false);
    run_for(&mut engine, &clock, INTERVAL_MS);
    assert_eq!(engine.current_index(), 1);
}

#[test]
fn test_manual_navigation_cooldown() {
    let (mut engine, clock) = engine(5, 1);
    engine.next();
    assert_eq!(engine.current_index(), 1);
    assert!(engine.is_paused());

    run_for(&mut engine, &clock, 2400);
    assert!(engine.is_paused());
    assert_eq!(engine.current_index(), 1);

    run_for(&mut engine, &clock, 100);
    assert!(!engine.is_paused());

    // The interval restarts from the resume, not from the last tick.
    run_for(&mut engine, &clock, INTERVAL_MS - 100);
    assert_eq!(engine.current_index(), 1);
    run_for(&mut engine, &clock, 100);
    assert_eq!(engine.current_index(), 2);
}

#[test]
fn test_go_to_never_wraps() {
    let (mut engine, _clock) = engine(5, 2);
    engine.go_to(10);
    assert_eq!(engine.current_index(), 3);
    engine.go_to(-1);
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn test_single_column_sequence() {
    let (mut engine, _clock) = engine(5, 1);
    let mut seen = Vec::new();
    for _ in 0..5 {
        engine.advance();
        seen.push(engine.current_index());
    }
    assert_eq!(seen, vec![1, 2, 3, 4, 0]);
}

#[test]
fn test_two_columns_go_to_clamps() {
    let (mut engine, _clock) = engine(5, 2);
    engine.go_to(10);
    assert_eq!(engine.current_index(), 3);
    assert_eq!(engine.visible_range(), 3..5);
    assert_eq!(engine.status_label(), "Showing 4 of 4");
}

#[test]
fn test_observers_see_changes_until_unsubscribed() {
    let (mut engine, clock) = engine(4, 1);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = engine.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.current_index));

    run_for(&mut engine, &clock, 2 * INTERVAL_MS);
    engine.go_to(3);
    assert_eq!(*seen.borrow(), vec![1, 2, 3]);

    assert!(engine.unsubscribe(id));
    engine.previous();
    assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn test_dispose_stops_everything() {
    let (mut engine, clock) = engine(4, 1);
    engine.dispose();
    assert!(engine.is_disposed());
    assert!(!engine.timer_armed());

    run_for(&mut engine, &clock, 5 * INTERVAL_MS);
    engine.next();
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let config = CarouselConfig::new(3).with_interval(Duration::ZERO);
    let err = CarouselEngine::new(config, Viewport::new(320)).unwrap_err();
    assert_eq!(err, ConfigError::NonPositiveInterval(0));

    let err = Breakpoints::new(vec![
        Breakpoint {
            min_width: 500,
            visible_count: 2,
        },
        Breakpoint {
            min_width: 500,
            visible_count: 3,
        },
    ])
    .unwrap_err();
    assert_eq!(err, ConfigError::DuplicateBreakpoint { min_width: 500 });
}
