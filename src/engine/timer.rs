//! Timer handles owned by the engines.
//!
//! Timers never run on their own. The host loop polls them with the current
//! instant and they report whether they fired. Cancelling a timer drops its
//! schedule, so a cancelled timer can never fire again until re-armed.

use std::time::{Duration, Instant};

/// Recurring timer with a fixed period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTimer {
    period: Duration,
    next_due: Option<Instant>,
}

impl IntervalTimer {
    /// Creates a disarmed timer.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// Arms the timer so that it first fires one period after `now`.
    ///
    /// Re-arming an armed timer restarts the period.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    /// Drops the schedule.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Returns true while a fire is scheduled.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Configured period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Instant of the next fire, if armed.
    #[must_use]
    pub const fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Returns true if the timer fired at or before `now`.
    ///
    /// Missed periods are coalesced into a single fire and the next one is
    /// scheduled a full period after `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}

/// One-shot deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// Creates an unset deadline.
    #[must_use]
    pub const fn new() -> Self {
        Self { at: None }
    }

    /// Sets the deadline `after` from `now`, replacing any pending one.
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.at = Some(now + after);
    }

    /// Clears the deadline.
    pub fn cancel(&mut self) {
        self.at = None;
    }

    /// Returns true while the deadline is set and not yet reached.
    #[must_use]
    pub fn is_pending(&self, now: Instant) -> bool {
        self.at.is_some_and(|at| now < at)
    }

    /// Returns true once if the deadline was reached, clearing it.
    pub fn take_expired(&mut self, now: Instant) -> bool {
        match self.at {
            Some(at) if now >= at => {
                self.at = None;
                true
            }
            _ => false,
        }
    }

    /// Instant the deadline is set for.
    #[must_use]
    pub const fn at(&self) -> Option<Instant> {
        self.at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_fires_once_per_period() {
        let start = Instant::now();
        let mut timer = IntervalTimer::new(Duration::from_millis(100));
        assert!(!timer.poll(start + Duration::from_millis(500)));

        timer.start(start);
        assert!(!timer.poll(start + Duration::from_millis(99)));
        assert!(timer.poll(start + Duration::from_millis(100)));
        assert!(!timer.poll(start + Duration::from_millis(150)));
        assert!(timer.poll(start + Duration::from_millis(200)));
    }

    #[test]
    fn test_interval_coalesces_missed_periods() {
        let start = Instant::now();
        let mut timer = IntervalTimer::new(Duration::from_millis(100));
        timer.start(start);

        assert!(timer.poll(start + Duration::from_millis(1000)));
        assert!(!timer.poll(start + Duration::from_millis(1050)));
        assert_eq!(timer.next_due(), Some(start + Duration::from_millis(1100)));
    }

    #[test]
    fn test_cancelled_interval_never_fires() {
        let start = Instant::now();
        let mut timer = IntervalTimer::new(Duration::from_millis(100));
        timer.start(start);
        timer.cancel();

        assert!(!timer.is_armed());
        assert!(!timer.poll(start + Duration::from_secs(10)));
    }

    #[test]
    fn test_deadline_expires_once() {
        let start = Instant::now();
        let mut deadline = Deadline::new();
        deadline.arm(start, Duration::from_millis(2500));

        assert!(deadline.is_pending(start + Duration::from_millis(2499)));
        assert!(!deadline.take_expired(start + Duration::from_millis(2499)));
        assert!(deadline.take_expired(start + Duration::from_millis(2500)));
        assert!(!deadline.take_expired(start + Duration::from_millis(3000)));
        assert!(!deadline.is_pending(start + Duration::from_millis(3000)));
    }
}
