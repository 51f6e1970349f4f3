//! Responsive visible-item counting.
//!
//! A carousel shows a different number of items side by side depending on how
//! wide its viewport is. Breakpoints map a minimum width to that count.

use serde::{Deserialize, Serialize};

use super::config::ConfigError;

/// A `(min_width, visible_count)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Smallest viewport width this breakpoint applies to
    pub min_width: u32,
    /// Items shown side by side at or above `min_width`
    pub visible_count: usize,
}

impl Breakpoint {
    /// Creates a breakpoint.
    #[must_use]
    pub const fn new(min_width: u32, visible_count: usize) -> Self {
        Self {
            min_width,
            visible_count,
        }
    }
}

/// Validated breakpoint list, sorted by ascending `min_width`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breakpoints {
    entries: Vec<Breakpoint>,
}

impl Breakpoints {
    /// Builds a list from breakpoints in any order.
    ///
    /// Rejects zero visible counts and repeated thresholds.
    pub fn new(mut entries: Vec<Breakpoint>) -> Result<Self, ConfigError> {
        entries.sort_by_key(|bp| bp.min_width);

        for pair in entries.windows(2) {
            if pair[0].min_width == pair[1].min_width {
                return Err(ConfigError::DuplicateBreakpoint {
                    min_width: pair[0].min_width,
                });
            }
        }
        if let Some(bp) = entries.iter().find(|bp| bp.visible_count == 0) {
            return Err(ConfigError::ZeroVisibleCount {
                min_width: bp.min_width,
            });
        }

        Ok(Self { entries })
    }

    /// A single breakpoint showing `count` items at every width.
    #[must_use]
    pub fn fixed(count: usize) -> Self {
        Self {
            entries: vec![Breakpoint::new(0, count.max(1))],
        }
    }

    /// Pixel breakpoints used by the website: 1 item on phones, 2 from 768px,
    /// 3 from 1024px.
    #[must_use]
    pub fn web_default() -> Self {
        Self {
            entries: vec![
                Breakpoint::new(0, 1),
                Breakpoint::new(768, 2),
                Breakpoint::new(1024, 3),
            ],
        }
    }

    /// Column breakpoints for terminal hosts.
    #[must_use]
    pub fn terminal_default() -> Self {
        Self {
            entries: vec![
                Breakpoint::new(0, 1),
                Breakpoint::new(80, 2),
                Breakpoint::new(140, 3),
            ],
        }
    }

    /// Breakpoints in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[Breakpoint] {
        &self.entries
    }

    /// Visible count for `width`.
    #[must_use]
    pub fn evaluate(&self, width: u32) -> usize {
        evaluate(width, &self.entries)
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::web_default()
    }
}

/// Maps a viewport width to a visible-item count.
///
/// Scans from the largest threshold down and returns the first one that fits
/// inside `width`. A viewport narrower than every threshold gets the smallest
/// breakpoint's count. The result is never below 1.
///
/// `breakpoints` does not need to be sorted.
#[must_use]
pub fn evaluate(width: u32, breakpoints: &[Breakpoint]) -> usize {
    let mut sorted: Vec<&Breakpoint> = breakpoints.iter().collect();
    sorted.sort_by_key(|bp| std::cmp::Reverse(bp.min_width));

    let count = sorted
        .iter()
        .find(|bp| bp.min_width <= width)
        .or_else(|| sorted.last())
        .map_or(1, |bp| bp.visible_count);

    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_largest_qualifying_threshold_wins() {
        let bps = Breakpoints::web_default();
        assert_eq!(bps.evaluate(320), 1);
        assert_eq!(bps.evaluate(767), 1);
        assert_eq!(bps.evaluate(768), 2);
        assert_eq!(bps.evaluate(1023), 2);
        assert_eq!(bps.evaluate(1024), 3);
        assert_eq!(bps.evaluate(4000), 3);
    }

    #[test]
    fn test_narrower_than_smallest_threshold_uses_smallest() {
        let bps = [Breakpoint::new(600, 2), Breakpoint::new(1200, 4)];
        assert_eq!(evaluate(100, &bps), 2);
    }

    #[test]
    fn test_unsorted_input() {
        let bps = [
            Breakpoint::new(1024, 3),
            Breakpoint::new(0, 1),
            Breakpoint::new(768, 2),
        ];
        assert_eq!(evaluate(900, &bps), 2);
    }

    #[test]
    fn test_never_below_one() {
        assert_eq!(evaluate(500, &[]), 1);
        assert_eq!(evaluate(500, &[Breakpoint::new(0, 0)]), 1);
    }

    #[test]
    fn test_new_rejects_duplicates_and_zero_counts() {
        let dup = Breakpoints::new(vec![Breakpoint::new(80, 2), Breakpoint::new(80, 3)]);
        assert_eq!(
            dup.unwrap_err(),
            ConfigError::DuplicateBreakpoint { min_width: 80 }
        );

        let zero = Breakpoints::new(vec![Breakpoint::new(0, 1), Breakpoint::new(80, 0)]);
        assert_eq!(
            zero.unwrap_err(),
            ConfigError::ZeroVisibleCount { min_width: 80 }
        );
    }

    #[test]
    fn test_new_sorts_entries() {
        let bps = Breakpoints::new(vec![Breakpoint::new(140, 3), Breakpoint::new(0, 1)]).unwrap();
        assert_eq!(bps.as_slice()[0].min_width, 0);
        assert_eq!(bps.as_slice()[1].min_width, 140);
    }
}
