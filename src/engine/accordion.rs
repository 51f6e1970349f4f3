//! Single-open accordion.
//!
//! Used for challenge and FAQ lists: at most one panel is open at a time,
//! activating the open panel closes it, and ArrowUp/ArrowDown move the focus
//! ring with wraparound.

use serde::Serialize;

/// Accordion state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
    focused: usize,
}

impl Accordion {
    /// Creates an accordion with `len` closed panels.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            open: None,
            focused: 0,
        }
    }

    /// Number of panels.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True if there are no panels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Open panel, if any.
    #[must_use]
    pub const fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Panel holding the focus ring; meaningless when empty.
    #[must_use]
    pub const fn focused_index(&self) -> usize {
        self.focused
    }

    /// Whether panel `index` is open.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Opens `index`, or closes it if it is already open.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.focused = index;
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Toggles the focused panel.
    pub fn toggle_focused(&mut self) {
        self.toggle(self.focused);
    }

    /// Opens `index`, closing any other panel.
    pub fn open(&mut self, index: usize) {
        if index < self.len {
            self.focused = index;
            self.open = Some(index);
        }
    }

    /// Closes the open panel (Escape).
    pub fn close(&mut self) {
        self.open = None;
    }

    /// Moves focus down, wrapping to the first panel.
    pub fn focus_next(&mut self) {
        if self.len > 0 {
            self.focused = (self.focused + 1) % self.len;
        }
    }

    /// Moves focus up, wrapping to the last panel.
    pub fn focus_previous(&mut self) {
        if self.len > 0 {
            self.focused = (self.focused + self.len - 1) % self.len;
        }
    }

    /// Panels were added or removed. Closes an open panel that no longer
    /// exists and pulls focus back into range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.open.is_some_and(|open| open >= len) {
            self.open = None;
        }
        self.focused = self.focused.min(len.saturating_sub(1));
    }
}
