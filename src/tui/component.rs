//! Component trait pattern for showcase sections.
//!
//! Every section on screen (carousel, marquee, accordion) is a self-contained
//! component that owns its engine, handles its own input and renders itself.
//! The parent forwards pointer and focus changes through the hook methods.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A section that can be rendered and handle input.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input while the component is focused.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to the parent.
    /// Returns `None` if input was handled internally without needing parent action.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool);

    /// Rows the component wants, borders included.
    fn height(&self) -> u16;

    /// One-line state summary for the status bar.
    fn status(&self) -> String;

    /// Key hints shown while the component is focused.
    fn hints(&self) -> &'static str;

    /// Drive timers. Returns true if a redraw is needed.
    fn poll(&mut self) -> bool {
        false
    }

    /// Viewport width changed.
    fn resize(&mut self, _width: u16) {}

    /// Pointer entered the component.
    fn pointer_enter(&mut self) {}

    /// Pointer left the component.
    fn pointer_leave(&mut self) {}

    /// Keyboard focus moved into the component.
    fn focus_in(&mut self) {}

    /// Keyboard focus left the component.
    fn focus_out(&mut self) {}

    /// Primary button pressed at column `x` (touch start).
    fn press(&mut self, _x: u16) {}

    /// Primary button released at column `x` (touch end).
    fn release_press(&mut self, _x: u16) {}
}

/// Events that sections emit to the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionEvent {
    /// State changed and the screen should be redrawn
    Changed,
    /// User pressed Escape: drop focus from this section
    Released,
}

/// Section trait object stored by the app state.
pub type Section = Box<dyn Component<Event = SectionEvent>>;
