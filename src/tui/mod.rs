//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the section widgets using Ratatui.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod accordion_view;
pub mod carousel_view;
pub mod component;
pub mod marquee_view;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout as RatatuiLayout, Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use tracing::{debug, info};

use crate::config::Config;
use crate::constants::APP_NAME;

// Re-export TUI components
pub use accordion_view::AccordionView;
pub use carousel_view::CarouselView;
pub use component::{Component, Section, SectionEvent};
pub use marquee_view::MarqueeView;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Application state for the showcase.
pub struct AppState {
    /// Loaded configuration
    pub config: Config,
    /// Current UI theme
    pub theme: Theme,
    sections: Vec<Section>,
    focused: Option<usize>,
    hovered: Option<usize>,
    pressed: Option<usize>,
    /// Last known terminal area
    screen: Rect,
    /// Set when the user asked to quit
    pub should_quit: bool,
}

impl AppState {
    /// Builds every section for a terminal of `width` x `height` cells.
    pub fn new(config: Config, width: u16, height: u16) -> Result<Self> {
        let reduced_motion = config.ui.reduced_motion;
        let mut sections: Vec<Section> = Vec::new();

        for section in &config.carousels {
            let view = CarouselView::new(section, width, reduced_motion)
                .with_context(|| format!("Invalid carousel: {}", section.title))?;
            sections.push(Box::new(view));
        }
        if let Some(marquee) = &config.marquee {
            let view = MarqueeView::new(marquee, reduced_motion)
                .with_context(|| format!("Invalid marquee: {}", marquee.title))?;
            sections.push(Box::new(view));
        }
        if let Some(accordion) = &config.accordion {
            sections.push(Box::new(AccordionView::new(accordion)));
        }

        info!(
            sections = sections.len(),
            reduced_motion, "showcase initialized"
        );

        Ok(Self {
            theme: Theme::from_mode(config.ui.theme_mode),
            config,
            sections,
            focused: None,
            hovered: None,
            pressed: None,
            screen: Rect::new(0, 0, width, height),
            should_quit: false,
        })
    }

    /// Number of sections on screen.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Index of the focused section.
    #[must_use]
    pub const fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    /// The focused section.
    #[must_use]
    pub fn focused_section(&self) -> Option<&dyn Component<Event = SectionEvent>> {
        self.focused.map(|idx| self.sections[idx].as_ref())
    }

    /// Status text of section `idx`.
    #[must_use]
    pub fn section_status(&self, idx: usize) -> Option<String> {
        self.sections.get(idx).map(|section| section.status())
    }

    /// Moves focus to `target`, notifying both sections.
    pub fn set_focus(&mut self, target: Option<usize>) {
        if target == self.focused {
            return;
        }
        if let Some(old) = self.focused {
            self.sections[old].focus_out();
        }
        if let Some(new) = target {
            self.sections[new].focus_in();
        }
        debug!(from = ?self.focused, to = ?target, "focus moved");
        self.focused = target;
    }

    /// Focuses the next section (Tab), wrapping to the first.
    pub fn focus_next(&mut self) {
        if self.sections.is_empty() {
            return;
        }
        let next = self.focused.map_or(0, |idx| (idx + 1) % self.sections.len());
        self.set_focus(Some(next));
    }

    /// Focuses the previous section (Shift+Tab), wrapping to the last.
    pub fn focus_previous(&mut self) {
        if self.sections.is_empty() {
            return;
        }
        let len = self.sections.len();
        let prev = self.focused.map_or(len - 1, |idx| (idx + len - 1) % len);
        self.set_focus(Some(prev));
    }

    /// Handles a key press.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_previous(),
            _ => {
                let Some(idx) = self.focused else {
                    return;
                };
                if self.sections[idx].handle_input(key) == Some(SectionEvent::Released) {
                    self.set_focus(None);
                }
            }
        }
    }

    /// Handles mouse movement and button presses.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let target = self.section_at(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                self.set_hover(target);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.set_hover(target);
                if let Some(idx) = target {
                    self.sections[idx].press(mouse.column);
                }
                self.pressed = target;
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(idx) = self.pressed.take() {
                    self.sections[idx].release_press(mouse.column);
                }
            }
            _ => {}
        }
    }

    /// Terminal was resized.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.screen = Rect::new(0, 0, width, height);
        for section in &mut self.sections {
            section.resize(width);
        }
    }

    /// Drives every section's timers. Returns true if a redraw is needed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        for section in &mut self.sections {
            changed |= section.poll();
        }
        changed
    }

    fn set_hover(&mut self, target: Option<usize>) {
        if target == self.hovered {
            return;
        }
        if let Some(old) = self.hovered {
            self.sections[old].pointer_leave();
        }
        if let Some(new) = target {
            self.sections[new].pointer_enter();
        }
        self.hovered = target;
    }

    fn section_at(&self, column: u16, row: u16) -> Option<usize> {
        let point = Position::new(column, row);
        self.section_areas(main_area(self.screen))
            .iter()
            .position(|area| area.height > 0 && area.contains(point))
    }

    /// Areas of each section inside `area`, top to bottom.
    fn section_areas(&self, area: Rect) -> Vec<Rect> {
        let mut constraints: Vec<Constraint> = self
            .sections
            .iter()
            .map(|section| Constraint::Length(section.height()))
            .collect();
        constraints.push(Constraint::Min(0));

        let mut areas = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area)
            .to_vec();
        areas.pop();
        areas
    }
}

/// Title bar, content and status bar areas.
fn screen_chunks(area: Rect) -> [Rect; 3] {
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(5),    // Sections
            Constraint::Length(4), // Status bar
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

fn main_area(area: Rect) -> Rect {
    screen_chunks(area)[1]
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
///
/// Input is handled before timers are polled, so a manual command in the same
/// loop turn as a due autoplay tick always wins.
pub fn run_tui<B: Backend>(state: &mut AppState, terminal: &mut Terminal<B>) -> Result<()> {
    let tick_rate = state.config.ui.tick_rate();
    loop {
        terminal.draw(|f| render(f, state))?;

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) => state.handle_key_event(key),
                Event::Mouse(mouse) => state.handle_mouse_event(mouse),
                Event::Resize(width, height) => state.handle_resize(width, height),
                _ => {}
            }
        }

        state.poll();

        if state.should_quit {
            info!("quit requested");
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let [title_area, main, status_area] = screen_chunks(f.area());

    render_title_bar(f, title_area, state);

    let areas = state.section_areas(main);
    for (idx, (section, area)) in state.sections.iter().zip(areas).enumerate() {
        if area.height == 0 {
            continue;
        }
        section.render(f, area, &state.theme, state.focused == Some(idx));
    }

    StatusBar::render(f, status_area, state, &state.theme);
}

/// Render title bar with the application name and motion preference
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let motion = if state.config.ui.reduced_motion {
        " (reduced motion)"
    } else {
        ""
    };
    let title = format!(" {APP_NAME}{motion}");

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(state.theme.primary)),
        );

    f.render_widget(title_widget, area);
}
