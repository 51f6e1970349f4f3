//! Marquee section: a single scrolling line of partner names.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::component::{Component, SectionEvent};
use super::Theme;
use crate::config::MarqueeSection;
use crate::engine::{ConfigError, Marquee};

const SEPARATOR: &str = "  •  ";

/// Scrolling strip over a list of labels.
#[derive(Debug)]
pub struct MarqueeView {
    title: String,
    strip: Vec<char>,
    marquee: Marquee,
}

impl MarqueeView {
    /// Builds the view and its engine.
    pub fn new(section: &MarqueeSection, reduced_motion: bool) -> Result<Self, ConfigError> {
        let period = section
            .loop_period()
            .ok_or(ConfigError::NonPositiveInterval(0))?;
        let mut strip: Vec<char> = Vec::new();
        for item in &section.items {
            strip.extend(item.chars());
            strip.extend(SEPARATOR.chars());
        }
        Ok(Self {
            title: section.title.clone(),
            strip,
            marquee: Marquee::new(section.items.len(), period, reduced_motion)?,
        })
    }

    /// Visible slice of the looping strip, `width` characters long.
    fn window(&self, width: usize) -> String {
        if self.strip.is_empty() {
            return String::new();
        }
        let start = self.marquee.offset(self.strip.len());
        self.strip
            .iter()
            .cycle()
            .skip(start)
            .take(width)
            .collect()
    }
}

impl Component for MarqueeView {
    type Event = SectionEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<SectionEvent> {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.marquee.toggle_paused();
                Some(SectionEvent::Changed)
            }
            KeyCode::Esc => {
                self.marquee.release();
                Some(SectionEvent::Released)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let border_style = if focused {
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let text = self.window(usize::from(inner.width));
        let line = Line::from(Span::styled(text, Style::default().fg(theme.accent)));
        f.render_widget(Paragraph::new(line), inner);
    }

    fn height(&self) -> u16 {
        3
    }

    fn status(&self) -> String {
        let state = if self.marquee.is_running() {
            "scrolling"
        } else {
            "paused"
        };
        format!("{}: {} partners ({state})", self.title, self.marquee.item_count())
    }

    fn hints(&self) -> &'static str {
        "Space/Enter: Pause | Esc: Release"
    }

    fn poll(&mut self) -> bool {
        self.marquee.is_running()
    }

    fn pointer_enter(&mut self) {
        self.marquee.pointer_enter();
    }

    fn pointer_leave(&mut self) {
        self.marquee.pointer_leave();
    }

    fn focus_in(&mut self) {
        self.marquee.focus_in();
    }

    fn focus_out(&mut self) {
        self.marquee.focus_out();
    }

    fn press(&mut self, _x: u16) {
        self.marquee.touch_start();
    }

    fn release_press(&mut self, _x: u16) {
        self.marquee.touch_end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn section(items: &[&str]) -> MarqueeSection {
        MarqueeSection {
            title: "Partners".to_string(),
            items: items.iter().map(|item| (*item).to_string()).collect(),
            loop_secs: 30.0,
        }
    }

    #[test]
    fn test_window_wraps_around_strip() {
        let view = MarqueeView::new(&section(&["AB"]), true).unwrap();
        assert_eq!(view.window(14), "AB  •  AB  •  ");
    }

    #[test]
    fn test_space_toggles_and_escape_releases() {
        let mut view = MarqueeView::new(&section(&["A", "B"]), false).unwrap();
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);

        view.handle_input(space);
        assert_eq!(view.status(), "Partners: 2 partners (paused)");
        assert_eq!(view.handle_input(esc), Some(SectionEvent::Released));
        assert_eq!(view.status(), "Partners: 2 partners (scrolling)");
    }

    #[test]
    fn test_empty_strip_renders_nothing() {
        let view = MarqueeView::new(&section(&[]), false).unwrap();
        assert_eq!(view.window(10), "");
    }
}
