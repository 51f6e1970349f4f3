//! Accordion section: headings that expand one at a time.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::component::{Component, SectionEvent};
use super::Theme;
use crate::config::{AccordionEntry, AccordionSection};
use crate::engine::Accordion;

/// Question list with one expandable answer.
#[derive(Debug)]
pub struct AccordionView {
    title: String,
    entries: Vec<AccordionEntry>,
    accordion: Accordion,
}

impl AccordionView {
    /// Builds the view with every panel closed.
    #[must_use]
    pub fn new(section: &AccordionSection) -> Self {
        Self {
            title: section.title.clone(),
            entries: section.entries.clone(),
            accordion: Accordion::new(section.entries.len()),
        }
    }

    /// Underlying state.
    #[must_use]
    pub const fn accordion(&self) -> &Accordion {
        &self.accordion
    }
}

impl Component for AccordionView {
    type Event = SectionEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<SectionEvent> {
        match key.code {
            KeyCode::Down => self.accordion.focus_next(),
            KeyCode::Up => self.accordion.focus_previous(),
            KeyCode::Enter | KeyCode::Char(' ') => self.accordion.toggle_focused(),
            KeyCode::Esc => {
                // First Escape closes the open panel, the next one leaves the section.
                if self.accordion.open_index().is_none() {
                    return Some(SectionEvent::Released);
                }
                self.accordion.close();
            }
            _ => return None,
        }
        Some(SectionEvent::Changed)
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let border_style = if focused {
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };

        let mut lines: Vec<Line> = Vec::new();
        for (idx, entry) in self.entries.iter().enumerate() {
            let open = self.accordion.is_open(idx);
            let marker = if open { "▾ " } else { "▸ " };
            let mut style = Style::default().fg(theme.text);
            if focused && idx == self.accordion.focused_index() {
                style = style.bg(theme.highlight_bg).add_modifier(Modifier::BOLD);
            }
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.accent)),
                Span::styled(entry.heading.as_str(), style),
            ]));
            if open {
                lines.push(Line::from(Span::styled(
                    format!("  {}", entry.body),
                    Style::default().fg(theme.text_secondary),
                )));
            }
        }

        let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(format!(" {} ", self.title))
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        f.render_widget(widget, area);
    }

    fn height(&self) -> u16 {
        // One row per heading, one for the open body, two for borders.
        u16::try_from(self.entries.len() + 3).unwrap_or(u16::MAX)
    }

    fn status(&self) -> String {
        match self.accordion.open_index() {
            Some(idx) => format!("{}: {} open", self.title, self.entries[idx].heading),
            None => format!("{}: all closed", self.title),
        }
    }

    fn hints(&self) -> &'static str {
        "↑/↓: Move | Enter: Expand/Collapse | Esc: Close"
    }
}
