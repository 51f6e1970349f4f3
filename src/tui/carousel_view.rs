//! Carousel section: cards side by side with pagination dots.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::component::{Component, SectionEvent};
use super::Theme;
use crate::config::CarouselSection;
use crate::engine::{CarouselEngine, ConfigError, Direction, PlaybackState, Viewport};

/// Approximate pixel width of a terminal cell, used to scale drags into
/// swipe distances.
const CELL_WIDTH_PX: i32 = 8;

/// Rows taken by a carousel: border, 3 card rows, dots, border.
const CAROUSEL_HEIGHT: u16 = 7;

/// A titled carousel over a list of labels.
#[derive(Debug)]
pub struct CarouselView {
    title: String,
    items: Vec<String>,
    engine: CarouselEngine,
}

impl CarouselView {
    /// Builds the view and its engine for a terminal `width` columns wide.
    pub fn new(
        section: &CarouselSection,
        width: u16,
        reduced_motion: bool,
    ) -> Result<Self, ConfigError> {
        let config = section.carousel_config()?;
        let viewport = Viewport::new(u32::from(width)).with_reduced_motion(reduced_motion);
        Ok(Self {
            title: section.title.clone(),
            items: section.items.clone(),
            engine: CarouselEngine::new(config, viewport)?,
        })
    }

    /// Underlying engine.
    #[must_use]
    pub const fn engine(&self) -> &CarouselEngine {
        &self.engine
    }

    fn render_cards(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let range = self.engine.visible_range();
        if range.is_empty() {
            let empty = Paragraph::new("Nothing to show")
                .style(Style::default().fg(theme.text_muted))
                .alignment(Alignment::Center);
            f.render_widget(empty, area);
            return;
        }

        let slots = u32::try_from(self.engine.visible_count()).unwrap_or(1);
        let constraints: Vec<Constraint> =
            (0..slots).map(|_| Constraint::Ratio(1, slots)).collect();
        let columns = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints(constraints)
            .split(area);

        let active = self.engine.active_index();
        for (column, index) in columns.iter().zip(range) {
            let is_active = active == Some(index);
            let border_color = if is_active { theme.accent } else { theme.inactive };
            let card = Paragraph::new(Line::from(Span::styled(
                self.items[index].as_str(),
                Style::default().fg(theme.text),
            )))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            );
            f.render_widget(card, *column);
        }
    }

    /// Border title. The slide-direction arrow is left out under reduced
    /// motion.
    fn block_title(&self) -> String {
        let label = self.engine.status_label();
        if !self.engine.animations_enabled() {
            return format!(" {} - {label} ", self.title);
        }
        let arrow = match self.engine.direction() {
            Direction::Forward => "→",
            Direction::Backward => "←",
        };
        format!(" {} - {label} {arrow} ", self.title)
    }

    fn dots_line(&self, theme: &Theme) -> Line<'static> {
        let current = self.engine.current_index();
        let mut spans: Vec<Span> = (0..self.engine.page_count())
            .map(|page| {
                if page == current {
                    Span::styled("● ", Style::default().fg(theme.active))
                } else {
                    Span::styled("○ ", Style::default().fg(theme.text_muted))
                }
            })
            .collect();

        let state = match self.engine.playback_state() {
            PlaybackState::Autoplaying => Span::styled("  ▶", Style::default().fg(theme.success)),
            PlaybackState::Paused => Span::styled("  ⏸", Style::default().fg(theme.warning)),
        };
        spans.push(state);
        Line::from(spans)
    }
}

impl Component for CarouselView {
    type Event = SectionEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<SectionEvent> {
        match key.code {
            KeyCode::Left => self.engine.previous(),
            KeyCode::Right => self.engine.next(),
            KeyCode::Home => self.engine.go_to(0),
            KeyCode::End => self
                .engine
                .go_to(i64::try_from(self.engine.max_index()).unwrap_or(i64::MAX)),
            KeyCode::Char(' ') | KeyCode::Enter => self.engine.toggle_paused(),
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                let page = c.to_digit(10).map_or(1, i64::from);
                self.engine.go_to(page - 1);
            }
            KeyCode::Esc => {
                self.engine.release();
                return Some(SectionEvent::Released);
            }
            _ => return None,
        }
        Some(SectionEvent::Changed)
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let title = self.block_title();
        let border_style = if focused {
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(inner);

        self.render_cards(f, rows[0], theme);
        let dots = Paragraph::new(self.dots_line(theme)).alignment(Alignment::Center);
        f.render_widget(dots, rows[1]);
    }

    fn height(&self) -> u16 {
        CAROUSEL_HEIGHT
    }

    fn status(&self) -> String {
        let state = match self.engine.playback_state() {
            PlaybackState::Autoplaying => "autoplaying",
            PlaybackState::Paused => "paused",
        };
        format!("{}: {} ({state})", self.title, self.engine.status_label())
    }

    fn hints(&self) -> &'static str {
        "←/→: Prev/Next | 1-9: Jump | Space: Pause | Esc: Release"
    }

    fn poll(&mut self) -> bool {
        self.engine.poll()
    }

    fn resize(&mut self, width: u16) {
        self.engine.recompute_visible_count(u32::from(width));
    }

    fn pointer_enter(&mut self) {
        self.engine.pointer_enter();
    }

    fn pointer_leave(&mut self) {
        self.engine.pointer_leave();
    }

    fn focus_in(&mut self) {
        self.engine.focus_in();
    }

    fn focus_out(&mut self) {
        self.engine.focus_out();
    }

    fn press(&mut self, x: u16) {
        self.engine.touch_start(i32::from(x) * CELL_WIDTH_PX);
    }

    fn release_press(&mut self, x: u16) {
        self.engine.touch_end(i32::from(x) * CELL_WIDTH_PX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn view(items: &[&str], width: u16) -> CarouselView {
        CarouselView::new(&CarouselSection::new("Test", items), width, false).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys_navigate() {
        let mut view = view(&["a", "b", "c", "d"], 40);
        assert_eq!(view.handle_input(key(KeyCode::Right)), Some(SectionEvent::Changed));
        assert_eq!(view.engine().current_index(), 1);
        view.handle_input(key(KeyCode::Left));
        view.handle_input(key(KeyCode::Left));
        assert_eq!(view.engine().current_index(), 3);
    }

    #[test]
    fn test_digit_and_end_jump() {
        let mut view = view(&["a", "b", "c", "d", "e"], 100);
        assert_eq!(view.engine().visible_count(), 2);
        view.handle_input(key(KeyCode::Char('9')));
        assert_eq!(view.engine().current_index(), 3);
        view.handle_input(key(KeyCode::Char('1')));
        assert_eq!(view.engine().current_index(), 0);
        view.handle_input(key(KeyCode::End));
        assert_eq!(view.engine().current_index(), 3);
    }

    #[test]
    fn test_escape_releases() {
        let mut view = view(&["a", "b", "c"], 40);
        view.focus_in();
        view.handle_input(key(KeyCode::Char(' ')));
        assert!(view.engine().is_paused());

        assert_eq!(view.handle_input(key(KeyCode::Esc)), Some(SectionEvent::Released));
        assert!(!view.engine().is_paused());
    }

    #[test]
    fn test_unknown_key_ignored() {
        let mut view = view(&["a", "b"], 40);
        assert_eq!(view.handle_input(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_drag_swipes() {
        let mut view = view(&["a", "b", "c"], 40);
        view.press(30);
        view.release_press(20);
        assert_eq!(view.engine().current_index(), 1);
    }

    #[test]
    fn test_resize_changes_visible_count() {
        let mut view = view(&["a", "b", "c", "d", "e", "f"], 40);
        assert_eq!(view.engine().visible_count(), 1);
        view.resize(160);
        assert_eq!(view.engine().visible_count(), 3);
    }

    #[test]
    fn test_title_arrow_follows_direction() {
        let mut view = view(&["a", "b", "c"], 40);
        assert_eq!(view.block_title(), " Test - Showing 1 of 3 → ");
        view.handle_input(key(KeyCode::Left));
        assert_eq!(view.block_title(), " Test - Showing 3 of 3 ← ");
    }

    #[test]
    fn test_title_has_no_arrow_under_reduced_motion() {
        let section = CarouselSection::new("Test", &["a", "b", "c"]);
        let mut view = CarouselView::new(&section, 40, true).unwrap();
        view.handle_input(key(KeyCode::Right));
        assert_eq!(view.block_title(), " Test - Showing 2 of 3 ");
    }

    #[test]
    fn test_status_mentions_title() {
        let view = view(&["a", "b", "c"], 40);
        assert_eq!(view.status(), "Test: Showing 1 of 3 (autoplaying)");
    }
}
