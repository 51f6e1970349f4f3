//! Status bar widget for displaying section state and key help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with the focused section's state and contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let status_line = match state.focused_section() {
            Some(section) => Line::from(vec![
                Span::styled("Focus: ", Style::default().fg(theme.primary)),
                Span::styled(section.status(), Style::default().fg(theme.text)),
            ]),
            None => Line::from(Span::styled(
                "Tab to focus a section, hover with the mouse to pause it",
                Style::default().fg(theme.text_muted),
            )),
        };

        let mut lines = vec![status_line];
        if state.config.ui.show_help {
            lines.push(Self::get_help_line(state, theme));
        }

        let status = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.inactive)),
        );
        f.render_widget(status, area);
    }

    /// Key hints for the focused section plus global keys
    fn get_help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let key_style = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);
        let mut spans = vec![
            Span::styled("Tab", key_style),
            Span::styled(": Next section | ", Style::default().fg(theme.text_muted)),
            Span::styled("q", key_style),
            Span::styled(": Quit", Style::default().fg(theme.text_muted)),
        ];
        if let Some(section) = state.focused_section() {
            spans.push(Span::styled(" | ", Style::default().fg(theme.text_muted)));
            spans.push(Span::styled(section.hints(), Style::default().fg(theme.text_secondary)));
        }
        Line::from(spans)
    }
}
