//! Colors for the showcase in dark and light terminals.
//!
//! `ThemeMode::Auto` asks the OS which mode it is in.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Title bar and focused section borders
    pub primary: Color,
    /// Active card border, marquee text, key names
    pub accent: Color,
    /// Autoplay indicator
    pub success: Color,
    /// Pause indicator
    pub warning: Color,

    /// Card and heading text
    pub text: Color,
    /// Unfocused borders, accordion bodies
    pub text_secondary: Color,
    /// Inactive dots and hints
    pub text_muted: Color,

    /// Screen background
    pub background: Color,
    /// Focused accordion heading
    pub highlight_bg: Color,

    /// Current-page dot
    pub active: Color,
    /// Inactive card borders, status bar frame
    pub inactive: Color,
}

impl Theme {
    /// Detects the OS theme and returns the matching Theme.
    ///
    /// # Examples
    /// ```
    /// use carousel_tui::tui::theme::Theme;
    ///
    /// let theme = Theme::detect();
    /// assert!(theme == Theme::dark() || theme == Theme::light());
    /// ```
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Unspecified and detection errors get the dark theme
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Theme for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            warning: Color::LightRed,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,

            active: Color::LightCyan,
            inactive: Color::Gray,
        }
    }

    /// Theme for light terminal backgrounds.
    ///
    /// Accents are darkened so they stay readable on white.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(190, 40, 40),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),

            active: Color::Blue,
            inactive: Color::Rgb(180, 180, 180),
        }
    }

    /// Resolves the configured theme mode, detecting the OS theme for `Auto`.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mode_explicit() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_backgrounds_differ() {
        assert_eq!(Theme::dark().background, Color::Black);
        assert_eq!(Theme::light().background, Color::White);
        assert_ne!(Theme::dark().text, Theme::light().text);
    }

    #[test]
    fn test_playback_indicators_distinct() {
        for theme in [Theme::dark(), Theme::light()] {
            assert_ne!(theme.success, theme.warning);
            assert_ne!(theme.active, theme.text_muted);
        }
    }

    #[test]
    fn test_auto_resolves_to_known_theme() {
        let theme = Theme::from_mode(ThemeMode::Auto);
        assert!(theme == Theme::dark() || theme == Theme::light());
    }
}
