//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving the showcase
//! configuration in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, DEFAULT_AUTOPLAY_INTERVAL_MS, DEFAULT_MARQUEE_LOOP_SECS,
    DEFAULT_PAUSE_COOLDOWN_MS, DEFAULT_TICK_RATE_MS,
};
use crate::engine::{Breakpoints, CarouselConfig, ConfigError, RawBreakpoint, RawCarouselConfig};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Disable autoplay and animation everywhere
    #[serde(default)]
    pub reduced_motion: bool,
    /// Event loop wake-up interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Display the key help line in the status bar
    #[serde(default = "default_true")]
    pub show_help: bool,
}

fn default_tick_rate_ms() -> u64 {
    DEFAULT_TICK_RATE_MS
}

fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            reduced_motion: false,
            tick_rate_ms: default_tick_rate_ms(),
            show_help: true,
        }
    }
}

impl UiConfig {
    /// Event loop wake-up interval.
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// One carousel section of the showcase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselSection {
    /// Section heading
    pub title: String,
    /// Item labels in rotation order
    pub items: Vec<String>,
    /// Autoplay interval in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: i64,
    /// Autoplay toggle
    #[serde(default = "default_true")]
    pub autoplay: bool,
    /// Cooldown after manual navigation in milliseconds
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: i64,
    /// Column breakpoints
    #[serde(default = "default_terminal_breakpoints")]
    pub breakpoints: Vec<RawBreakpoint>,
}

#[allow(clippy::cast_possible_wrap)]
fn default_interval_ms() -> i64 {
    DEFAULT_AUTOPLAY_INTERVAL_MS as i64
}

#[allow(clippy::cast_possible_wrap)]
fn default_cooldown_ms() -> i64 {
    DEFAULT_PAUSE_COOLDOWN_MS as i64
}

fn default_terminal_breakpoints() -> Vec<RawBreakpoint> {
    Breakpoints::terminal_default()
        .as_slice()
        .iter()
        .map(|bp| RawBreakpoint {
            min_width: i64::from(bp.min_width),
            visible: i64::try_from(bp.visible_count).unwrap_or(1),
        })
        .collect()
}

impl CarouselSection {
    /// Creates a section with default timing and terminal breakpoints.
    pub fn new(title: impl Into<String>, items: &[&str]) -> Self {
        Self {
            title: title.into(),
            items: items.iter().map(|item| (*item).to_string()).collect(),
            interval_ms: default_interval_ms(),
            autoplay: true,
            cooldown_ms: default_cooldown_ms(),
            breakpoints: default_terminal_breakpoints(),
        }
    }

    /// Sets the autoplay interval.
    #[must_use]
    pub const fn with_interval_ms(mut self, interval_ms: i64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Builds the validated engine configuration for this section.
    pub fn carousel_config(&self) -> Result<CarouselConfig, ConfigError> {
        CarouselConfig::try_from(RawCarouselConfig {
            item_count: i64::try_from(self.items.len()).unwrap_or(i64::MAX),
            interval_ms: self.interval_ms,
            autoplay: self.autoplay,
            cooldown_ms: self.cooldown_ms,
            breakpoints: self.breakpoints.clone(),
        })
    }
}

/// Continuous partner-logo strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarqueeSection {
    /// Section heading
    pub title: String,
    /// Item labels
    pub items: Vec<String>,
    /// Seconds to scroll one full loop
    #[serde(default = "default_loop_secs")]
    pub loop_secs: f64,
}

fn default_loop_secs() -> f64 {
    DEFAULT_MARQUEE_LOOP_SECS
}

impl MarqueeSection {
    /// Loop period as a duration, if positive and finite.
    #[must_use]
    pub fn loop_period(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.loop_secs)
            .ok()
            .filter(|period| !period.is_zero())
    }
}

/// One question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionEntry {
    /// Panel heading
    pub heading: String,
    /// Panel body
    pub body: String,
}

/// Single-open panel list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionSection {
    /// Section heading
    pub title: String,
    /// Panels
    pub entries: Vec<AccordionEntry>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/CarouselShowcase/config.toml`
/// - macOS: `~/Library/Application Support/CarouselShowcase/config.toml`
/// - Windows: `%APPDATA%\CarouselShowcase\config.toml`
///
/// `CAROUSEL_TUI_CONFIG_DIR` overrides the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Stepping carousels, rendered top to bottom
    #[serde(default)]
    pub carousels: Vec<CarouselSection>,
    /// Optional partner marquee
    #[serde(default)]
    pub marquee: Option<MarqueeSection>,
    /// Optional accordion
    #[serde(default)]
    pub accordion: Option<AccordionSection>,
}

impl Config {
    /// Creates the built-in showcase configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ui: UiConfig::default(),
            carousels: vec![
                CarouselSection::new(
                    "Team",
                    &[
                        "Founder & lead counsellor",
                        "Admissions advisor",
                        "Visa specialist",
                        "Language coach",
                        "Finance & loans",
                        "Student success",
                    ],
                )
                .with_interval_ms(4000),
                CarouselSection::new(
                    "Testimonials",
                    &[
                        "\"Admitted to TU Munich\"",
                        "\"Visa approved first try\"",
                        "\"Clear plan, no stress\"",
                        "\"Great IELTS coaching\"",
                        "\"Help with blocked account\"",
                    ],
                ),
            ],
            marquee: Some(MarqueeSection {
                title: "Partners".to_string(),
                items: ["Uni A", "Uni B", "Bank C", "Insurer D", "Lender E", "School F"]
                    .iter()
                    .map(|item| (*item).to_string())
                    .collect(),
                loop_secs: default_loop_secs(),
            }),
            accordion: Some(AccordionSection {
                title: "Challenges".to_string(),
                entries: vec![
                    AccordionEntry {
                        heading: "Visa refusals".to_string(),
                        body: "We review the refusal and rebuild the application.".to_string(),
                    },
                    AccordionEntry {
                        heading: "Educational gap".to_string(),
                        body: "We document the gap and pick programmes that accept it."
                            .to_string(),
                    },
                    AccordionEntry {
                        heading: "Financial documents".to_string(),
                        body: "We check proofs of funds before submission.".to_string(),
                    },
                ],
            }),
        }
    }

    /// Gets the config directory path.
    ///
    /// Honors `CAROUSEL_TUI_CONFIG_DIR`, otherwise:
    /// - Linux: `~/.config/CarouselShowcase/`
    /// - macOS: `~/Library/Application Support/CarouselShowcase/`
    /// - Windows: `%APPDATA%\CarouselShowcase\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Path of the log file written while the TUI owns the terminal.
    pub fn log_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("carousel-tui.log"))
    }

    /// Loads configuration from `path`, falling back to defaults if missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .context(format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - every carousel converts into a valid engine configuration
    /// - tick rate is positive
    /// - marquee loop period is positive and finite
    pub fn validate(&self) -> Result<()> {
        if self.ui.tick_rate_ms == 0 {
            anyhow::bail!("ui.tick_rate_ms must be positive");
        }

        for (idx, section) in self.carousels.iter().enumerate() {
            section
                .carousel_config()
                .with_context(|| format!("Carousel #{} ({})", idx + 1, section.title))?;
        }

        if let Some(marquee) = &self.marquee {
            if marquee.loop_period().is_none() {
                anyhow::bail!(
                    "marquee.loop_secs must be a positive number, got {}",
                    marquee.loop_secs
                );
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
