//! Carousel Showcase - auto-rotating carousels in the terminal
//!
//! Runs the interactive showcase by default, or one of the headless
//! subcommands for scripting.
//!
//! # Usage
//!
//! ```bash
//! # Interactive showcase with the configured sections
//! carousel-tui
//!
//! # Same, with autoplay and animation turned off
//! carousel-tui --reduced-motion
//!
//! # Five autoplay ticks of a five-item carousel on a phone-width viewport
//! carousel-tui simulate --items 5 --width 375
//!
//! # Inspect the configuration
//! carousel-tui config show --json
//! ```

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use carousel_tui::cli::{ConfigArgs, SimulateArgs};
use carousel_tui::config::Config;
use carousel_tui::constants::APP_NAME;
use carousel_tui::tui;

/// Carousel Showcase - auto-rotating carousels in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the configuration file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Disable autoplay and animation
    #[arg(long)]
    reduced_motion: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a carousel headlessly and print its state after each step
    Simulate(SimulateArgs),
    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_file_path()?,
    };

    match &cli.command {
        Some(Commands::Simulate(args)) => {
            init_stderr_logging(cli.verbose);
            args.execute()
        }
        Some(Commands::Config(args)) => {
            init_stderr_logging(cli.verbose);
            args.execute(&config_path)
        }
        None => run_showcase(&cli, &config_path),
    }
}

fn run_showcase(cli: &Cli, config_path: &Path) -> Result<()> {
    let log_path = Config::log_file_path()?;
    init_file_logging(cli.verbose, &log_path)?;

    let mut config = Config::load_from(config_path)?;
    if cli.reduced_motion {
        config.ui.reduced_motion = true;
    }
    info!(config = %config_path.display(), "starting {APP_NAME}");

    let (width, height) = crossterm::terminal::size().unwrap_or_else(|e| {
        warn!("Failed to read terminal size, assuming 80x24: {e}");
        (80, 24)
    });
    let mut app_state = tui::AppState::new(config, width, height)?;

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result
}

fn env_filter(verbose: bool) -> EnvFilter {
    let filter = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into())
}

/// Logs to stderr, leaving stdout to command output.
fn init_stderr_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Logs to a file while the TUI owns the terminal.
fn init_file_logging(verbose: bool, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context(format!(
            "Failed to create log directory: {}",
            parent.display()
        ))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context(format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}
