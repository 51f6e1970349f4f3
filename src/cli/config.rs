//! Configuration management CLI commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::Path;

use crate::config::Config;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the configuration file path
    Path,
    /// Write the built-in showcase configuration to disk
    Init(ConfigInitArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write the built-in configuration
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    path: String,
    exists: bool,
    #[serde(flatten)]
    config: &'a Config,
}

impl ConfigArgs {
    /// Execute config subcommand against the file at `path`
    pub fn execute(&self, path: &Path) -> Result<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(path),
            ConfigCommand::Path => {
                println!("{}", path.display());
                Ok(())
            }
            ConfigCommand::Init(args) => args.execute(path),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, path: &Path) -> Result<()> {
        let config = Config::load_from(path).context("Failed to load configuration")?;

        if self.json {
            output_json(&config, path)?;
        } else {
            output_human_readable(&config, path);
        }

        Ok(())
    }
}

impl ConfigInitArgs {
    /// Execute init command
    pub fn execute(&self, path: &Path) -> Result<()> {
        if path.exists() && !self.force {
            anyhow::bail!(
                "Configuration already exists: {} (use --force to overwrite)",
                path.display()
            );
        }

        Config::new()
            .save_to(path)
            .context("Failed to save configuration")?;

        println!("Configuration written to {}", path.display());
        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config, path: &Path) -> Result<()> {
    let output = ConfigOutput {
        path: path.to_string_lossy().to_string(),
        exists: path.exists(),
        config,
    };

    let json = serde_json::to_string_pretty(&output)
        .context("Failed to serialize configuration to JSON")?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, path: &Path) {
    let source = if path.exists() { "" } else { " (not created, showing defaults)" };
    println!("Configuration: {}{source}", path.display());
    println!();

    println!("UI:");
    println!("  Theme:          {}", config.ui.theme_mode);
    println!("  Reduced motion: {}", config.ui.reduced_motion);
    println!("  Tick rate:      {}ms", config.ui.tick_rate_ms);
    println!();

    println!("Carousels:");
    if config.carousels.is_empty() {
        println!("  (none)");
    }
    for section in &config.carousels {
        let autoplay = if section.autoplay { "on" } else { "off" };
        println!(
            "  {}: {} items, every {}ms, autoplay {autoplay}, cooldown {}ms",
            section.title,
            section.items.len(),
            section.interval_ms,
            section.cooldown_ms
        );
    }

    if let Some(marquee) = &config.marquee {
        println!();
        println!(
            "Marquee: {} ({} items, {}s loop)",
            marquee.title,
            marquee.items.len(),
            marquee.loop_secs
        );
    }

    if let Some(accordion) = &config.accordion {
        println!();
        println!(
            "Accordion: {} ({} panels)",
            accordion.title,
            accordion.entries.len()
        );
    }
}
