//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up recruit CLI defaults.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Settings changed by one `configure` invocation
#[derive(Debug, Default)]
pub struct Changes {
    pub data: Option<PathBuf>,
    pub server: Option<String>,
    pub show_low_rarity: Option<bool>,
    pub include_robots: Option<bool>,
}

impl Changes {
    fn is_empty(&self) -> bool {
        self.data.is_none()
            && self.server.is_none()
            && self.show_low_rarity.is_none()
            && self.include_robots.is_none()
    }

    fn apply(self, config: &mut Config) {
        if let Some(data) = self.data {
            config.data_path = Some(data);
        }
        if let Some(server) = self.server {
            config.server = Some(server);
        }
        if let Some(show) = self.show_low_rarity {
            config.show_low_rarity = show;
        }
        if let Some(include) = self.include_robots {
            config.include_robots = include;
        }
    }
}

/// Handle the configure command
pub fn handle(changes: Changes, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if changes.is_empty() {
        show_usage();
        return Ok(());
    }

    changes.apply(&mut config);
    config.save()?;

    println!("Configuration updated");
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    match &config.data_path {
        Some(path) => println!("Game data: {}", path.display()),
        None => println!("No game data file configured"),
    }
    match &config.server {
        Some(server) => println!("Server: {}", server),
        None => println!("No server configured"),
    }
    println!("Show low rarity: {}", config.show_low_rarity);
    println!("Include robots: {}", config.include_robots);

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: recruit configure --data PATH");
    println!("       recruit configure --server URL");
    println!("       recruit configure --show-low-rarity true|false --include-robots true|false");
    println!("   or: recruit configure --show");
}
