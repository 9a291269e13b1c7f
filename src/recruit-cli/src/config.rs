//! Configuration management for recruit CLI

use anyhow::{Context, Result};
use recruit::SolveOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_path: Option<PathBuf>,
    pub server: Option<String>,
    pub show_low_rarity: bool,
    pub include_robots: bool,
}

impl Default for Config {
    fn default() -> Self {
        let options = SolveOptions::default();
        Self {
            data_path: None,
            server: None,
            show_low_rarity: options.show_low_rarity,
            include_robots: options.include_robots,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("recruit");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Display filters with command-line flags applied on top
    pub fn solve_options(&self, show_low_rarity: bool, exclude_robots: bool) -> SolveOptions {
        SolveOptions {
            show_low_rarity: self.show_low_rarity || show_low_rarity,
            include_robots: self.include_robots && !exclude_robots,
        }
    }

    /// Game data path from the command line, falling back to the configured default
    pub fn data_path(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| self.data_path.clone())
    }
}
