//! Command handlers for recruit CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod solve;
pub mod tags;

use anyhow::{Context, Result};
use recruit::GameData;
use std::path::{Path, PathBuf};

/// Resolve the game data path or explain how to set one
pub(crate) fn require_data_path(path: Option<PathBuf>) -> Result<PathBuf> {
    path.context(
        "No game data file given. Pass --data PATH or run `recruit configure --data PATH`",
    )
}

pub(crate) fn load_game_data(path: &Path) -> Result<GameData> {
    GameData::load(path)
        .with_context(|| format!("Failed to load game data from {}", path.display()))
}
