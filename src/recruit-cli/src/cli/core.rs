//! Core CLI definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Output format for solve results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "recruit")]
#[command(about = "Recruitment tag-combination solver", long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank every combination of the selected tags
    #[command(visible_alias = "s")]
    Solve {
        /// Tags to select, by id or name (at most 5)
        #[arg(required = true)]
        tags: Vec<String>,

        /// Game data JSON (uses configured default if not provided)
        #[arg(short, long, env = "RECRUIT_DATA")]
        data: Option<PathBuf>,

        /// Keep 2★ operators in results
        #[arg(long)]
        show_low_rarity: bool,

        /// Drop 1★ robot operators from results
        #[arg(long)]
        exclude_robots: bool,

        /// Resolve each combination through a data server
        /// (uses configured server if no URL is given)
        #[arg(long, num_args = 0..=1, value_name = "URL")]
        remote: Option<Option<String>>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List selectable tags grouped by kind
    #[command(visible_alias = "t")]
    Tags {
        /// Game data JSON (uses configured default if not provided)
        #[arg(short, long, env = "RECRUIT_DATA")]
        data: Option<PathBuf>,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default game data file
        #[arg(long)]
        data: Option<PathBuf>,

        /// Set default data server URL
        #[arg(long)]
        server: Option<String>,

        /// Show 2★ operators by default
        #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
        show_low_rarity: Option<bool>,

        /// Include 1★ robot operators by default
        #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
        include_robots: Option<bool>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
