mod cli;
mod commands;
mod config;
mod remote;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn init_tracing(verbose: bool) {
    let default = if verbose { "recruit=debug" } else { "recruit=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Solve {
            tags,
            data,
            show_low_rarity,
            exclude_robots,
            remote,
            format,
        } => {
            commands::solve::handle(&tags, data, show_low_rarity, exclude_robots, remote, format)?;
        }

        Commands::Tags { data } => {
            commands::tags::handle(data)?;
        }

        Commands::Configure {
            data,
            server,
            show_low_rarity,
            include_robots,
            show,
        } => {
            let changes = commands::configure::Changes {
                data,
                server,
                show_low_rarity,
                include_robots,
            };
            commands::configure::handle(changes, show)?;
        }
    }

    Ok(())
}
