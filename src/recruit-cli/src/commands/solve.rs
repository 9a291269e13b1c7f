//! Solve command handler

use anyhow::{Context, Result};
use recruit::{
    LocalSolver, RecruitmentSolver, RemoteSolver, Selection, SolveOptions, TagCatalog,
    TagCombination,
};
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::remote::HttpSubsetSource;

use super::{load_game_data, require_data_path};

/// Handle the solve command
///
/// # Arguments
/// * `tags` - Tag ids or names to select
/// * `data` - Game data file, falls back to the configured default
/// * `remote` - `Some(None)` uses the configured server
pub fn handle(
    tags: &[String],
    data: Option<PathBuf>,
    show_low_rarity: bool,
    exclude_robots: bool,
    remote: Option<Option<String>>,
    format: OutputFormat,
) -> Result<()> {
    let config = Config::load()?;
    let options = config.solve_options(show_low_rarity, exclude_robots);
    let data_path = config.data_path(data);

    let (catalog, solver): (TagCatalog, Box<dyn RecruitmentSolver>) = match remote {
        None => {
            let game = load_game_data(&require_data_path(data_path)?)?;
            let roster = game.roster();
            tracing::info!("{} recruitable operators", roster.len());
            let solver: Box<dyn RecruitmentSolver> = Box::new(LocalSolver::new(roster));
            (game.catalog(), solver)
        }
        Some(url) => {
            let server = url.or_else(|| config.server.clone()).context(
                "No server given. Pass --remote URL or run `recruit configure --server URL`",
            )?;
            let source = HttpSubsetSource::new(&server);
            let catalog = match data_path {
                Some(path) => load_game_data(&path)?.catalog(),
                None => TagCatalog::from_gacha_tags(
                    &source
                        .fetch_tags()
                        .with_context(|| format!("Failed to fetch tags from {}", server))?,
                ),
            };
            tracing::info!("Resolving combinations through {}", source.server());
            let solver: Box<dyn RecruitmentSolver> = Box::new(RemoteSolver::new(source));
            (catalog, solver)
        }
    };

    let selection = Selection::resolve(tags, &catalog)?;
    let results = solver.solve(selection.tags(), &options);
    tracing::debug!("{} combination(s)", results.len());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Table => print!("{}", render_table(&selection, &results, &options)),
    }

    Ok(())
}

/// Human-readable result listing
fn render_table(selection: &Selection, results: &[TagCombination], options: &SolveOptions) -> String {
    let mut out = String::new();

    if results.is_empty() {
        let names: Vec<&str> = selection.tags().iter().map(|t| t.name.as_str()).collect();
        out.push_str(&format!("No combinations found for: {}\n", names.join(", ")));
        if !options.show_low_rarity || !options.include_robots {
            out.push_str("Some operators are hidden; try --show-low-rarity or drop --exclude-robots\n");
        }
        return out;
    }

    for combo in results {
        out.push_str(&format!(
            "[{}] {} ({} operator{})\n",
            combo.guaranteed_rarity,
            combo.tag_names.join(" + "),
            combo.operators.len(),
            if combo.operators.len() == 1 { "" } else { "s" }
        ));

        let operators: Vec<String> = combo
            .operators
            .iter()
            .map(|op| {
                let marker = if op.recruit_only { "*" } else { "" };
                format!("{} {}{}", op.rarity, op.name, marker)
            })
            .collect();
        out.push_str(&format!("    {}\n", operators.join(", ")));
    }

    if results.iter().any(|c| c.operators.iter().any(|op| op.recruit_only)) {
        out.push_str("\n* only obtainable through recruitment\n");
    }

    out
}
