//! Tags command handler

use anyhow::Result;
use recruit::TagCatalog;
use std::path::PathBuf;

use crate::config::Config;

use super::{load_game_data, require_data_path};

/// Handle the tags command
pub fn handle(data: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;
    let path = require_data_path(config.data_path(data))?;
    let catalog = load_game_data(&path)?.catalog();

    if catalog.is_empty() {
        println!("No tags found in {}", path.display());
        return Ok(());
    }

    print!("{}", render_tags(&catalog));
    Ok(())
}

fn render_tags(catalog: &TagCatalog) -> String {
    let mut out = String::new();
    for (kind, tags) in catalog.grouped() {
        out.push_str(&format!("{}:\n", kind));
        for tag in tags {
            out.push_str(&format!("  {:>4}  {}\n", tag.id, tag.name));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use recruit::Tag;

    #[test]
    fn test_render_tags() {
        let catalog = TagCatalog::new(vec![
            Tag::new(15, "DPS"),
            Tag::new(9, "Melee"),
            Tag::new(11, "Top Operator"),
            Tag::new(1013, "Female"),
        ]);
        let rendered = render_tags(&catalog);
        assert_eq!(
            rendered,
            "Qualification:\n    11  Top Operator\nPosition:\n     9  Melee\nAffix:\n    15  DPS\n"
        );
    }
}
