//! Game data bundle
//!
//! Mirrors the payloads of the game data provider in one JSON document:
//!
//! ```json
//! {
//!   "tags": [{"tagId": 11, "tagName": "Top Operator", "tagGroup": 0}],
//!   "operators": [{"name": "Exusiai", "rarity": "TIER_6", "profession": "SNIPER",
//!                  "position": "RANGED", "tagList": ["DPS"]}],
//!   "recruitDetail": "..."
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::operator::{OperatorRecord, Roster};
use crate::pool::RecruitPool;
use crate::tag::{GachaTag, TagCatalog};

/// Errors loading game data
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw tag table, character table and recruitment rules text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameData {
    #[serde(alias = "gachaTags")]
    pub tags: Vec<GachaTag>,
    #[serde(alias = "characters")]
    pub operators: Vec<OperatorRecord>,
    pub recruit_detail: Option<String>,
}

impl GameData {
    /// Load from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let data = Self::from_json(&content)?;
        tracing::debug!(
            "Loaded {} tags and {} operators from {}",
            data.tags.len(),
            data.operators.len(),
            path.as_ref().display()
        );
        Ok(data)
    }

    pub fn from_json(json: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Selectable tags
    pub fn catalog(&self) -> TagCatalog {
        TagCatalog::from_gacha_tags(&self.tags)
    }

    /// Recruitable operators
    ///
    /// With rules text present, characters it does not list are dropped
    /// before typing, so non-recruitable professions never reach the
    /// parser. Without it every typeable record is kept.
    pub fn roster(&self) -> Roster {
        let Some(detail) = self.recruit_detail.as_deref() else {
            return Roster::from_records(self.operators.iter().cloned());
        };

        let pool = RecruitPool::parse(detail);
        let records = self
            .operators
            .iter()
            .filter(|record| pool.contains(&record.name))
            .cloned();
        let operators = pool.filter(Roster::from_records(records).into_operators());
        Roster::new(operators)
    }
}
