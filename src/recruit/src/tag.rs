//! Recruitment tags
//!
//! Tag ids are stable game data. The kind of a tag (qualification,
//! position, class or affix) is derived from its id through fixed tables;
//! anything not listed is an affix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric tag identifier
pub type TagId = u32;

/// Well-known tag ids
pub mod ids {
    use super::TagId;

    pub const GUARD: TagId = 1;
    pub const SNIPER: TagId = 2;
    pub const DEFENDER: TagId = 3;
    pub const MEDIC: TagId = 4;
    pub const SUPPORTER: TagId = 5;
    pub const CASTER: TagId = 6;
    pub const SPECIALIST: TagId = 7;
    pub const VANGUARD: TagId = 8;

    pub const MELEE: TagId = 9;
    pub const RANGED: TagId = 10;

    pub const TOP_OPERATOR: TagId = 11;
    pub const SENIOR_OPERATOR: TagId = 14;
    pub const STARTER: TagId = 17;
    pub const ROBOT: TagId = 28;
}

/// Qualification tags, lowest rarity first
pub const QUALIFICATION_TAGS: &[TagId] = &[ids::ROBOT, ids::STARTER, ids::SENIOR_OPERATOR, ids::TOP_OPERATOR];

/// Position tags
pub const POSITION_TAGS: &[TagId] = &[ids::MELEE, ids::RANGED];

/// Class tags in in-game display order
pub const CLASS_TAGS: &[TagId] = &[
    ids::VANGUARD,
    ids::GUARD,
    ids::DEFENDER,
    ids::SNIPER,
    ids::CASTER,
    ids::MEDIC,
    ids::SUPPORTER,
    ids::SPECIALIST,
];

/// Gender tags present in the game table but never selectable
pub const HIDDEN_TAGS: &[TagId] = &[1012, 1013];

/// Maximum number of tags a player can select
pub const MAX_SELECTED_TAGS: usize = 5;

// ============================================================================
// Tag kinds
// ============================================================================

/// Category of a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    Qualification,
    Position,
    Class,
    Affix,
}

impl TagKind {
    /// Kinds in display order
    pub const ALL: [TagKind; 4] = [
        TagKind::Qualification,
        TagKind::Position,
        TagKind::Class,
        TagKind::Affix,
    ];

    /// Kind of the given tag id
    pub fn of(id: TagId) -> Self {
        if QUALIFICATION_TAGS.contains(&id) {
            Self::Qualification
        } else if POSITION_TAGS.contains(&id) {
            Self::Position
        } else if CLASS_TAGS.contains(&id) {
            Self::Class
        } else {
            Self::Affix
        }
    }

    /// Fixed ordering for non-affix kinds
    fn order(self) -> Option<&'static [TagId]> {
        match self {
            Self::Qualification => Some(QUALIFICATION_TAGS),
            Self::Position => Some(POSITION_TAGS),
            Self::Class => Some(CLASS_TAGS),
            Self::Affix => None,
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Qualification => write!(f, "Qualification"),
            Self::Position => write!(f, "Position"),
            Self::Class => write!(f, "Class"),
            Self::Affix => write!(f, "Affix"),
        }
    }
}

// ============================================================================
// Tags
// ============================================================================

/// A selectable tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
}

impl Tag {
    pub fn new(id: TagId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn kind(&self) -> TagKind {
        TagKind::of(self.id)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Tag entry from the game's gacha table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GachaTag {
    #[serde(alias = "TagId")]
    pub tag_id: TagId,
    #[serde(alias = "TagName")]
    pub tag_name: String,
    #[serde(default, alias = "TagGroup")]
    pub tag_group: i32,
}

impl From<GachaTag> for Tag {
    fn from(tag: GachaTag) -> Self {
        Tag::new(tag.tag_id, tag.tag_name)
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// All selectable tags, in game table order
#[derive(Debug, Clone, Default)]
pub struct TagCatalog {
    tags: Vec<Tag>,
}

impl TagCatalog {
    /// Build a catalog, dropping hidden tags and duplicate ids
    pub fn new<I>(tags: I) -> Self
    where
        I: IntoIterator<Item = Tag>,
    {
        let mut catalog = Self::default();
        for tag in tags {
            if HIDDEN_TAGS.contains(&tag.id) || catalog.get(tag.id).is_some() {
                continue;
            }
            catalog.tags.push(tag);
        }
        catalog
    }

    pub fn from_gacha_tags(tags: &[GachaTag]) -> Self {
        Self::new(tags.iter().cloned().map(Tag::from))
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Look up a tag by id
    pub fn get(&self, id: TagId) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == id)
    }

    /// Look up a tag by name, exact match first, then case-insensitive
    pub fn by_name(&self, name: &str) -> Option<&Tag> {
        self.tags
            .iter()
            .find(|t| t.name == name)
            .or_else(|| self.tags.iter().find(|t| t.name.eq_ignore_ascii_case(name)))
    }

    /// Resolve a user query that is either a numeric id or a tag name
    pub fn resolve(&self, query: &str) -> Option<&Tag> {
        let query = query.trim();
        match query.parse::<TagId>() {
            Ok(id) => self.get(id),
            Err(_) => self.by_name(query),
        }
    }

    /// Tags grouped by kind, in display order; empty groups are omitted
    pub fn grouped(&self) -> Vec<(TagKind, Vec<&Tag>)> {
        TagKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let mut group: Vec<&Tag> = self.tags.iter().filter(|t| t.kind() == kind).collect();
                match kind.order() {
                    Some(order) => group.sort_by_key(|t| order.iter().position(|id| *id == t.id)),
                    None => group.sort_by_key(|t| t.id),
                }
                (!group.is_empty()).then_some((kind, group))
            })
            .collect()
    }
}

// ============================================================================
// Selection
// ============================================================================

/// Errors building a tag selection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Too many tags selected: {count} (maximum {max})")]
    TooManyTags { count: usize, max: usize },

    #[error("Unknown tag: {0}")]
    UnknownTag(String),
}

/// A player's tag selection: distinct tags, at most [`MAX_SELECTED_TAGS`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    tags: Vec<Tag>,
}

impl Selection {
    /// Build a selection; duplicate ids keep their first position
    pub fn new<I>(tags: I) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = Tag>,
    {
        let tags = dedup(tags);
        if tags.len() > MAX_SELECTED_TAGS {
            return Err(SelectionError::TooManyTags {
                count: tags.len(),
                max: MAX_SELECTED_TAGS,
            });
        }
        Ok(Self { tags })
    }

    /// Resolve ids or names through the catalog
    pub fn resolve<S: AsRef<str>>(
        queries: &[S],
        catalog: &TagCatalog,
    ) -> Result<Self, SelectionError> {
        let tags = queries
            .iter()
            .map(|q| {
                catalog
                    .resolve(q.as_ref())
                    .cloned()
                    .ok_or_else(|| SelectionError::UnknownTag(q.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(tags)
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Remove repeated ids, keeping first occurrences in order
pub(crate) fn dedup<I>(tags: I) -> Vec<Tag>
where
    I: IntoIterator<Item = Tag>,
{
    let mut out: Vec<Tag> = Vec::new();
    for tag in tags {
        if !out.iter().any(|t| t.id == tag.id) {
            out.push(tag);
        }
    }
    out
}
