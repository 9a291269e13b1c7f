//! Recruitable operator model
//!
//! Operators arrive from the game data provider with loosely typed fields
//! (rarity as `TIER_n` strings, professions as internal game names). This
//! module normalizes them into strongly typed [`Operator`] values.

use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Errors converting raw operator fields into typed values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown profession: {0}")]
    InvalidProfession(String),

    #[error("Unknown position: {0}")]
    InvalidPosition(String),
}

// ============================================================================
// Rarity
// ============================================================================

/// Operator rarity, always in `1..=6`
///
/// Source data may encode rarity as a tier string (`TIER_1`..`TIER_6`) or
/// as a bare number. Anything that cannot be read falls back to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rarity(u8);

impl Rarity {
    /// Rarity of "Robot" operators
    pub const ROBOT: Rarity = Rarity(1);
    /// Rarity of "Starter" operators
    pub const STARTER: Rarity = Rarity(2);
    /// Lowest rarity kept when low rarities are hidden
    pub const STANDARD: Rarity = Rarity(3);
    /// Rarity of "Senior Operator" operators
    pub const SENIOR: Rarity = Rarity(5);
    /// Rarity of "Top Operator" operators
    pub const TOP: Rarity = Rarity(6);

    pub const MIN: Rarity = Self::ROBOT;
    pub const MAX: Rarity = Self::TOP;

    /// Create a rarity from a star count, `None` when out of range
    pub fn new(stars: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&stars)
            .then_some(Rarity(stars))
    }

    /// Star count (1-6)
    pub fn stars(self) -> u8 {
        self.0
    }

    /// Parse `TIER_6`, `6` or ` tier_6 `; unreadable values become 1
    pub fn parse_lenient(value: &str) -> Self {
        let trimmed = value.trim();
        let upper = trimmed.to_ascii_uppercase();
        let digits = upper.strip_prefix("TIER_").unwrap_or(&upper);

        digits
            .parse::<u8>()
            .ok()
            .and_then(Rarity::new)
            .unwrap_or(Self::MIN)
    }

    fn from_number(value: i64) -> Self {
        u8::try_from(value)
            .ok()
            .and_then(Rarity::new)
            .unwrap_or(Self::MIN)
    }
}

impl Default for Rarity {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}★", self.0)
    }
}

impl<'de> Deserialize<'de> for Rarity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Number(n) => n.as_i64().map_or(Self::MIN, Self::from_number),
            serde_json::Value::String(s) => Self::parse_lenient(&s),
            _ => Self::MIN,
        })
    }
}

// ============================================================================
// Profession
// ============================================================================

/// Operator class
///
/// Serialized with the game's internal names (`WARRIOR`, `TANK`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Profession {
    #[serde(rename = "WARRIOR", alias = "Guard")]
    Guard,
    #[serde(rename = "SNIPER", alias = "Sniper")]
    Sniper,
    #[serde(rename = "TANK", alias = "Defender")]
    Defender,
    #[serde(rename = "MEDIC", alias = "Medic")]
    Medic,
    #[serde(rename = "SUPPORT", alias = "Supporter")]
    Supporter,
    #[serde(rename = "CASTER", alias = "Caster")]
    Caster,
    #[serde(rename = "SPECIAL", alias = "Specialist")]
    Specialist,
    #[serde(rename = "PIONEER", alias = "Vanguard")]
    Vanguard,
}

impl Profession {
    /// Every profession, in class-tag id order
    pub const ALL: [Profession; 8] = [
        Profession::Guard,
        Profession::Sniper,
        Profession::Defender,
        Profession::Medic,
        Profession::Supporter,
        Profession::Caster,
        Profession::Specialist,
        Profession::Vanguard,
    ];

    /// Internal game name
    pub fn game_name(self) -> &'static str {
        match self {
            Self::Guard => "WARRIOR",
            Self::Sniper => "SNIPER",
            Self::Defender => "TANK",
            Self::Medic => "MEDIC",
            Self::Supporter => "SUPPORT",
            Self::Caster => "CASTER",
            Self::Specialist => "SPECIAL",
            Self::Vanguard => "PIONEER",
        }
    }

    /// Display name, matching the class tag name
    pub fn name(self) -> &'static str {
        match self {
            Self::Guard => "Guard",
            Self::Sniper => "Sniper",
            Self::Defender => "Defender",
            Self::Medic => "Medic",
            Self::Supporter => "Supporter",
            Self::Caster => "Caster",
            Self::Specialist => "Specialist",
            Self::Vanguard => "Vanguard",
        }
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profession {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| {
                p.game_name().eq_ignore_ascii_case(trimmed) || p.name().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ParseError::InvalidProfession(s.to_string()))
    }
}

// ============================================================================
// Position
// ============================================================================

/// Deployment position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "MELEE", alias = "Melee")]
    Melee,
    #[serde(rename = "RANGED", alias = "Ranged")]
    Ranged,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Melee => write!(f, "Melee"),
            Self::Ranged => write!(f, "Ranged"),
        }
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MELEE" => Ok(Self::Melee),
            "RANGED" => Ok(Self::Ranged),
            _ => Err(ParseError::InvalidPosition(s.to_string())),
        }
    }
}

// ============================================================================
// Operator
// ============================================================================

/// Operator entry as delivered by the data provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub rarity: Rarity,
    pub profession: String,
    pub position: String,
    #[serde(default, alias = "tag_list")]
    pub tag_list: Option<Vec<String>>,
}

/// A recruitable operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    pub profession: Profession,
    pub position: Position,
    /// Affix tag names this operator satisfies
    #[serde(default)]
    pub tag_list: Vec<String>,
    /// Only obtainable through recruitment
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub recruit_only: bool,
}

impl Operator {
    /// Display order: rarity descending, then name ascending
    pub fn display_order(a: &Operator, b: &Operator) -> Ordering {
        b.rarity.cmp(&a.rarity).then_with(|| a.name.cmp(&b.name))
    }
}

impl TryFrom<OperatorRecord> for Operator {
    type Error = ParseError;

    fn try_from(record: OperatorRecord) -> Result<Self, Self::Error> {
        let profession = record.profession.parse()?;
        let position = record.position.parse()?;

        Ok(Operator {
            id: record.id.unwrap_or_else(|| record.name.clone()),
            name: record.name,
            rarity: record.rarity,
            profession,
            position,
            tag_list: record.tag_list.unwrap_or_default(),
            recruit_only: false,
        })
    }
}

// ============================================================================
// Roster
// ============================================================================

/// The full list of operators eligible for recruitment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    operators: Vec<Operator>,
}

impl Roster {
    pub fn new(operators: Vec<Operator>) -> Self {
        Self { operators }
    }

    /// Build a roster from raw records, skipping records that cannot be typed
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = OperatorRecord>,
    {
        let operators = records
            .into_iter()
            .filter_map(|record| {
                let name = record.name.clone();
                match Operator::try_from(record) {
                    Ok(op) => Some(op),
                    Err(e) => {
                        tracing::warn!("Skipping operator {}: {}", name, e);
                        None
                    }
                }
            })
            .collect();

        Self { operators }
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn into_operators(self) -> Vec<Operator> {
        self.operators
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, rarity: &str, profession: &str, position: &str) -> OperatorRecord {
        OperatorRecord {
            id: Some(format!("char_{}", name.to_lowercase())),
            name: name.to_string(),
            rarity: Rarity::parse_lenient(rarity),
            profession: profession.to_string(),
            position: position.to_string(),
            tag_list: None,
        }
    }

    #[test]
    fn test_rarity_parse_tier_strings() {
        assert_eq!(Rarity::parse_lenient("TIER_6"), Rarity::TOP);
        assert_eq!(Rarity::parse_lenient("TIER_5"), Rarity::SENIOR);
        assert_eq!(Rarity::parse_lenient("tier_2"), Rarity::STARTER);
        assert_eq!(Rarity::parse_lenient("4").stars(), 4);
    }

    #[test]
    fn test_rarity_unparseable_defaults_to_one() {
        assert_eq!(Rarity::parse_lenient("TIER_X"), Rarity::ROBOT);
        assert_eq!(Rarity::parse_lenient(""), Rarity::ROBOT);
        assert_eq!(Rarity::parse_lenient("TIER_9"), Rarity::ROBOT);
        assert_eq!(Rarity::parse_lenient("0"), Rarity::ROBOT);
    }

    #[test]
    fn test_rarity_deserialize_string_number_and_garbage() {
        let r: Rarity = serde_json::from_str("\"TIER_3\"").unwrap();
        assert_eq!(r.stars(), 3);
        let r: Rarity = serde_json::from_str("5").unwrap();
        assert_eq!(r, Rarity::SENIOR);
        let r: Rarity = serde_json::from_str("null").unwrap();
        assert_eq!(r, Rarity::ROBOT);
        let r: Rarity = serde_json::from_str("-3").unwrap();
        assert_eq!(r, Rarity::ROBOT);
    }

    #[test]
    fn test_rarity_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Rarity::TOP).unwrap(), "6");
        assert_eq!(Rarity::SENIOR.to_string(), "5★");
    }

    #[test]
    fn test_profession_parse_game_and_display_names() {
        assert_eq!("WARRIOR".parse::<Profession>(), Ok(Profession::Guard));
        assert_eq!("PIONEER".parse::<Profession>(), Ok(Profession::Vanguard));
        assert_eq!("Defender".parse::<Profession>(), Ok(Profession::Defender));
        assert!("TOKEN".parse::<Profession>().is_err());
    }

    #[test]
    fn test_profession_serde_uses_game_names() {
        assert_eq!(
            serde_json::to_string(&Profession::Supporter).unwrap(),
            "\"SUPPORT\""
        );
        let p: Profession = serde_json::from_str("\"Specialist\"").unwrap();
        assert_eq!(p, Profession::Specialist);
    }

    #[test]
    fn test_position_parse() {
        assert_eq!("MELEE".parse::<Position>(), Ok(Position::Melee));
        assert_eq!("ranged".parse::<Position>(), Ok(Position::Ranged));
        assert!("NONE".parse::<Position>().is_err());
    }

    #[test]
    fn test_operator_from_record() {
        let mut rec = record("Exusiai", "TIER_6", "SNIPER", "RANGED");
        rec.tag_list = Some(vec!["DPS".to_string()]);
        let op = Operator::try_from(rec).unwrap();
        assert_eq!(op.id, "char_exusiai");
        assert_eq!(op.rarity, Rarity::TOP);
        assert_eq!(op.profession, Profession::Sniper);
        assert_eq!(op.position, Position::Ranged);
        assert_eq!(op.tag_list, vec!["DPS".to_string()]);
    }

    #[test]
    fn test_operator_record_accepts_snake_case_tag_list() {
        let json = r#"{"name":"Lancet-2","rarity":"TIER_1","profession":"MEDIC","position":"RANGED","tag_list":["Healing","Robot"]}"#;
        let rec: OperatorRecord = serde_json::from_str(json).unwrap();
        let op = Operator::try_from(rec).unwrap();
        assert_eq!(op.id, "Lancet-2");
        assert_eq!(op.rarity, Rarity::ROBOT);
        assert_eq!(op.tag_list.len(), 2);
    }

    #[test]
    fn test_roster_skips_invalid_records() {
        let roster = Roster::from_records(vec![
            record("Melantha", "TIER_3", "WARRIOR", "MELEE"),
            record("Trap", "TIER_1", "TRAP", "MELEE"),
            record("Ghost", "TIER_2", "CASTER", "FLOATING"),
        ]);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.operators()[0].name, "Melantha");
    }

    #[test]
    fn test_display_order() {
        let mut ops: Vec<Operator> = vec![
            record("Beagle", "TIER_3", "TANK", "MELEE"),
            record("Silverash", "TIER_6", "WARRIOR", "MELEE"),
            record("Adnachiel", "TIER_3", "SNIPER", "RANGED"),
        ]
        .into_iter()
        .map(|r| Operator::try_from(r).unwrap())
        .collect();
        ops.sort_by(Operator::display_order);
        let names: Vec<&str> = ops.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Silverash", "Adnachiel", "Beagle"]);
    }
}
