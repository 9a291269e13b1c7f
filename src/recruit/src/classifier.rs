//! Tag classification
//!
//! Decides whether an operator satisfies a single tag. Position, class and
//! qualification tags are resolved from fixed id tables; every other tag is
//! an affix and is matched by name against the operator's tag list.

use crate::operator::{Operator, Position, Profession, Rarity};
use crate::tag::{ids, Tag, TagId};

/// Id-based predicate for a non-affix tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRule {
    Position(Position),
    Class(Profession),
    Qualification(Rarity),
}

impl TagRule {
    pub fn accepts(self, operator: &Operator) -> bool {
        match self {
            Self::Position(position) => operator.position == position,
            Self::Class(profession) => operator.profession == profession,
            Self::Qualification(rarity) => operator.rarity == rarity,
        }
    }
}

impl Profession {
    /// Class tag id for this profession
    pub const fn tag_id(self) -> TagId {
        match self {
            Self::Guard => ids::GUARD,
            Self::Sniper => ids::SNIPER,
            Self::Defender => ids::DEFENDER,
            Self::Medic => ids::MEDIC,
            Self::Supporter => ids::SUPPORTER,
            Self::Caster => ids::CASTER,
            Self::Specialist => ids::SPECIALIST,
            Self::Vanguard => ids::VANGUARD,
        }
    }

    /// Profession encoded by a class tag id
    pub fn from_tag_id(id: TagId) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.tag_id() == id)
    }
}

fn position_for(id: TagId) -> Option<Position> {
    match id {
        ids::MELEE => Some(Position::Melee),
        ids::RANGED => Some(Position::Ranged),
        _ => None,
    }
}

/// Rarity required by a qualification tag. Ranks 3 and 4 have none.
pub fn qualification_rarity(id: TagId) -> Option<Rarity> {
    match id {
        ids::TOP_OPERATOR => Some(Rarity::TOP),
        ids::SENIOR_OPERATOR => Some(Rarity::SENIOR),
        ids::STARTER => Some(Rarity::STARTER),
        ids::ROBOT => Some(Rarity::ROBOT),
        _ => None,
    }
}

/// Id-based rule for a tag, `None` for affix tags
pub fn rule_for(id: TagId) -> Option<TagRule> {
    position_for(id)
        .map(TagRule::Position)
        .or_else(|| Profession::from_tag_id(id).map(TagRule::Class))
        .or_else(|| qualification_rarity(id).map(TagRule::Qualification))
}

/// Whether `operator` satisfies the tag `(tag_id, tag_name)`
pub fn matches(operator: &Operator, tag_id: TagId, tag_name: &str) -> bool {
    match rule_for(tag_id) {
        Some(rule) => rule.accepts(operator),
        None => operator.tag_list.iter().any(|t| t == tag_name),
    }
}

/// Whether `operator` satisfies every tag
pub fn matches_all(operator: &Operator, tags: &[Tag]) -> bool {
    tags.iter().all(|tag| matches(operator, tag.id, &tag.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::{TagKind, CLASS_TAGS};

    fn op(rarity: u8, profession: Profession, position: Position, tags: &[&str]) -> Operator {
        Operator {
            id: "char_test".to_string(),
            name: "Test".to_string(),
            rarity: Rarity::new(rarity).unwrap(),
            profession,
            position,
            tag_list: tags.iter().map(|t| t.to_string()).collect(),
            recruit_only: false,
        }
    }

    #[test]
    fn test_profession_tag_ids_are_a_bijection() {
        let mut seen: Vec<TagId> = Profession::ALL.iter().map(|p| p.tag_id()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), Profession::ALL.len());

        for p in Profession::ALL {
            assert_eq!(Profession::from_tag_id(p.tag_id()), Some(p));
        }
        for id in CLASS_TAGS {
            assert!(Profession::from_tag_id(*id).is_some());
        }
    }

    #[test]
    fn test_class_tag_names_match_professions() {
        assert_eq!(Profession::from_tag_id(ids::GUARD).map(|p| p.name()), Some("Guard"));
        assert_eq!(Profession::from_tag_id(ids::VANGUARD).map(|p| p.name()), Some("Vanguard"));
        assert_eq!(Profession::from_tag_id(ids::DEFENDER).map(|p| p.name()), Some("Defender"));
    }

    #[test]
    fn test_rules_agree_with_tag_kinds() {
        for id in 0..40 {
            let expected = match TagKind::of(id) {
                TagKind::Affix => None,
                kind => Some(kind),
            };
            let actual = rule_for(id).map(|rule| match rule {
                TagRule::Position(_) => TagKind::Position,
                TagRule::Class(_) => TagKind::Class,
                TagRule::Qualification(_) => TagKind::Qualification,
            });
            assert_eq!(actual, expected, "tag id {}", id);
        }
    }

    #[test]
    fn test_position_tags() {
        let melee = op(4, Profession::Guard, Position::Melee, &[]);
        assert!(matches(&melee, ids::MELEE, "Melee"));
        assert!(!matches(&melee, ids::RANGED, "Ranged"));
    }

    #[test]
    fn test_class_tags() {
        let medic = op(3, Profession::Medic, Position::Ranged, &[]);
        assert!(matches(&medic, ids::MEDIC, "Medic"));
        assert!(!matches(&medic, ids::CASTER, "Caster"));
    }

    #[test]
    fn test_qualification_tags() {
        let six = op(6, Profession::Sniper, Position::Ranged, &[]);
        let five = op(5, Profession::Sniper, Position::Ranged, &[]);
        let two = op(2, Profession::Sniper, Position::Ranged, &[]);
        let one = op(1, Profession::Sniper, Position::Ranged, &[]);

        assert!(matches(&six, ids::TOP_OPERATOR, "Top Operator"));
        assert!(!matches(&five, ids::TOP_OPERATOR, "Top Operator"));
        assert!(matches(&five, ids::SENIOR_OPERATOR, "Senior Operator"));
        assert!(!matches(&six, ids::SENIOR_OPERATOR, "Senior Operator"));
        assert!(matches(&two, ids::STARTER, "Starter"));
        assert!(matches(&one, ids::ROBOT, "Robot"));
        assert!(!matches(&two, ids::ROBOT, "Robot"));
    }

    #[test]
    fn test_id_rules_ignore_tag_list() {
        // A tag list naming "Melee" does not make a ranged operator melee
        let ranged = op(4, Profession::Caster, Position::Ranged, &["Melee"]);
        assert!(!matches(&ranged, ids::MELEE, "Melee"));
    }

    #[test]
    fn test_affix_tags_match_by_name() {
        let slower = op(4, Profession::Caster, Position::Ranged, &["Slow", "DPS"]);
        assert!(matches(&slower, 23, "Slow"));
        assert!(!matches(&slower, 23, "slow"));
        assert!(!matches(&slower, 19, "Shift"));
    }

    #[test]
    fn test_unknown_tag_without_name_is_never_true() {
        let any = op(4, Profession::Caster, Position::Ranged, &["DPS"]);
        assert!(!matches(&any, 4242, "Not A Tag"));
    }

    #[test]
    fn test_matches_all_is_conjunctive() {
        let guard = op(5, Profession::Guard, Position::Melee, &["DPS"]);
        let tags = vec![
            Tag::new(ids::GUARD, "Guard"),
            Tag::new(ids::MELEE, "Melee"),
            Tag::new(15, "DPS"),
        ];
        assert!(matches_all(&guard, &tags));

        let mut with_ranged = tags.clone();
        with_ranged.push(Tag::new(ids::RANGED, "Ranged"));
        assert!(!matches_all(&guard, &with_ranged));
        assert!(matches_all(&guard, &[]));
    }
}
