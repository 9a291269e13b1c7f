//! Tag combination engine
//!
//! Given up to five selected tags, evaluates every non-empty subset against
//! the roster and ranks the subsets by the rarity they guarantee.
//!
//! The steps are exposed individually so that the remote strategy in
//! [`crate::strategy`] can reuse everything after matching:
//!
//! 1. [`subsets`] enumerates the 2^n - 1 non-empty subsets
//! 2. [`has_top_operator`] computes the selection-wide 6★ gate
//! 3. [`match_subset`] keeps candidates passing the gate and every tag
//! 4. [`TagCombination::from_matches`] applies display filters and metrics
//! 5. [`rank`] orders the surviving combinations

use serde::{Deserialize, Serialize};

use crate::classifier;
use crate::operator::{Operator, Rarity};
use crate::tag::{dedup, ids, Tag, TagId, MAX_SELECTED_TAGS};

/// Display filters chosen by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolveOptions {
    /// Keep 2★ operators (and any other rarity below 3 except robots)
    pub show_low_rarity: bool,
    /// Keep 1★ robot operators
    pub include_robots: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            show_low_rarity: false,
            include_robots: true,
        }
    }
}

impl SolveOptions {
    /// Whether an operator of this rarity survives the display filters
    pub fn is_visible(&self, rarity: Rarity) -> bool {
        if rarity == Rarity::ROBOT {
            return self.include_robots;
        }
        self.show_low_rarity || rarity >= Rarity::STANDARD
    }
}

/// One evaluated subset of the selected tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagCombination {
    pub tags: Vec<TagId>,
    pub tag_names: Vec<String>,
    /// Matched and filtered operators, rarity descending then name
    pub operators: Vec<Operator>,
    pub min_rarity: Rarity,
    pub max_rarity: Rarity,
    pub guaranteed_rarity: Rarity,
}

impl TagCombination {
    /// Build a combination from the operators matched for `subset`
    ///
    /// Returns `None` when no operator survives the display filters.
    pub fn from_matches<I>(subset: &[Tag], matches: I, options: &SolveOptions) -> Option<Self>
    where
        I: IntoIterator<Item = Operator>,
    {
        let mut operators = apply_display_filters(matches, options);
        if operators.is_empty() {
            return None;
        }
        operators.sort_by(Operator::display_order);

        let min_rarity = operators.iter().map(|op| op.rarity).min()?;
        let max_rarity = operators.iter().map(|op| op.rarity).max()?;

        Some(TagCombination {
            tags: subset.iter().map(|t| t.id).collect(),
            tag_names: subset.iter().map(|t| t.name.clone()).collect(),
            operators,
            min_rarity,
            max_rarity,
            guaranteed_rarity: guaranteed_rarity(subset, min_rarity),
        })
    }

    pub fn contains_tag(&self, id: TagId) -> bool {
        self.tags.contains(&id)
    }
}

/// Rarity floor guaranteed by a subset with the given minimum rarity
pub fn guaranteed_rarity(subset: &[Tag], min_rarity: Rarity) -> Rarity {
    if subset.iter().any(|t| t.id == ids::TOP_OPERATOR) {
        Rarity::TOP
    } else if subset.iter().any(|t| t.id == ids::SENIOR_OPERATOR) {
        min_rarity.max(Rarity::SENIOR)
    } else {
        min_rarity
    }
}

/// Every non-empty subset of `tags`
///
/// Subset `k` (1-based) contains tag `i` when bit `i` of `k` is set, so the
/// order is fixed by the input order. Tags keep input order within a subset.
/// Callers pass at most [`MAX_SELECTED_TAGS`] tags, as
/// [`normalize_selection`] guarantees.
pub fn subsets(tags: &[Tag]) -> Vec<Vec<Tag>> {
    let n = tags.len();
    debug_assert!(n <= MAX_SELECTED_TAGS, "{} tags exceed the selection limit", n);
    (1u32..(1u32 << n))
        .map(|mask| {
            tags.iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, tag)| tag.clone())
                .collect()
        })
        .collect()
}

/// Whether the selection contains the Top Operator tag anywhere
pub fn has_top_operator(selection: &[Tag]) -> bool {
    selection.iter().any(|t| t.id == ids::TOP_OPERATOR)
}

/// 6★ operators only appear when the selection contains Top Operator
pub fn passes_top_operator_gate(operator: &Operator, has_top_operator: bool) -> bool {
    has_top_operator || operator.rarity != Rarity::TOP
}

/// Candidates that pass the 6★ gate and satisfy every tag in `subset`
pub fn match_subset<'a, I>(subset: &[Tag], candidates: I, has_top_operator: bool) -> Vec<&'a Operator>
where
    I: IntoIterator<Item = &'a Operator>,
{
    candidates
        .into_iter()
        .filter(|op| passes_top_operator_gate(op, has_top_operator))
        .filter(|op| classifier::matches_all(op, subset))
        .collect()
}

/// Drop operators hidden by the display filters
pub fn apply_display_filters<I>(operators: I, options: &SolveOptions) -> Vec<Operator>
where
    I: IntoIterator<Item = Operator>,
{
    operators
        .into_iter()
        .filter(|op| options.is_visible(op.rarity))
        .collect()
}

/// Sort by guaranteed rarity (desc), pool size (asc), max rarity (desc)
///
/// The sort is stable, so ties keep subset enumeration order.
pub fn rank(results: &mut [TagCombination]) {
    results.sort_by(|a, b| {
        b.guaranteed_rarity
            .cmp(&a.guaranteed_rarity)
            .then_with(|| a.operators.len().cmp(&b.operators.len()))
            .then_with(|| b.max_rarity.cmp(&a.max_rarity))
    });
}

/// Distinct selected tags, capped at [`MAX_SELECTED_TAGS`]
pub fn normalize_selection(selected: &[Tag]) -> Vec<Tag> {
    let mut tags = dedup(selected.iter().cloned());
    if tags.len() > MAX_SELECTED_TAGS {
        tracing::warn!(
            "{} tags selected, only the first {} are considered",
            tags.len(),
            MAX_SELECTED_TAGS
        );
        tags.truncate(MAX_SELECTED_TAGS);
    }
    tags
}

/// Evaluate and rank every tag combination against a local roster
pub fn solve(selected: &[Tag], roster: &[Operator], options: &SolveOptions) -> Vec<TagCombination> {
    let selection = normalize_selection(selected);
    if selection.is_empty() {
        return Vec::new();
    }

    let gate = has_top_operator(&selection);
    let mut results: Vec<TagCombination> = subsets(&selection)
        .iter()
        .filter_map(|subset| {
            let matched = match_subset(subset, roster, gate);
            tracing::debug!("{} tag(s): {} match(es)", subset.len(), matched.len());
            TagCombination::from_matches(subset, matched.into_iter().cloned(), options)
        })
        .collect();

    rank(&mut results);
    results
}
