//! Interchangeable solver strategies
//!
//! [`LocalSolver`] filters an embedded roster. [`RemoteSolver`] asks a
//! [`SubsetSource`] for each subset's matches in parallel and ranks the
//! joined results. Both share matching, filtering and ranking with
//! [`crate::combination`], so they agree on identical data.

use rayon::prelude::*;

use crate::combination::{
    self, has_top_operator, match_subset, normalize_selection, rank, subsets, SolveOptions,
    TagCombination,
};
use crate::operator::{Operator, Roster};
use crate::tag::{ids, Tag};

/// Anything that turns a tag selection into ranked combinations
pub trait RecruitmentSolver {
    fn solve(&self, selected: &[Tag], options: &SolveOptions) -> Vec<TagCombination>;
}

// ============================================================================
// Local
// ============================================================================

/// Solves against a roster held in memory
#[derive(Debug, Clone, Default)]
pub struct LocalSolver {
    roster: Roster,
}

impl LocalSolver {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}

impl RecruitmentSolver for LocalSolver {
    fn solve(&self, selected: &[Tag], options: &SolveOptions) -> Vec<TagCombination> {
        combination::solve(selected, self.roster.operators(), options)
    }
}

// ============================================================================
// Remote
// ============================================================================

/// Errors fetching a single subset's matches
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Server returned status {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Resolves the operators matching every tag of one subset
pub trait SubsetSource: Sync {
    fn fetch(&self, subset: &[Tag]) -> Result<Vec<Operator>, SourceError>;
}

/// A roster answers subset queries directly; useful as an in-process source
impl SubsetSource for Roster {
    fn fetch(&self, subset: &[Tag]) -> Result<Vec<Operator>, SourceError> {
        Ok(match_subset(subset, self.operators(), true)
            .into_iter()
            .cloned()
            .collect())
    }
}

/// Fans subset queries out to a [`SubsetSource`]
#[derive(Debug, Clone)]
pub struct RemoteSolver<S> {
    source: S,
}

impl<S: SubsetSource> RemoteSolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: SubsetSource> RecruitmentSolver for RemoteSolver<S> {
    fn solve(&self, selected: &[Tag], options: &SolveOptions) -> Vec<TagCombination> {
        let selection = normalize_selection(selected);
        if selection.is_empty() {
            return Vec::new();
        }

        let gate = has_top_operator(&selection);
        let subsets = subsets(&selection);

        // par_iter().collect() keeps subset order
        let fetched: Vec<Vec<Operator>> = subsets
            .par_iter()
            .map(|subset| match self.source.fetch(subset) {
                Ok(operators) => operators,
                Err(e) => {
                    let names: Vec<&str> = subset.iter().map(|t| t.name.as_str()).collect();
                    tracing::warn!("Subset [{}] failed, treating as empty: {}", names.join(", "), e);
                    Vec::new()
                }
            })
            .collect();

        // Sources gate 6★ per request, so a subset's 6★ matches arrive with
        // the same subset plus Top Operator
        let top_bit = if gate {
            selection.iter().position(|t| t.id == ids::TOP_OPERATOR)
        } else {
            None
        };

        let mut results: Vec<TagCombination> = subsets
            .iter()
            .enumerate()
            .filter_map(|(index, subset)| {
                let candidates = merged_candidates(&fetched, index, top_bit);
                let matched = match_subset(subset, candidates, gate);
                TagCombination::from_matches(subset, matched.into_iter().cloned(), options)
            })
            .collect();

        rank(&mut results);
        results
    }
}

/// Operators fetched for subset `index`, joined by id with those fetched for
/// the subset that also holds the Top Operator tag at bit `top_bit`
///
/// Subset `index` has mask `index + 1`, as laid out by [`subsets`].
fn merged_candidates(
    fetched: &[Vec<Operator>],
    index: usize,
    top_bit: Option<usize>,
) -> Vec<&Operator> {
    let mut candidates: Vec<&Operator> = fetched[index].iter().collect();
    let mask = index + 1;

    if let Some(bit) = top_bit.filter(|&bit| mask & (1 << bit) == 0) {
        let superset = (mask | (1 << bit)) - 1;
        for op in &fetched[superset] {
            if !candidates.iter().any(|c| c.id == op.id) {
                candidates.push(op);
            }
        }
    }

    candidates
}
