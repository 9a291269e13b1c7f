//! Recruitable pool extraction
//!
//! The game does not ship the recruitment pool as structured data. It is
//! embedded in the `recruitDetail` rules text, grouped by rarity:
//!
//! ```text
//! ★
//! <@rc.eml>Lancet-2</> / <@rc.eml>Castle-3</>
//! --------------------
//! ★★
//! Yato / Noir Corne / Rangers
//! ```
//!
//! Names wrapped in `<@rc.eml>` are recruitment-only. Everything else is a
//! slash or newline separated list; candidates that do not name a real
//! character are ignored by the caller.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

use crate::operator::Operator;

/// `<@rc.eml>Name</>`
static RECRUIT_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<@rc\.eml>([^<]+)</>").expect("valid recruit-only pattern"));

/// `/ Name`, newline + Name, or an escaped `\n` + Name
static LISTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:/\s*|\n\s*|\\n\s*)([^\r\n/★<>]+)").expect("valid listed pattern")
});

/// Localized spellings in the rules text that differ from character names
fn substitute(name: String) -> String {
    match name.as_str() {
        "justice knight" => "'justice knight'".to_string(),
        "サーマル-ex" => "thrm-ex".to_string(),
        "샤미르" => "샤마르".to_string(),
        _ => name,
    }
}

fn normalize(raw: &str) -> Option<String> {
    let name = raw.trim().to_lowercase();
    if name.is_empty()
        || name.starts_with('-')
        || name.ends_with('-')
        || name.chars().all(|c| c == '★' || c.is_whitespace())
    {
        return None;
    }
    Some(substitute(name))
}

/// Candidate names parsed from the rules text, lowercased
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecruitPool {
    names: BTreeSet<String>,
    recruit_only: BTreeSet<String>,
}

impl RecruitPool {
    pub fn parse(detail: &str) -> Self {
        let recruit_only: BTreeSet<String> = RECRUIT_ONLY
            .captures_iter(detail)
            .filter_map(|cap| cap.get(1))
            .filter_map(|m| normalize(m.as_str()))
            .collect();

        let mut names = recruit_only.clone();
        names.extend(
            LISTED
                .captures_iter(detail)
                .filter_map(|cap| cap.get(1))
                .filter_map(|m| normalize(m.as_str())),
        );

        Self {
            names,
            recruit_only,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    pub fn is_recruit_only(&self, name: &str) -> bool {
        self.recruit_only.contains(&name.to_lowercase())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Keep pool members in input order and flag the recruit-only ones
    pub fn filter(&self, operators: Vec<Operator>) -> Vec<Operator> {
        operators
            .into_iter()
            .filter(|op| self.contains(&op.name))
            .map(|mut op| {
                op.recruit_only = self.is_recruit_only(&op.name);
                op
            })
            .collect()
    }
}

/// Lowercased names of the characters in `operators` that the rules text lists
pub fn recruitable_names(detail: &str, operators: &[Operator]) -> BTreeSet<String> {
    let pool = RecruitPool::parse(detail);
    operators
        .iter()
        .map(|op| op.name.to_lowercase())
        .filter(|name| pool.contains(name))
        .collect()
}

/// The subset of `operators` the rules text lists
pub fn recruitable_roster(detail: &str, operators: Vec<Operator>) -> Vec<Operator> {
    RecruitPool::parse(detail).filter(operators)
}
