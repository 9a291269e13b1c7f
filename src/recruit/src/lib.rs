//! # recruit
//!
//! Recruitment tag-combination solver - tag classification, subset ranking,
//! and game data loading.
//!
//! This library provides functionality to:
//! - Classify operators against recruitment tags
//! - Evaluate every combination of up to five selected tags
//! - Rank combinations by the rarity they guarantee
//! - Extract the recruitable pool from the game's rules text
//!
//! ## Example
//!
//! ```no_run
//! use recruit::{GameData, LocalSolver, RecruitmentSolver, Selection, SolveOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = GameData::load("gamedata.json")?;
//! let catalog = data.catalog();
//! let solver = LocalSolver::new(data.roster());
//!
//! let selection = Selection::resolve(&["Top Operator", "Guard", "Melee"], &catalog)?;
//! for combo in solver.solve(selection.tags(), &SolveOptions::default()) {
//!     println!("{:?} -> {}", combo.tag_names, combo.guaranteed_rarity);
//! }
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod combination;
pub mod gamedata;
pub mod operator;
pub mod pool;
pub mod strategy;
pub mod tag;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
#[doc(inline)]
pub use classifier::{matches, matches_all, rule_for, TagRule};
#[doc(inline)]
pub use combination::{solve, SolveOptions, TagCombination};
#[doc(inline)]
pub use gamedata::{DataError, GameData};
#[doc(inline)]
pub use operator::{Operator, OperatorRecord, ParseError, Position, Profession, Rarity, Roster};
#[doc(inline)]
pub use pool::{recruitable_names, recruitable_roster, RecruitPool};
#[doc(inline)]
pub use strategy::{LocalSolver, RecruitmentSolver, RemoteSolver, SourceError, SubsetSource};
#[doc(inline)]
pub use tag::{
    ids, GachaTag, Selection, SelectionError, Tag, TagCatalog, TagId, TagKind, MAX_SELECTED_TAGS,
};
