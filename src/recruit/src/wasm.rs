//! WebAssembly bindings for recruit
//!
//! Wraps a local solver loaded from a game data bundle. Results cross the
//! boundary as plain JS objects in the same camelCase shape the CLI prints.

use wasm_bindgen::prelude::*;

use crate::combination::SolveOptions;
use crate::gamedata::GameData;
use crate::strategy::{LocalSolver, RecruitmentSolver};
use crate::tag::{Tag, TagCatalog, TagId};

/// JavaScript-friendly solver
#[wasm_bindgen]
pub struct Recruiter {
    catalog: TagCatalog,
    solver: LocalSolver,
}

#[wasm_bindgen]
impl Recruiter {
    /// Build from a game data JSON document
    #[wasm_bindgen(constructor)]
    pub fn new(game_data_json: &str) -> Result<Recruiter, JsValue> {
        let data = GameData::from_json(game_data_json)
            .map_err(|e| JsValue::from_str(&format!("Load failed: {}", e)))?;
        Ok(Recruiter {
            catalog: data.catalog(),
            solver: LocalSolver::new(data.roster()),
        })
    }

    /// Number of recruitable operators
    #[wasm_bindgen(js_name = operatorCount)]
    pub fn operator_count(&self) -> usize {
        self.solver.roster().len()
    }

    /// Selectable tags grouped by kind, as `[[kind, [tag, ...]], ...]`
    #[wasm_bindgen(js_name = tags)]
    pub fn tags(&self) -> Result<JsValue, JsValue> {
        let groups: Vec<(String, Vec<&Tag>)> = self
            .catalog
            .grouped()
            .into_iter()
            .map(|(kind, tags)| (kind.to_string(), tags))
            .collect();
        to_js(&groups)
    }

    /// Ranked combinations for the selected tag ids
    #[wasm_bindgen(js_name = solve)]
    pub fn solve(
        &self,
        tag_ids: Vec<TagId>,
        show_low_rarity: bool,
        include_robots: bool,
    ) -> Result<JsValue, JsValue> {
        // Unknown ids still go to the engine, they just never match
        let selected: Vec<Tag> = tag_ids
            .into_iter()
            .map(|id| self.catalog.get(id).cloned().unwrap_or_else(|| Tag::new(id, "")))
            .collect();
        let options = SolveOptions {
            show_low_rarity,
            include_robots,
        };

        to_js(&self.solver.solve(&selected, &options))
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))?;
    js_sys::JSON::parse(&json)
}
