//! Loot tables. Validated on load, never rolled here.

use crate::rng::Weighted;

/// Loot table assigned to `unique` and `boss` units.
pub const ELITE_LOOT_TABLE: &str = "elite_creep";
/// Loot table assigned to every other unit.
pub const COMMON_LOOT_TABLE: &str = "common_creep";

#[derive(Clone, Debug, PartialEq)]
pub struct LootEntry {
    pub group: String,
    pub weight: f64,
}

impl Weighted for LootEntry {
    fn weight(&self) -> f64 {
        self.weight
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LootTable {
    pub id: String,
    pub rolls: u32,
    pub entries: Vec<LootEntry>,
}
