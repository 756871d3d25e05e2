//! Monster templates.

use super::damage::ResistanceMap;

/// Unscaled combat stats of a monster template.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BaseStats {
    pub hp: f64,
    pub dps: f64,
    pub def: f64,
}

impl BaseStats {
    pub const fn new(hp: f64, dps: f64, def: f64) -> Self {
        Self { hp, dps, def }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Monster {
    pub id: String,
    /// Role tag (`melee`, `caster`, ...), carried through unchanged.
    pub role: String,
    pub base_level_offset: i32,
    pub base_stats: BaseStats,
    pub resists: ResistanceMap,
    /// Opaque AI behaviour identifier.
    pub ai: String,
}

impl Monster {
    /// Display form of the id: first character upper-cased.
    pub fn display_name(&self) -> String {
        let mut chars = self.id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
