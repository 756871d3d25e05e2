//! Difficulty records and zone-level difficulty overrides.

use super::damage::ResistanceMap;

/// A difficulty setting (`normal`, `nightmare`, `hell`, ...).
///
/// `res_bonus` is stored per damage type; a scalar bonus in the source
/// document is expanded to every type when the record is loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct Difficulty {
    pub id: String,
    pub hp_mult: f64,
    pub dmg_mult: f64,
    pub def_mult: f64,
    pub res_bonus: ResistanceMap,
    /// Affix ids eligible for units spawned at this difficulty, in order.
    pub affix_pool: Vec<String>,
}

impl Difficulty {
    /// Neutral difficulty: all multipliers 1, no bonus, empty pool.
    pub fn neutral(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            hp_mult: 1.0,
            dmg_mult: 1.0,
            def_mult: 1.0,
            res_bonus: ResistanceMap::zero(),
            affix_pool: Vec::new(),
        }
    }

    /// Effective difficulty after a zone's overrides.
    ///
    /// Multipliers combine multiplicatively, resistance bonuses additively.
    #[must_use]
    pub fn with_overrides(&self, overrides: &DifficultyOverrides) -> Difficulty {
        Difficulty {
            id: self.id.clone(),
            hp_mult: self.hp_mult * overrides.hp_mult.unwrap_or(1.0),
            dmg_mult: self.dmg_mult * overrides.dmg_mult.unwrap_or(1.0),
            def_mult: self.def_mult * overrides.def_mult.unwrap_or(1.0),
            res_bonus: self.res_bonus.merged(&overrides.res_bonus),
            affix_pool: self.affix_pool.clone(),
        }
    }

    pub fn multipliers(&self) -> EffectiveMultipliers {
        EffectiveMultipliers {
            hp_mult: self.hp_mult,
            dmg_mult: self.dmg_mult,
            def_mult: self.def_mult,
        }
    }
}

/// Per-zone adjustments applied on top of the requested difficulty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DifficultyOverrides {
    pub hp_mult: Option<f64>,
    pub dmg_mult: Option<f64>,
    pub def_mult: Option<f64>,
    pub res_bonus: ResistanceMap,
}

impl DifficultyOverrides {
    /// True when applying these overrides changes nothing.
    pub fn is_empty(&self) -> bool {
        self.hp_mult.is_none()
            && self.dmg_mult.is_none()
            && self.def_mult.is_none()
            && self.res_bonus.is_zero()
    }
}

/// The three difficulty multipliers, as reported in spawn diagnostics.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EffectiveMultipliers {
    pub hp_mult: f64,
    pub dmg_mult: f64,
    pub def_mult: f64,
}
