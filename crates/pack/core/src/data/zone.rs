//! Zones: level ranges, spawn tables and optional overrides.

use crate::rng::Weighted;

use super::difficulty::DifficultyOverrides;

/// Inclusive `[min, max]` integer pair with `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LevelRange {
    min: i32,
    max: i32,
}

impl LevelRange {
    /// Returns `None` when `min > max`.
    pub const fn new(min: i32, max: i32) -> Option<Self> {
        if min > max {
            None
        } else {
            Some(Self { min, max })
        }
    }

    pub const fn min(&self) -> i32 {
        self.min
    }

    pub const fn max(&self) -> i32 {
        self.max
    }

    pub const fn contains(&self, level: i32) -> bool {
        self.min <= level && level <= self.max
    }
}

/// Level ranges keyed by difficulty. Zones must define all three keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelRanges {
    pub normal: LevelRange,
    pub nightmare: LevelRange,
    pub hell: LevelRange,
}

impl LevelRanges {
    /// Difficulty keys a zone's `level_range` must carry, in document order.
    pub const KEYS: [&'static str; 3] = ["normal", "nightmare", "hell"];

    /// Same range for every difficulty.
    pub const fn flat(range: LevelRange) -> Self {
        Self {
            normal: range,
            nightmare: range,
            hell: range,
        }
    }

    /// Range for a difficulty key, or `None` for keys outside [`Self::KEYS`].
    pub fn get(&self, difficulty: &str) -> Option<LevelRange> {
        match difficulty {
            "normal" => Some(self.normal),
            "nightmare" => Some(self.nightmare),
            "hell" => Some(self.hell),
            _ => None,
        }
    }
}

/// One row of a zone's spawn table.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnEntry {
    pub monster_id: String,
    pub weight: f64,
}

impl Weighted for SpawnEntry {
    fn weight(&self) -> f64 {
        self.weight
    }
}

/// One entry of a tier probability map; order is significant.
#[derive(Clone, Debug, PartialEq)]
pub struct TierWeight {
    pub tier_id: String,
    pub weight: f64,
}

impl TierWeight {
    pub fn new(tier_id: impl Into<String>, weight: f64) -> Self {
        Self {
            tier_id: tier_id.into(),
            weight,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub level_range: LevelRanges,
    /// Never empty for loaded zones.
    pub spawn_table: Vec<SpawnEntry>,
    /// Zone override of the default tier odds. Empty means no override.
    pub tier_probs: Vec<TierWeight>,
    pub difficulty_multipliers: Option<DifficultyOverrides>,
}

impl Zone {
    /// True when the zone changes tier odds or difficulty multipliers.
    pub fn has_overrides(&self) -> bool {
        !self.tier_probs.is_empty()
            || self
                .difficulty_multipliers
                .as_ref()
                .is_some_and(|overrides| !overrides.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_zone() -> Zone {
        Zone {
            id: "den".into(),
            name: "Den".into(),
            level_range: LevelRanges::flat(LevelRange::new(1, 3).unwrap()),
            spawn_table: vec![SpawnEntry {
                monster_id: "fallen".into(),
                weight: 1.0,
            }],
            tier_probs: Vec::new(),
            difficulty_multipliers: None,
        }
    }

    #[test]
    fn empty_multiplier_block_is_not_an_override() {
        let mut zone = plain_zone();
        assert!(!zone.has_overrides());

        zone.difficulty_multipliers = Some(DifficultyOverrides::default());
        assert!(!zone.has_overrides());

        zone.difficulty_multipliers = Some(DifficultyOverrides {
            def_mult: Some(1.0),
            ..DifficultyOverrides::default()
        });
        assert!(zone.has_overrides());
    }

    #[test]
    fn tier_odds_count_as_override() {
        let mut zone = plain_zone();
        zone.tier_probs.push(TierWeight::new("boss", 1.0));
        assert!(zone.has_overrides());
        assert!(zone.level_range.normal.contains(3));
        assert!(!zone.level_range.hell.contains(4));
    }
}
