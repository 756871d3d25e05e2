//! Rarity tiers and their minion escorts.

pub const NORMAL_TIER: &str = "normal";
pub const CHAMPION_TIER: &str = "champion";
pub const UNIQUE_TIER: &str = "unique";
pub const BOSS_TIER: &str = "boss";

/// Inclusive `[min, max]` count pair with `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CountRange {
    min: u32,
    max: u32,
}

impl CountRange {
    /// Returns `None` when `min > max`.
    pub const fn new(min: u32, max: u32) -> Option<Self> {
        if min > max {
            None
        } else {
            Some(Self { min, max })
        }
    }

    pub const fn exactly(count: u32) -> Self {
        Self {
            min: count,
            max: count,
        }
    }

    pub const fn min(&self) -> u32 {
        self.min
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    pub const fn contains(&self, count: u32) -> bool {
        self.min <= count && count <= self.max
    }
}

/// Stat multipliers applied by a tier, a minion spec, or neither.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatMultipliers {
    pub hp_mult: f64,
    pub dps_mult: f64,
    pub def_mult: f64,
}

impl StatMultipliers {
    pub const IDENTITY: Self = Self {
        hp_mult: 1.0,
        dps_mult: 1.0,
        def_mult: 1.0,
    };
}

impl Default for StatMultipliers {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Escort spawned alongside a `unique` leader.
#[derive(Clone, Debug, PartialEq)]
pub struct MinionSpec {
    pub count_range: CountRange,
    pub level_bonus: i32,
    pub multipliers: StatMultipliers,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tier {
    pub id: String,
    pub level_bonus: i32,
    pub multipliers: StatMultipliers,
    pub affix_count: CountRange,
    pub minions: Option<MinionSpec>,
}

impl Tier {
    /// Tier with no bonus, identity multipliers and no affixes.
    pub fn plain(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            level_bonus: 0,
            multipliers: StatMultipliers::IDENTITY,
            affix_count: CountRange::exactly(0),
            minions: None,
        }
    }

    /// Elite tiers receive the elite loot table.
    pub fn is_elite(id: &str) -> bool {
        id == UNIQUE_TIER || id == BOSS_TIER
    }
}
