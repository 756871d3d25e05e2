//! Typed configuration records.
//!
//! These are the trusted shapes produced by the content loader. Once loaded
//! they are only ever read.
pub mod affix;
pub mod damage;
pub mod difficulty;
pub mod loot;
pub mod monster;
pub mod tier;
pub mod zone;

pub use affix::Affix;
pub use damage::{
    DamageType, IMMUNITY_THRESHOLD, Immunities, RESIST_MAX, RESIST_MIN, ResistanceMap,
};
pub use difficulty::{Difficulty, DifficultyOverrides, EffectiveMultipliers};
pub use loot::{COMMON_LOOT_TABLE, ELITE_LOOT_TABLE, LootEntry, LootTable};
pub use monster::{BaseStats, Monster};
pub use tier::{
    BOSS_TIER, CHAMPION_TIER, CountRange, MinionSpec, NORMAL_TIER, StatMultipliers, Tier,
    UNIQUE_TIER,
};
pub use zone::{LevelRange, LevelRanges, SpawnEntry, TierWeight, Zone};
