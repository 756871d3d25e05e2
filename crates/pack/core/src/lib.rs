//! Deterministic monster pack generation.
//!
//! `pack-core` defines the configuration records, the seeded RNG, the scaling
//! formulas and the pack assembly pipeline. It performs no I/O: configuration
//! is read through [`ContentOracle`], and advisory output goes to an injected
//! [`DiagnosticSink`]. Loading and validating documents lives in
//! `pack-content`; fetching, caching and the async entry point live in
//! `runtime`.
pub mod data;
pub mod error;
pub mod formula;
pub mod oracle;
pub mod rng;
pub mod spawn;
pub mod unit;

pub use data::{
    Affix, BaseStats, CountRange, DamageType, Difficulty, DifficultyOverrides,
    EffectiveMultipliers, Immunities, LevelRange, LevelRanges, LootEntry, LootTable, MinionSpec,
    Monster, ResistanceMap, SpawnEntry, StatMultipliers, Tier, TierWeight, Zone,
};
pub use error::{ErrorSeverity, PackError};
pub use formula::{
    ClampedResists, ExtraScaling, FormulaError, ScaleInput, clamp_resists, combine_resists,
    compute_monster_level, default_tier_probs, pick_tier_id, roll_zone_level, scale_stats,
};
pub use oracle::ContentOracle;
pub use rng::{PackRng, RngError, Seed, Weighted};
pub use spawn::{
    CollectingSink, Diagnostic, DiagnosticSink, NoopSink, Pack, SpawnDiagnostic, SpawnError,
    SpawnRequest, generate_pack,
};
pub use unit::{AffixInstance, StatBlock, UnitInstance};
