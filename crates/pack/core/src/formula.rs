//! Scaling formulas.
//!
//! Pure functions turning zone, difficulty, tier and monster records into
//! levels, stat blocks and resistances. Only [`roll_zone_level`] and
//! [`pick_tier_id`] draw from the RNG (one draw each).
//!
//! # Stat scaling
//!
//! ```text
//! level_diff = max(monster_level - zone_level, 0)
//! hp  = round (base.hp  × diff.hp_mult  × tier.hp_mult  × (1 + 0.10 × level_diff) × extra.hp_mult)
//! dps = round2(base.dps × diff.dmg_mult × tier.dps_mult × (1 + 0.08 × level_diff) × extra.dps_mult)
//! def = round (base.def × diff.def_mult × tier.def_mult × (1 + 0.06 × level_diff) × extra.def_mult)
//! ```

use crate::data::{
    BOSS_TIER, BaseStats, CHAMPION_TIER, Difficulty, IMMUNITY_THRESHOLD, Immunities, MinionSpec,
    Monster, NORMAL_TIER, RESIST_MAX, RESIST_MIN, ResistanceMap, StatMultipliers, Tier,
    TierWeight, UNIQUE_TIER, Zone,
};
use crate::error::{ErrorSeverity, PackError};
use crate::rng::PackRng;
use crate::unit::StatBlock;

/// Per-level growth of hp above the zone level.
pub const HP_PER_LEVEL: f64 = 0.10;
/// Per-level growth of dps above the zone level.
pub const DPS_PER_LEVEL: f64 = 0.08;
/// Per-level growth of defense above the zone level.
pub const DEF_PER_LEVEL: f64 = 0.06;

/// Tier odds used when a zone does not override them.
pub const DEFAULT_TIER_PROBS: [(&str, f64); 4] = [
    (NORMAL_TIER, 0.86),
    (CHAMPION_TIER, 0.10),
    (UNIQUE_TIER, 0.035),
    (BOSS_TIER, 0.005),
];

/// [`DEFAULT_TIER_PROBS`] as owned entries.
pub fn default_tier_probs() -> Vec<TierWeight> {
    DEFAULT_TIER_PROBS
        .iter()
        .map(|(id, weight)| TierWeight::new(*id, *weight))
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormulaError {
    #[error("zone '{zone}' has no level range for difficulty '{difficulty}'")]
    MissingLevelRange { zone: String, difficulty: String },

    #[error("tier probabilities have no positive weight")]
    NoPositiveTierWeight,
}

impl PackError for FormulaError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            FormulaError::MissingLevelRange { .. } => "FORMULA_MISSING_LEVEL_RANGE",
            FormulaError::NoPositiveTierWeight => "FORMULA_NO_POSITIVE_TIER_WEIGHT",
        }
    }
}

/// Level bonus and multipliers layered on top of the tier (minions use this).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExtraScaling {
    pub level_bonus: i32,
    pub multipliers: StatMultipliers,
}

impl From<&MinionSpec> for ExtraScaling {
    fn from(spec: &MinionSpec) -> Self {
        Self {
            level_bonus: spec.level_bonus,
            multipliers: spec.multipliers,
        }
    }
}

/// Draws the zone level uniformly from the inclusive range for `difficulty`.
pub fn roll_zone_level(
    zone: &Zone,
    difficulty: &str,
    rng: &mut PackRng,
) -> Result<i32, FormulaError> {
    let range =
        zone.level_range
            .get(difficulty)
            .ok_or_else(|| FormulaError::MissingLevelRange {
                zone: zone.id.clone(),
                difficulty: difficulty.to_owned(),
            })?;

    let level = rng.next_int(i64::from(range.min()), i64::from(range.max()) + 1);
    Ok(level as i32)
}

/// `zone_level + monster offset + tier bonus + extra bonus`.
pub fn compute_monster_level(
    zone_level: i32,
    monster: &Monster,
    tier: &Tier,
    extra: &ExtraScaling,
) -> i32 {
    zone_level + monster.base_level_offset + tier.level_bonus + extra.level_bonus
}

/// Inputs of [`scale_stats`].
#[derive(Clone, Copy, Debug)]
pub struct ScaleInput<'a> {
    pub base: BaseStats,
    pub zone_level: i32,
    pub monster_level: i32,
    pub difficulty: &'a Difficulty,
    pub tier: &'a Tier,
    pub extra: &'a ExtraScaling,
}

pub fn scale_stats(input: &ScaleInput<'_>) -> StatBlock {
    let level_diff = f64::from((input.monster_level - input.zone_level).max(0));
    let tier = &input.tier.multipliers;
    let extra = &input.extra.multipliers;
    let diff = input.difficulty;

    let hp = input.base.hp
        * diff.hp_mult
        * tier.hp_mult
        * (1.0 + HP_PER_LEVEL * level_diff)
        * extra.hp_mult;
    let dps = input.base.dps
        * diff.dmg_mult
        * tier.dps_mult
        * (1.0 + DPS_PER_LEVEL * level_diff)
        * extra.dps_mult;
    let def = input.base.def
        * diff.def_mult
        * tier.def_mult
        * (1.0 + DEF_PER_LEVEL * level_diff)
        * extra.def_mult;

    StatBlock {
        hp: hp.round() as i64,
        dps: round2(dps),
        def: def.round() as i64,
    }
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `base + difficulty bonus + affix bonus`, per damage type.
pub fn combine_resists(
    base: &ResistanceMap,
    difficulty_bonus: &ResistanceMap,
    affix_bonus: &ResistanceMap,
) -> ResistanceMap {
    base.merged(difficulty_bonus).merged(affix_bonus)
}

/// Resistances after clamping, plus the types that reached immunity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClampedResists {
    pub values: ResistanceMap,
    pub immune: Immunities,
}

/// Clamps every value into `[-100, 99]`; values at or above 100 before the
/// clamp are also recorded as immunities.
pub fn clamp_resists(map: &ResistanceMap) -> ClampedResists {
    let mut values = ResistanceMap::zero();
    let mut immune = Immunities::empty();
    for (kind, value) in map.iter() {
        if value >= IMMUNITY_THRESHOLD {
            immune.insert_type(kind);
        }
        values.set(kind, value.clamp(RESIST_MIN, RESIST_MAX));
    }
    ClampedResists { values, immune }
}

/// Picks a tier id from the zone override when it is non-empty, otherwise
/// from `defaults`.
///
/// Weights are normalized by the sum of positive weights and walked
/// cumulatively; the first tier whose cumulative share exceeds the draw wins.
/// Non-positive entries are skipped. Draws one float.
pub fn pick_tier_id<'a>(
    defaults: &'a [TierWeight],
    zone_override: &'a [TierWeight],
    rng: &mut PackRng,
) -> Result<&'a str, FormulaError> {
    let probs = if zone_override.is_empty() {
        defaults
    } else {
        zone_override
    };

    let is_positive = |entry: &&TierWeight| entry.weight.is_finite() && entry.weight > 0.0;
    let total: f64 = probs.iter().filter(is_positive).map(|e| e.weight).sum();
    let last_positive = probs
        .iter()
        .rfind(is_positive)
        .ok_or(FormulaError::NoPositiveTierWeight)?;

    let roll = rng.next_float();
    let mut cumulative = 0.0;
    for entry in probs.iter().filter(is_positive) {
        cumulative += entry.weight / total;
        if roll < cumulative {
            return Ok(&entry.tier_id);
        }
    }
    Ok(&last_positive.tier_id)
}
