//! Assembly of a single unit instance.

use crate::data::{
    Affix, COMMON_LOOT_TABLE, Difficulty, ELITE_LOOT_TABLE, Monster, ResistanceMap, Tier,
};
use crate::formula::{
    ExtraScaling, ScaleInput, clamp_resists, combine_resists, compute_monster_level, scale_stats,
};
use crate::oracle::ContentOracle;
use crate::rng::PackRng;
use crate::unit::{AffixInstance, UNIT_ID_SPACE, UnitInstance, base36_token};

use super::diagnostics::{Diagnostic, DiagnosticSink};
use super::error::SpawnError;

/// Everything needed to build one unit besides the RNG and the oracle.
#[derive(Clone, Debug)]
pub struct UnitBlueprint<'a> {
    pub monster: &'a Monster,
    pub tier_id: &'a str,
    pub zone_level: i32,
    /// Effective difficulty (zone overrides already merged).
    pub difficulty: &'a Difficulty,
    /// Affixes eligible for this unit.
    pub affix_pool: &'a [&'a Affix],
    /// Fixed affix count; `None` draws from the tier's `affix_count` range.
    pub affix_count: Option<u32>,
    pub extra: ExtraScaling,
}

/// Builds one unit, drawing from `rng` in this order: affix count (unless
/// fixed), one draw per affix picked, then the unit id.
pub fn build_unit_instance<O>(
    oracle: &O,
    blueprint: &UnitBlueprint<'_>,
    rng: &mut PackRng,
    sink: &dyn DiagnosticSink,
) -> Result<UnitInstance, SpawnError>
where
    O: ContentOracle + ?Sized,
{
    let tier = oracle
        .tier(blueprint.tier_id)
        .ok_or_else(|| SpawnError::UnknownTier(blueprint.tier_id.to_owned()))?;
    let monster = blueprint.monster;

    let requested = match blueprint.affix_count {
        Some(count) => count,
        None => rng.next_int(
            i64::from(tier.affix_count.min()),
            i64::from(tier.affix_count.max()) + 1,
        ) as u32,
    };

    let available = blueprint.affix_pool.len();
    if requested as usize > available {
        sink.record(Diagnostic::AffixCountClamped {
            monster_id: monster.id.clone(),
            tier_id: tier.id.clone(),
            requested,
            available,
        });
    }
    let affixes = roll_affixes(blueprint.affix_pool, requested as usize, rng);

    let level = compute_monster_level(blueprint.zone_level, monster, tier, &blueprint.extra);
    let stats = scale_stats(&ScaleInput {
        base: monster.base_stats,
        zone_level: blueprint.zone_level,
        monster_level: level,
        difficulty: blueprint.difficulty,
        tier,
        extra: &blueprint.extra,
    });

    let affix_resists = affixes
        .iter()
        .fold(ResistanceMap::zero(), |acc, affix| {
            acc.merged(&affix.resist_contribution())
        });
    let clamped = clamp_resists(&combine_resists(
        &monster.resists,
        &blueprint.difficulty.res_bonus,
        &affix_resists,
    ));

    let token = rng.next_int(0, UNIT_ID_SPACE) as u64;

    Ok(UnitInstance {
        id: base36_token(token),
        monster_id: monster.id.clone(),
        name: format!("{} {}", monster.display_name(), tier.id),
        tier: tier.id.clone(),
        level,
        stats,
        resists: clamped.values,
        immune: clamped.immune,
        affixes: affixes.into_iter().map(AffixInstance::from).collect(),
        role: monster.role.clone(),
        ai: monster.ai.clone(),
        loot_table: loot_table_for(tier).to_owned(),
    })
}

/// Picks up to `count` distinct affixes from `pool`, without replacement.
///
/// The count is clamped to the pool size; one draw per affix picked.
fn roll_affixes<'a>(pool: &[&'a Affix], count: usize, rng: &mut PackRng) -> Vec<&'a Affix> {
    let mut remaining: Vec<&Affix> = pool.to_vec();
    let count = count.min(remaining.len());
    let mut picked = Vec::with_capacity(count);
    for _ in 0..count {
        let index = rng.next_int(0, remaining.len() as i64) as usize;
        picked.push(remaining.remove(index));
    }
    picked
}

fn loot_table_for(tier: &Tier) -> &'static str {
    if Tier::is_elite(&tier.id) {
        ELITE_LOOT_TABLE
    } else {
        COMMON_LOOT_TABLE
    }
}
