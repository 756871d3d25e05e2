//! Pack assembly.
//!
//! [`generate_pack`] runs the whole spawn sequence against one RNG stream
//! seeded from the request:
//!
//! ```text
//! resolve zone → roll zone level → pick monster → pick tier
//!   → resolve difficulty (+ zone overrides) → eligible affix pool
//!   → build leader → [unique with minions] draw count, build minions
//! ```
//!
//! The order of draws is fixed, so a `(zone, difficulty, seed)` triple always
//! yields the same pack. A call either returns a complete pack or fails.

mod build;
mod diagnostics;
mod error;

pub use build::{UnitBlueprint, build_unit_instance};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, NoopSink, SpawnDiagnostic};
pub use error::SpawnError;

use crate::data::{Affix, NORMAL_TIER, UNIQUE_TIER};
use crate::formula::{ExtraScaling, default_tier_probs, pick_tier_id, roll_zone_level};
use crate::oracle::ContentOracle;
use crate::rng::{PackRng, Seed};
use crate::unit::UnitInstance;

/// Parameters of one spawn call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnRequest {
    pub zone_id: String,
    pub difficulty: String,
    pub seed: Seed,
    #[cfg_attr(feature = "serde", serde(default))]
    pub debug: bool,
}

impl SpawnRequest {
    pub fn new(
        zone_id: impl Into<String>,
        difficulty: impl Into<String>,
        seed: impl Into<Seed>,
    ) -> Self {
        Self {
            zone_id: zone_id.into(),
            difficulty: difficulty.into(),
            seed: seed.into(),
            debug: false,
        }
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Units produced by one spawn call: the leader first, then minions in
/// generation order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Pack {
    units: Vec<UnitInstance>,
}

impl Pack {
    pub fn leader(&self) -> &UnitInstance {
        // A pack is only ever constructed with its leader.
        &self.units[0]
    }

    pub fn minions(&self) -> &[UnitInstance] {
        &self.units[1..]
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UnitInstance> {
        self.units.iter()
    }
}

impl<'a> IntoIterator for &'a Pack {
    type Item = &'a UnitInstance;
    type IntoIter = std::slice::Iter<'a, UnitInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

impl IntoIterator for Pack {
    type Item = UnitInstance;
    type IntoIter = std::vec::IntoIter<UnitInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.into_iter()
    }
}

/// Generates a complete pack for `request`.
///
/// # Errors
///
/// Unknown zone, difficulty or tier; an empty spawn table; a spawn entry that
/// names an unknown monster; a zone without a level range for the requested
/// difficulty; spawn weights or tier odds without a positive weight.
pub fn generate_pack<O>(
    oracle: &O,
    request: &SpawnRequest,
    sink: &dyn DiagnosticSink,
) -> Result<Pack, SpawnError>
where
    O: ContentOracle + ?Sized,
{
    let mut rng = PackRng::new(request.seed.clone());

    let zone = oracle
        .zone(&request.zone_id)
        .ok_or_else(|| SpawnError::UnknownZone(request.zone_id.clone()))?;
    if zone.spawn_table.is_empty() {
        return Err(SpawnError::EmptySpawnTable(zone.id.clone()));
    }

    let zone_level = roll_zone_level(zone, &request.difficulty, &mut rng)?;

    let entry = rng.pick_weighted(&zone.spawn_table)?;
    let monster = oracle
        .monster(&entry.monster_id)
        .ok_or_else(|| SpawnError::UnknownMonster {
            zone: zone.id.clone(),
            monster: entry.monster_id.clone(),
        })?;

    let defaults = default_tier_probs();
    let tier_id = pick_tier_id(&defaults, &zone.tier_probs, &mut rng)?.to_owned();

    let base_difficulty = oracle
        .difficulty(&request.difficulty)
        .ok_or_else(|| SpawnError::UnknownDifficulty(request.difficulty.clone()))?;
    let difficulty = match &zone.difficulty_multipliers {
        Some(overrides) => base_difficulty.with_overrides(overrides),
        None => base_difficulty.clone(),
    };

    // Pool ids without an affix record are dropped.
    let affix_pool: Vec<&Affix> = difficulty
        .affix_pool
        .iter()
        .filter_map(|id| oracle.affix(id))
        .collect();

    let leader = build_unit_instance(
        oracle,
        &UnitBlueprint {
            monster,
            tier_id: &tier_id,
            zone_level,
            difficulty: &difficulty,
            affix_pool: &affix_pool,
            affix_count: None,
            extra: ExtraScaling::default(),
        },
        &mut rng,
        sink,
    )?;
    let mut units = vec![leader];

    let minions = if tier_id == UNIQUE_TIER {
        oracle.tier(&tier_id).and_then(|tier| tier.minions.as_ref())
    } else {
        None
    };
    if let Some(spec) = minions {
        let count = rng.next_int(
            i64::from(spec.count_range.min()),
            i64::from(spec.count_range.max()) + 1,
        );
        let blueprint = UnitBlueprint {
            monster,
            tier_id: NORMAL_TIER,
            zone_level,
            difficulty: &difficulty,
            affix_pool: &[],
            affix_count: Some(0),
            extra: ExtraScaling::from(spec),
        };
        for _ in 0..count {
            units.push(build_unit_instance(oracle, &blueprint, &mut rng, sink)?);
        }
    }

    if request.debug {
        sink.record(Diagnostic::Spawn(SpawnDiagnostic {
            zone_id: zone.id.clone(),
            monster_id: monster.id.clone(),
            tier_id: tier_id.clone(),
            zone_level,
            multipliers: difficulty.multipliers(),
            overrides_applied: zone.has_overrides(),
            pack_size: units.len(),
        }));
    }

    Ok(Pack { units })
}
