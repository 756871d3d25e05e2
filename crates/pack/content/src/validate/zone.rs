use pack_core::{DifficultyOverrides, LevelRanges, ResistanceMap, SpawnEntry, TierWeight, Zone};
use serde_json::Value;

use super::{Node, ValidationResult, table};
use crate::error::{DocumentKind, ValidationErrorKind};

/// Validates the `zones` document.
pub fn zones(value: &Value) -> ValidationResult<Vec<Zone>> {
    table(DocumentKind::Zones, value, zone, |z| z.id.as_str())
}

fn zone(node: &Node<'_>) -> ValidationResult<Zone> {
    let id = node.field("id")?.id()?;
    let name = node.field("name")?.string()?;
    let level_range = level_ranges(&node.field("level_range")?)?;

    let spawn_node = node.field("spawn_table")?;
    let spawn_table = spawn_node
        .items()?
        .iter()
        .map(spawn_entry)
        .collect::<ValidationResult<Vec<_>>>()?;
    if spawn_table.is_empty() {
        return Err(spawn_node.fail(ValidationErrorKind::EmptySpawnTable));
    }

    let tier_probs = match node.optional("tier_probs")? {
        Some(probs) => probs
            .entries()?
            .into_iter()
            .map(|(tier, weight)| -> ValidationResult<TierWeight> {
                Ok(TierWeight::new(tier, weight.non_negative()?))
            })
            .collect::<ValidationResult<_>>()?,
        None => Vec::new(),
    };

    let difficulty_multipliers = node
        .optional("difficulty_multipliers")?
        .map(|overrides| difficulty_overrides(&overrides))
        .transpose()?;

    Ok(Zone {
        id,
        name,
        level_range,
        spawn_table,
        tier_probs,
        difficulty_multipliers,
    })
}

/// Exactly one `[min, max]` pair per difficulty key.
fn level_ranges(node: &Node<'_>) -> ValidationResult<LevelRanges> {
    for (key, extra) in node.entries()? {
        if !LevelRanges::KEYS.iter().any(|known| *known == key) {
            return Err(extra.fail(ValidationErrorKind::UnexpectedKey(key.to_owned())));
        }
    }
    Ok(LevelRanges {
        normal: node.field("normal")?.level_range()?,
        nightmare: node.field("nightmare")?.level_range()?,
        hell: node.field("hell")?.level_range()?,
    })
}

fn spawn_entry(node: &Node<'_>) -> ValidationResult<SpawnEntry> {
    node.object()?;
    Ok(SpawnEntry {
        monster_id: node.field("monster_id")?.id()?,
        weight: node.field("weight")?.non_negative()?,
    })
}

fn difficulty_overrides(node: &Node<'_>) -> ValidationResult<DifficultyOverrides> {
    let multiplier = |key: &str| -> ValidationResult<Option<f64>> {
        node.optional(key)?
            .map(|value| value.non_negative())
            .transpose()
    };
    Ok(DifficultyOverrides {
        hp_mult: multiplier("hp_mult")?,
        dmg_mult: multiplier("dmg_mult")?,
        def_mult: multiplier("def_mult")?,
        res_bonus: match node.optional("res_bonus")? {
            Some(bonus) => bonus.resistances(true)?,
            None => ResistanceMap::zero(),
        },
    })
}
