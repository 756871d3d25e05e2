use pack_core::{MinionSpec, StatMultipliers, Tier};
use serde_json::Value;

use super::{Node, ValidationResult, table};
use crate::error::DocumentKind;

/// Validates the `tiers` document.
pub fn tiers(value: &Value) -> ValidationResult<Vec<Tier>> {
    table(DocumentKind::Tiers, value, tier, |t| t.id.as_str())
}

fn tier(node: &Node<'_>) -> ValidationResult<Tier> {
    let id = node.field("id")?.id()?;
    let level_bonus = level_bonus(node)?;
    let multipliers = StatMultipliers {
        hp_mult: node.field("hp_mult")?.non_negative()?,
        dps_mult: node.field("dps_mult")?.non_negative()?,
        def_mult: node.field("def_mult")?.non_negative()?,
    };
    let affix_count = node.field("affix_count")?.count_range()?;
    let minions = node
        .optional("minions")?
        .map(|spec| minion_spec(&spec))
        .transpose()?;

    Ok(Tier {
        id,
        level_bonus,
        multipliers,
        affix_count,
        minions,
    })
}

fn minion_spec(node: &Node<'_>) -> ValidationResult<MinionSpec> {
    node.object()?;
    // Minion multipliers not given leave the stat unchanged.
    let multiplier = |key: &str| -> ValidationResult<f64> {
        match node.optional(key)? {
            Some(value) => value.non_negative(),
            None => Ok(1.0),
        }
    };
    Ok(MinionSpec {
        count_range: node.field("count_range")?.count_range()?,
        level_bonus: level_bonus(node)?,
        multipliers: StatMultipliers {
            hp_mult: multiplier("hp_mult")?,
            dps_mult: multiplier("dps_mult")?,
            def_mult: multiplier("def_mult")?,
        },
    })
}

fn level_bonus(node: &Node<'_>) -> ValidationResult<i32> {
    match node.optional("level_bonus")? {
        Some(bonus) => bonus.i32(),
        None => Ok(0),
    }
}
