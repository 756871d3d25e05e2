use pack_core::{BaseStats, Monster, ResistanceMap};
use serde_json::Value;

use super::{Node, ValidationResult, table};
use crate::error::DocumentKind;

/// Validates the `monsters` document.
pub fn monsters(value: &Value) -> ValidationResult<Vec<Monster>> {
    table(DocumentKind::Monsters, value, monster, |m| m.id.as_str())
}

fn monster(node: &Node<'_>) -> ValidationResult<Monster> {
    let id = node.field("id")?.id()?;
    let role = node.field("role")?.string()?;
    let base_level_offset = match node.optional("base_level_offset")? {
        Some(offset) => offset.i32()?,
        None => 0,
    };

    let base_stats = base_stats(node)?;

    let resists = match node.optional("resists")? {
        Some(resists) => resists.resistances(false)?,
        None => ResistanceMap::zero(),
    };

    Ok(Monster {
        id,
        role,
        base_level_offset,
        base_stats,
        resists,
        ai: node.field("ai")?.string()?,
    })
}

/// Nested `base_stats: {hp, dps, def}`, or flat `base_hp`/`base_dps`/`base_def`
/// when `base_stats` is absent.
fn base_stats(node: &Node<'_>) -> ValidationResult<BaseStats> {
    match node.optional("base_stats")? {
        Some(stats) => {
            stats.object()?;
            Ok(BaseStats::new(
                stats.field("hp")?.non_negative()?,
                stats.field("dps")?.non_negative()?,
                stats.field("def")?.non_negative()?,
            ))
        }
        None => Ok(BaseStats::new(
            node.field("base_hp")?.non_negative()?,
            node.field("base_dps")?.non_negative()?,
            node.field("base_def")?.non_negative()?,
        )),
    }
}
