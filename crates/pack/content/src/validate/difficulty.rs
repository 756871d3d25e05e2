use pack_core::{Difficulty, ResistanceMap};
use serde_json::Value;

use super::{Node, ValidationResult, table};
use crate::error::DocumentKind;

/// Validates the `difficulties` document.
pub fn difficulties(value: &Value) -> ValidationResult<Vec<Difficulty>> {
    table(DocumentKind::Difficulties, value, difficulty, |d| d.id.as_str())
}

fn difficulty(node: &Node<'_>) -> ValidationResult<Difficulty> {
    let id = node.field("id")?.id()?;
    let hp_mult = node.field("hp_mult")?.non_negative()?;
    let dmg_mult = node.field("dmg_mult")?.non_negative()?;
    let def_mult = node.field("def_mult")?.non_negative()?;
    let res_bonus = match node.optional("res_bonus")? {
        Some(bonus) => bonus.resistances(true)?,
        None => ResistanceMap::zero(),
    };
    let affix_pool = node
        .field("affix_pool")?
        .items()?
        .iter()
        .map(Node::id)
        .collect::<ValidationResult<_>>()?;

    Ok(Difficulty {
        id,
        hp_mult,
        dmg_mult,
        def_mult,
        res_bonus,
        affix_pool,
    })
}
