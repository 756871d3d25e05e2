use pack_core::{LootEntry, LootTable};
use serde_json::Value;

use super::{Node, ValidationResult, table};
use crate::error::DocumentKind;

/// Validates the `lootTables` document. Tables are checked for shape only.
pub fn loot_tables(value: &Value) -> ValidationResult<Vec<LootTable>> {
    table(DocumentKind::LootTables, value, loot_table, |t| t.id.as_str())
}

fn loot_table(node: &Node<'_>) -> ValidationResult<LootTable> {
    let id = node.field("id")?.id()?;
    let rolls = node.field("rolls")?.u32()?;
    let entries = node
        .field("entries")?
        .items()?
        .iter()
        .map(|entry| -> ValidationResult<LootEntry> {
            entry.object()?;
            Ok(LootEntry {
                group: entry.field("group")?.id()?,
                weight: entry.field("weight")?.non_negative()?,
            })
        })
        .collect::<ValidationResult<_>>()?;
    Ok(LootTable { id, rolls, entries })
}
