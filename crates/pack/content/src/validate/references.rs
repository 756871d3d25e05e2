//! Cross-document checks, run once all six documents are valid on their own.

use std::collections::HashSet;

use serde_json::Value;

use super::ValidationResult;
use crate::error::{DocumentKind, FieldPath, ValidationError, ValidationErrorKind};
use crate::snapshot::ContentTables;

/// Every spawn-table monster, zone tier override and difficulty affix pool
/// entry must name an existing record.
pub(crate) fn check_references(tables: &ContentTables) -> ValidationResult<()> {
    let monsters: HashSet<&str> = tables.monsters.iter().map(|m| m.id.as_str()).collect();
    let tiers: HashSet<&str> = tables.tiers.iter().map(|t| t.id.as_str()).collect();
    let affixes: HashSet<&str> = tables.affixes.iter().map(|a| a.id.as_str()).collect();

    for (index, zone) in tables.zones.iter().enumerate() {
        for (row, entry) in zone.spawn_table.iter().enumerate() {
            if !monsters.contains(entry.monster_id.as_str()) {
                return Err(unknown(
                    DocumentKind::Zones,
                    index,
                    FieldPath::root()
                        .key("spawn_table")
                        .index(row)
                        .key("monster_id"),
                    DocumentKind::Monsters,
                    &entry.monster_id,
                ));
            }
        }
        for weight in &zone.tier_probs {
            if !tiers.contains(weight.tier_id.as_str()) {
                return Err(unknown(
                    DocumentKind::Zones,
                    index,
                    FieldPath::root().key("tier_probs").key(&weight.tier_id),
                    DocumentKind::Tiers,
                    &weight.tier_id,
                ));
            }
        }
    }

    for (index, difficulty) in tables.difficulties.iter().enumerate() {
        for (slot, affix_id) in difficulty.affix_pool.iter().enumerate() {
            if !affixes.contains(affix_id.as_str()) {
                return Err(unknown(
                    DocumentKind::Difficulties,
                    index,
                    FieldPath::root().key("affix_pool").index(slot),
                    DocumentKind::Affixes,
                    affix_id,
                ));
            }
        }
    }

    Ok(())
}

fn unknown(
    document: DocumentKind,
    index: usize,
    field: FieldPath,
    target: DocumentKind,
    id: &str,
) -> ValidationError {
    ValidationError {
        document,
        index: Some(index),
        field,
        kind: ValidationErrorKind::UnknownReference(target.record_kind()),
        got: Some(Value::String(id.to_owned())),
    }
}
