use std::collections::BTreeMap;

use pack_core::Affix;
use serde_json::Value;

use super::{Node, ValidationResult, table};
use crate::error::DocumentKind;

/// Validates the `affixes` document.
pub fn affixes(value: &Value) -> ValidationResult<Vec<Affix>> {
    table(DocumentKind::Affixes, value, affix, |a| a.id.as_str())
}

fn affix(node: &Node<'_>) -> ValidationResult<Affix> {
    let id = node.field("id")?.id()?;
    let mods = node
        .field("mods")?
        .entries()?
        .into_iter()
        .map(|(key, value)| -> ValidationResult<(String, f64)> {
            Ok((key.to_owned(), value.number()?))
        })
        .collect::<ValidationResult<BTreeMap<_, _>>>()?;
    Ok(Affix { id, mods })
}
