//! Affix definitions.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use super::damage::{DamageType, ResistanceMap};

/// Named modifier bundle.
///
/// Keys of the form `<damage_type>_res` grant resistance; other keys are
/// carried on the attached instance without interpretation.
#[derive(Clone, Debug, PartialEq)]
pub struct Affix {
    pub id: String,
    pub mods: BTreeMap<String, f64>,
}

impl Affix {
    /// Resistance granted by this affix's `*_res` mods.
    pub fn resist_contribution(&self) -> ResistanceMap {
        DamageType::iter()
            .filter_map(|kind| {
                self.mods
                    .get(kind.resist_mod_key())
                    .map(|value| (kind, *value))
            })
            .collect()
    }
}
