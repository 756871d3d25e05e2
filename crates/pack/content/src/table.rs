//! A single validated document.

use pack_core::{Affix, Difficulty, LootTable, Monster, Tier, Zone};
use serde_json::Value;

use crate::error::{DocumentKind, ValidationError};
use crate::validate;

/// Records of one document after validation.
#[derive(Clone, Debug, PartialEq)]
pub enum Table {
    Difficulties(Vec<Difficulty>),
    Zones(Vec<Zone>),
    Monsters(Vec<Monster>),
    Tiers(Vec<Tier>),
    Affixes(Vec<Affix>),
    LootTables(Vec<LootTable>),
}

impl Table {
    /// Validates `value` as the document `kind`.
    ///
    /// # Errors
    ///
    /// The first rule violation, with its path inside the document.
    pub fn validate(kind: DocumentKind, value: &Value) -> Result<Self, ValidationError> {
        Ok(match kind {
            DocumentKind::Difficulties => Self::Difficulties(validate::difficulties(value)?),
            DocumentKind::Zones => Self::Zones(validate::zones(value)?),
            DocumentKind::Monsters => Self::Monsters(validate::monsters(value)?),
            DocumentKind::Tiers => Self::Tiers(validate::tiers(value)?),
            DocumentKind::Affixes => Self::Affixes(validate::affixes(value)?),
            DocumentKind::LootTables => Self::LootTables(validate::loot_tables(value)?),
        })
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Difficulties(_) => DocumentKind::Difficulties,
            Self::Zones(_) => DocumentKind::Zones,
            Self::Monsters(_) => DocumentKind::Monsters,
            Self::Tiers(_) => DocumentKind::Tiers,
            Self::Affixes(_) => DocumentKind::Affixes,
            Self::LootTables(_) => DocumentKind::LootTables,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Difficulties(records) => records.len(),
            Self::Zones(records) => records.len(),
            Self::Monsters(records) => records.len(),
            Self::Tiers(records) => records.len(),
            Self::Affixes(records) => records.len(),
            Self::LootTables(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
