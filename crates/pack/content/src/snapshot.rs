//! The immutable, cross-checked content snapshot.

use std::collections::BTreeMap;

use pack_core::{Affix, ContentOracle, Difficulty, LootTable, Monster, Tier, Zone};
use serde_json::Value;
use strum::IntoEnumIterator;

use crate::error::{DocumentKind, FieldPath, ValidationError, ValidationErrorKind};
use crate::table::Table;
use crate::validate::check_references;

/// The six tables before cross-document checks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentTables {
    pub difficulties: Vec<Difficulty>,
    pub zones: Vec<Zone>,
    pub monsters: Vec<Monster>,
    pub tiers: Vec<Tier>,
    pub affixes: Vec<Affix>,
    pub loot_tables: Vec<LootTable>,
}

impl ContentTables {
    /// Places a validated document in its slot, replacing what was there.
    pub fn insert(&mut self, table: Table) {
        match table {
            Table::Difficulties(records) => self.difficulties = records,
            Table::Zones(records) => self.zones = records,
            Table::Monsters(records) => self.monsters = records,
            Table::Tiers(records) => self.tiers = records,
            Table::Affixes(records) => self.affixes = records,
            Table::LootTables(records) => self.loot_tables = records,
        }
    }
}

impl FromIterator<Table> for ContentTables {
    fn from_iter<I: IntoIterator<Item = Table>>(iter: I) -> Self {
        let mut tables = Self::default();
        for table in iter {
            tables.insert(table);
        }
        tables
    }
}

/// Validated game data.
///
/// Built once from six documents and only ever read afterwards. Lookups by
/// id are linear scans; absence is `None`, not an error.
#[derive(Clone, Debug, PartialEq)]
pub struct GameData {
    tables: ContentTables,
}

impl GameData {
    /// Runs the cross-document checks and freezes the tables.
    ///
    /// # Errors
    ///
    /// A spawn-table monster, zone tier override or affix pool entry that
    /// names a record which does not exist.
    pub fn new(tables: ContentTables) -> Result<Self, ValidationError> {
        check_references(&tables)?;
        Ok(Self { tables })
    }

    /// Validates raw documents and assembles them.
    ///
    /// # Errors
    ///
    /// A missing document, or the first validation failure in document order.
    pub fn from_documents(documents: &BTreeMap<DocumentKind, Value>) -> Result<Self, ValidationError> {
        let tables = DocumentKind::iter()
            .map(|kind| {
                let value = documents.get(&kind).ok_or(ValidationError {
                    document: kind,
                    index: None,
                    field: FieldPath::root(),
                    kind: ValidationErrorKind::MissingField,
                    got: None,
                })?;
                Table::validate(kind, value)
            })
            .collect::<Result<ContentTables, _>>()?;
        Self::new(tables)
    }

    pub fn difficulty(&self, id: &str) -> Option<&Difficulty> {
        self.tables.difficulties.iter().find(|d| d.id == id)
    }

    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.tables.zones.iter().find(|z| z.id == id)
    }

    pub fn monster(&self, id: &str) -> Option<&Monster> {
        self.tables.monsters.iter().find(|m| m.id == id)
    }

    pub fn tier(&self, id: &str) -> Option<&Tier> {
        self.tables.tiers.iter().find(|t| t.id == id)
    }

    pub fn affix(&self, id: &str) -> Option<&Affix> {
        self.tables.affixes.iter().find(|a| a.id == id)
    }

    pub fn loot_table(&self, id: &str) -> Option<&LootTable> {
        self.tables.loot_tables.iter().find(|t| t.id == id)
    }

    pub fn difficulties(&self) -> &[Difficulty] {
        &self.tables.difficulties
    }

    pub fn zones(&self) -> &[Zone] {
        &self.tables.zones
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.tables.monsters
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tables.tiers
    }

    pub fn affixes(&self) -> &[Affix] {
        &self.tables.affixes
    }

    pub fn loot_tables(&self) -> &[LootTable] {
        &self.tables.loot_tables
    }

    /// Number of records in a document.
    pub fn count(&self, kind: DocumentKind) -> usize {
        match kind {
            DocumentKind::Difficulties => self.tables.difficulties.len(),
            DocumentKind::Zones => self.tables.zones.len(),
            DocumentKind::Monsters => self.tables.monsters.len(),
            DocumentKind::Tiers => self.tables.tiers.len(),
            DocumentKind::Affixes => self.tables.affixes.len(),
            DocumentKind::LootTables => self.tables.loot_tables.len(),
        }
    }
}

impl ContentOracle for GameData {
    fn difficulty(&self, id: &str) -> Option<&Difficulty> {
        GameData::difficulty(self, id)
    }

    fn zone(&self, id: &str) -> Option<&Zone> {
        GameData::zone(self, id)
    }

    fn monster(&self, id: &str) -> Option<&Monster> {
        GameData::monster(self, id)
    }

    fn tier(&self, id: &str) -> Option<&Tier> {
        GameData::tier(self, id)
    }

    fn affix(&self, id: &str) -> Option<&Affix> {
        GameData::affix(self, id)
    }
}
