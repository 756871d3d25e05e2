//! Runtime configuration and document locations.
use std::env;
use std::path::PathBuf;

use pack_content::DocumentKind;

/// Where each of the six documents lives, relative to the document source.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DocumentSet {
    pub difficulties: String,
    pub zones: String,
    pub monsters: String,
    pub tiers: String,
    pub affixes: String,
    pub loot_tables: String,
}

impl DocumentSet {
    pub fn location(&self, kind: DocumentKind) -> &str {
        match kind {
            DocumentKind::Difficulties => &self.difficulties,
            DocumentKind::Zones => &self.zones,
            DocumentKind::Monsters => &self.monsters,
            DocumentKind::Tiers => &self.tiers,
            DocumentKind::Affixes => &self.affixes,
            DocumentKind::LootTables => &self.loot_tables,
        }
    }

    pub fn set(&mut self, kind: DocumentKind, location: impl Into<String>) {
        let slot = match kind {
            DocumentKind::Difficulties => &mut self.difficulties,
            DocumentKind::Zones => &mut self.zones,
            DocumentKind::Monsters => &mut self.monsters,
            DocumentKind::Tiers => &mut self.tiers,
            DocumentKind::Affixes => &mut self.affixes,
            DocumentKind::LootTables => &mut self.loot_tables,
        };
        *slot = location.into();
    }

    #[must_use]
    pub fn with(mut self, kind: DocumentKind, location: impl Into<String>) -> Self {
        self.set(kind, location);
        self
    }

    /// Applies `f` to every location.
    #[must_use]
    pub fn map(&self, f: impl Fn(&str) -> String) -> Self {
        Self {
            difficulties: f(&self.difficulties),
            zones: f(&self.zones),
            monsters: f(&self.monsters),
            tiers: f(&self.tiers),
            affixes: f(&self.affixes),
            loot_tables: f(&self.loot_tables),
        }
    }
}

impl Default for DocumentSet {
    fn default() -> Self {
        Self {
            difficulties: DocumentKind::Difficulties.file_name().to_owned(),
            zones: DocumentKind::Zones.file_name().to_owned(),
            monsters: DocumentKind::Monsters.file_name().to_owned(),
            tiers: DocumentKind::Tiers.file_name().to_owned(),
            affixes: DocumentKind::Affixes.file_name().to_owned(),
            loot_tables: DocumentKind::LootTables.file_name().to_owned(),
        }
    }
}

/// Configuration for loading content and spawning packs.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub data_dir: PathBuf,
    pub documents: DocumentSet,
    /// Emit a spawn diagnostic for every request.
    pub debug: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            documents: DocumentSet::default(),
            debug: false,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PACK_DATA_DIR` - Directory holding the documents (default: `data`)
    /// - `PACK_DEBUG` - Emit spawn diagnostics (default: false)
    /// - `PACK_DOC_DIFFICULTIES`, `PACK_DOC_ZONES`, `PACK_DOC_MONSTERS`,
    ///   `PACK_DOC_TIERS`, `PACK_DOC_AFFIXES`, `PACK_DOC_LOOT_TABLES` -
    ///   Override a single document location
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("PACK_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        // A bare `PACK_DEBUG=` also counts as enabled.
        if let Some(value) = lookup("PACK_DEBUG") {
            config.debug = value.parse::<bool>().unwrap_or(value.is_empty() || value == "1");
        }

        for (kind, key) in DOCUMENT_VARS {
            if let Some(location) = lookup(key) {
                config.documents.set(kind, location);
            }
        }

        config
    }
}

const DOCUMENT_VARS: [(DocumentKind, &str); 6] = [
    (DocumentKind::Difficulties, "PACK_DOC_DIFFICULTIES"),
    (DocumentKind::Zones, "PACK_DOC_ZONES"),
    (DocumentKind::Monsters, "PACK_DOC_MONSTERS"),
    (DocumentKind::Tiers, "PACK_DOC_TIERS"),
    (DocumentKind::Affixes, "PACK_DOC_AFFIXES"),
    (DocumentKind::LootTables, "PACK_DOC_LOOT_TABLES"),
];
