//! Concurrent loading of the six content documents.
use std::sync::Arc;

use pack_content::{ContentTables, DocumentKind, GameData, Table};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::cache::DocumentCache;
use crate::config::{DocumentSet, RuntimeConfig};
use crate::error::LoadError;
use crate::source::{DocumentSource, FileDocumentSource};

/// Fetches, validates and assembles the documents named by a [`DocumentSet`].
///
/// Validated documents and the assembled snapshot go into the shared
/// [`DocumentCache`], so repeated loads return the same snapshot without
/// touching the source.
#[derive(Clone)]
pub struct DataLoader {
    source: Arc<dyn DocumentSource>,
    cache: Arc<DocumentCache>,
    documents: DocumentSet,
    /// `documents` resolved against the source; keys every cache entry.
    resolved: DocumentSet,
}

impl DataLoader {
    pub fn new(
        source: Arc<dyn DocumentSource>,
        cache: Arc<DocumentCache>,
        documents: DocumentSet,
    ) -> Self {
        let resolved = documents.map(|location| source.resolve(location));
        Self {
            source,
            cache,
            documents,
            resolved,
        }
    }

    /// Loader reading files from `config.data_dir`.
    pub fn from_config(config: &RuntimeConfig, cache: Arc<DocumentCache>) -> Self {
        Self::new(
            Arc::new(FileDocumentSource::new(&config.data_dir)),
            cache,
            config.documents.clone(),
        )
    }

    pub fn documents(&self) -> &DocumentSet {
        &self.documents
    }

    /// Returns the validated snapshot, loading it on first use.
    ///
    /// All six documents are retrieved concurrently; the first failure
    /// (transport, parse, validation, cross-reference) aborts the load and
    /// nothing is cached for the set as a whole.
    pub async fn load(&self) -> Result<Arc<GameData>, LoadError> {
        if let Some(data) = self.cache.snapshot(&self.resolved)? {
            debug!(target: "runtime::loader", "using cached snapshot");
            return Ok(data);
        }

        self.assemble().await.inspect_err(|error| {
            warn!(target: "runtime::loader", error = %error, "content load failed");
        })
    }

    async fn assemble(&self) -> Result<Arc<GameData>, LoadError> {
        let (difficulties, zones, monsters, tiers, affixes, loot_tables) = tokio::try_join!(
            self.table(DocumentKind::Difficulties),
            self.table(DocumentKind::Zones),
            self.table(DocumentKind::Monsters),
            self.table(DocumentKind::Tiers),
            self.table(DocumentKind::Affixes),
            self.table(DocumentKind::LootTables),
        )?;

        let tables: ContentTables = [difficulties, zones, monsters, tiers, affixes, loot_tables]
            .into_iter()
            .map(Arc::unwrap_or_clone)
            .collect();
        let data = GameData::new(tables)?;
        let data = self.cache.store_snapshot(self.resolved.clone(), data)?;

        info!(
            target: "runtime::loader",
            difficulties = data.difficulties().len(),
            zones = data.zones().len(),
            monsters = data.monsters().len(),
            tiers = data.tiers().len(),
            affixes = data.affixes().len(),
            loot_tables = data.loot_tables().len(),
            "content loaded"
        );
        Ok(data)
    }

    async fn table(&self, kind: DocumentKind) -> Result<Arc<Table>, LoadError> {
        let location = self.documents.location(kind);
        let key = self.resolved.location(kind);
        if let Some(table) = self.cache.get(kind, key)? {
            debug!(target: "runtime::loader", document = %kind, location = key, "cache hit");
            return Ok(table);
        }

        debug!(target: "runtime::loader", document = %kind, location, "fetching document");
        let body = self
            .source
            .fetch(location)
            .await
            .map_err(|source| LoadError::Fetch {
                document: kind,
                source,
            })?;
        let value: Value = serde_json::from_str(&body).map_err(|source| LoadError::Parse {
            document: kind,
            location: location.to_owned(),
            source,
        })?;
        let table = Table::validate(kind, &value)?;
        Ok(self.cache.insert(kind, key, table)?)
    }
}
