//! Explicit cache for validated documents and assembled snapshots.
//!
//! Created once and shared as `Arc<DocumentCache>`. Entries are never
//! replaced: when two loads race on the same key, the first insert wins and
//! both callers get that value. [`DocumentCache::clear`] is the only way to
//! force a fresh load.
//!
//! Keys are resolved source locations (see
//! [`crate::source::DocumentSource::resolve`]), so one cache can be shared by
//! loaders reading from different sources.
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use pack_content::{DocumentKind, GameData, Table};
use tracing::debug;

use crate::config::DocumentSet;
use crate::error::CacheError;

type Result<T> = std::result::Result<T, CacheError>;

#[derive(Debug, Default)]
pub struct DocumentCache {
    tables: RwLock<HashMap<(DocumentKind, String), Arc<Table>>>,
    snapshots: RwLock<HashMap<DocumentSet, Arc<GameData>>>,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: DocumentKind, location: &str) -> Result<Option<Arc<Table>>> {
        let tables = self.tables.read().map_err(|_| CacheError::LockPoisoned)?;
        Ok(tables.get(&(kind, location.to_owned())).cloned())
    }

    /// Caches a validated document and returns the cached value.
    pub fn insert(&self, kind: DocumentKind, location: &str, table: Table) -> Result<Arc<Table>> {
        let mut tables = self.tables.write().map_err(|_| CacheError::LockPoisoned)?;
        let cached = tables
            .entry((kind, location.to_owned()))
            .or_insert_with(|| Arc::new(table));
        Ok(Arc::clone(cached))
    }

    pub fn snapshot(&self, documents: &DocumentSet) -> Result<Option<Arc<GameData>>> {
        let snapshots = self.snapshots.read().map_err(|_| CacheError::LockPoisoned)?;
        Ok(snapshots.get(documents).cloned())
    }

    /// Caches an assembled snapshot and returns the cached value.
    pub fn store_snapshot(&self, documents: DocumentSet, data: GameData) -> Result<Arc<GameData>> {
        let mut snapshots = self
            .snapshots
            .write()
            .map_err(|_| CacheError::LockPoisoned)?;
        let cached = snapshots
            .entry(documents)
            .or_insert_with(|| Arc::new(data));
        Ok(Arc::clone(cached))
    }

    /// Number of cached documents.
    pub fn len(&self) -> Result<usize> {
        Ok(self
            .tables
            .read()
            .map_err(|_| CacheError::LockPoisoned)?
            .len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Drops every cached document and snapshot.
    ///
    /// Snapshots already handed out stay valid; later loads fetch again.
    pub fn clear(&self) -> Result<()> {
        let mut tables = self.tables.write().map_err(|_| CacheError::LockPoisoned)?;
        let mut snapshots = self
            .snapshots
            .write()
            .map_err(|_| CacheError::LockPoisoned)?;
        debug!(
            target: "runtime::cache",
            documents = tables.len(),
            snapshots = snapshots.len(),
            "clearing document cache"
        );
        tables.clear();
        snapshots.clear();
        Ok(())
    }
}
