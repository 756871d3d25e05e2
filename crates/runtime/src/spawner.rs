//! The spawn entry point.
use std::sync::Arc;

use pack_content::GameData;
use pack_core::{DiagnosticSink, Pack, SpawnRequest, generate_pack};
use tracing::{debug, warn};

use crate::cache::DocumentCache;
use crate::config::RuntimeConfig;
use crate::diagnostics::TracingSink;
use crate::error::Result;
use crate::loader::DataLoader;

/// Loads content on first use and turns spawn requests into packs.
///
/// Concurrent requests share the cached snapshot; each one seeds its own
/// RNG stream, so nothing mutable is shared between them.
#[derive(Clone)]
pub struct Spawner {
    loader: DataLoader,
    sink: Arc<dyn DiagnosticSink>,
    debug: bool,
}

impl Spawner {
    /// Spawner logging diagnostics through [`TracingSink`].
    pub fn new(loader: DataLoader) -> Self {
        Self {
            loader,
            sink: Arc::new(TracingSink),
            debug: false,
        }
    }

    /// Spawner over files in `config.data_dir`, with a fresh cache.
    pub fn from_config(config: &RuntimeConfig) -> Self {
        let loader = DataLoader::from_config(config, Arc::new(DocumentCache::new()));
        Self::new(loader).with_debug(config.debug)
    }

    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Forces `debug` on every request.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// The loaded snapshot, for listing zones and difficulties.
    pub async fn data(&self) -> Result<Arc<GameData>> {
        Ok(self.loader.load().await?)
    }

    /// Generates one pack: the leader first, then minions in order.
    ///
    /// A failure leaves the cached snapshot untouched.
    pub async fn spawn_pack(&self, mut request: SpawnRequest) -> Result<Pack> {
        let data = self.loader.load().await?;
        request.debug |= self.debug;

        debug!(
            target: "runtime::spawn",
            zone = %request.zone_id,
            difficulty = %request.difficulty,
            seed = %request.seed,
            "spawning pack"
        );
        let pack = generate_pack(data.as_ref(), &request, self.sink.as_ref()).inspect_err(
            |error| {
                warn!(
                    target: "runtime::spawn",
                    zone = %request.zone_id,
                    difficulty = %request.difficulty,
                    error = %error,
                    "spawn failed"
                );
            },
        )?;
        debug!(target: "runtime::spawn", units = pack.len(), "pack ready");
        Ok(pack)
    }
}
