//! Async runtime for pack generation.
//!
//! Wires document retrieval, the document cache and validation into a single
//! entry point:
//!
//! - [`source`] fetches raw documents ([`FileDocumentSource`], [`StaticDocumentSource`])
//! - [`cache`] holds validated documents and snapshots with an explicit lifecycle
//! - [`loader`] loads the six documents concurrently into a [`pack_content::GameData`]
//! - [`spawner`] exposes [`Spawner::spawn_pack`]
//! - [`diagnostics`] forwards core diagnostics to `tracing`
pub mod cache;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod loader;
pub mod source;
pub mod spawner;

pub use cache::DocumentCache;
pub use config::{DocumentSet, RuntimeConfig};
pub use diagnostics::TracingSink;
pub use error::{CacheError, FetchError, LoadError, Result, RuntimeError};
pub use loader::DataLoader;
pub use source::{DocumentSource, FileDocumentSource, StaticDocumentSource};
pub use spawner::Spawner;
