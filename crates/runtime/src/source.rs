//! Asynchronous document retrieval.
//!
//! The loader only needs "give me the text at this location". Files on disk
//! and in-memory maps are provided; anything else (HTTP, object storage)
//! plugs in through [`DocumentSource`].
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::FetchError;

/// Retrieves raw document text by location.
///
/// Implementations must not retry; the first failure is reported as is.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<String, FetchError>;

    /// Source location `location` refers to. Used as the cache key.
    ///
    /// Two sources that serve different bodies for the same location must
    /// resolve it differently. The default returns `location` unchanged.
    fn resolve(&self, location: &str) -> String {
        location.to_owned()
    }
}

/// Reads documents from files under a root directory.
#[derive(Clone, Debug)]
pub struct FileDocumentSource {
    root: PathBuf,
}

impl FileDocumentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, location: &str) -> PathBuf {
        self.root.join(location)
    }
}

#[async_trait]
impl DocumentSource for FileDocumentSource {
    async fn fetch(&self, location: &str) -> Result<String, FetchError> {
        let path = self.path(location);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => FetchError::NotFound {
                    location: path.display().to_string(),
                },
                _ => FetchError::Io {
                    location: path.display().to_string(),
                    source,
                },
            })
    }

    fn resolve(&self, location: &str) -> String {
        self.path(location).display().to_string()
    }
}

#[derive(Clone, Debug)]
enum Response {
    Body(String),
    Status(u16),
}

/// Serves documents from memory.
///
/// Useful for embedded content and tests; a location can also be set to
/// answer with a failure status.
#[derive(Clone, Debug, Default)]
pub struct StaticDocumentSource {
    responses: HashMap<String, Response>,
}

impl StaticDocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, location: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(location, body);
        self
    }

    #[must_use]
    pub fn with_status(mut self, location: impl Into<String>, status: u16) -> Self {
        self.responses
            .insert(location.into(), Response::Status(status));
        self
    }

    pub fn insert(&mut self, location: impl Into<String>, body: impl Into<String>) {
        self.responses
            .insert(location.into(), Response::Body(body.into()));
    }
}

#[async_trait]
impl DocumentSource for StaticDocumentSource {
    async fn fetch(&self, location: &str) -> Result<String, FetchError> {
        match self.responses.get(location) {
            Some(Response::Body(body)) => Ok(body.clone()),
            Some(Response::Status(status)) => Err(FetchError::Status {
                location: location.to_owned(),
                status: *status,
            }),
            None => Err(FetchError::NotFound {
                location: location.to_owned(),
            }),
        }
    }
}
