//! Error types surfaced by the runtime.
//!
//! Loading fails with [`LoadError`]; the spawn entry point wraps it together
//! with core spawn failures in [`RuntimeError`].

use pack_content::{DocumentKind, ValidationError};
use pack_core::{ErrorSeverity, PackError, SpawnError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// A document could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("document '{location}' not found")]
    NotFound { location: String },

    #[error("I/O error reading '{location}'")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{location}' answered with status {status}")]
    Status { location: String, status: u16 },
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("document cache lock was poisoned")]
    LockPoisoned,
}

/// A load attempt failed. The first failure aborts the whole load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch {document}")]
    Fetch {
        document: DocumentKind,
        #[source]
        source: FetchError,
    },

    #[error("failed to parse {document} from '{location}'")]
    Parse {
        document: DocumentKind,
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}

impl PackError for LoadError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            LoadError::Fetch { .. } | LoadError::Parse { .. } => ErrorSeverity::Fatal,
            LoadError::Validation(err) => err.severity(),
            LoadError::Cache(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            LoadError::Fetch { .. } => "LOAD_FETCH",
            LoadError::Parse { .. } => "LOAD_PARSE",
            LoadError::Validation(err) => err.error_code(),
            LoadError::Cache(_) => "LOAD_CACHE_POISONED",
        }
    }
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to load game data")]
    Load(#[from] LoadError),

    #[error(transparent)]
    Spawn(#[from] SpawnError),
}

impl PackError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Load(err) => err.severity(),
            RuntimeError::Spawn(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Load(err) => err.error_code(),
            RuntimeError::Spawn(err) => err.error_code(),
        }
    }
}
