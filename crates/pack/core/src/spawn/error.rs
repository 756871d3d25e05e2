//! Errors raised while assembling a pack.

use crate::error::{ErrorSeverity, PackError};
use crate::formula::FormulaError;
use crate::rng::RngError;

/// Failure of a single spawn call. The loaded data stays valid.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SpawnError {
    #[error("unknown zone '{0}'")]
    UnknownZone(String),

    #[error("zone '{0}' has an empty spawn table")]
    EmptySpawnTable(String),

    #[error("zone '{zone}' spawns unknown monster '{monster}'")]
    UnknownMonster { zone: String, monster: String },

    #[error("unknown tier '{0}'")]
    UnknownTier(String),

    #[error("unknown difficulty '{0}'")]
    UnknownDifficulty(String),

    #[error(transparent)]
    Rng(#[from] RngError),

    #[error(transparent)]
    Formula(#[from] FormulaError),
}

impl PackError for SpawnError {
    fn severity(&self) -> ErrorSeverity {
        use SpawnError::*;
        match self {
            UnknownZone(_) | UnknownDifficulty(_) => ErrorSeverity::Validation,

            // The loader rejects both of these, so seeing one means the
            // snapshot was not built by the loader.
            EmptySpawnTable(_) | UnknownMonster { .. } => ErrorSeverity::Internal,

            UnknownTier(_) => ErrorSeverity::Fatal,

            Rng(err) => err.severity(),
            Formula(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use SpawnError::*;
        match self {
            UnknownZone(_) => "SPAWN_UNKNOWN_ZONE",
            EmptySpawnTable(_) => "SPAWN_EMPTY_SPAWN_TABLE",
            UnknownMonster { .. } => "SPAWN_UNKNOWN_MONSTER",
            UnknownTier(_) => "SPAWN_UNKNOWN_TIER",
            UnknownDifficulty(_) => "SPAWN_UNKNOWN_DIFFICULTY",
            Rng(err) => err.error_code(),
            Formula(err) => err.error_code(),
        }
    }
}
